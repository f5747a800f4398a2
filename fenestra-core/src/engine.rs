// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pull-based windowing engine.
//!
//! A [`WindowEngine`] is bound to exactly one [`Source`] for exactly one
//! traversal. Each call to [`next_window`](WindowEngine::next_window) pulls
//! as many elements as the next window needs and no more.
//!
//! # Examples
//!
//! ```
//! use fenestra_core::{IterSource, WindowEngine};
//!
//! let mut engine = WindowEngine::sliding(IterSource::new(1..=10), 2, 4).unwrap();
//!
//! let mut windows = Vec::new();
//! while let Some(window) = engine.next_window().unwrap() {
//!     windows.push(window.into_vec());
//! }
//!
//! // 3, 4, 7 and 8 fall into the gaps
//! assert_eq!(windows, vec![vec![1, 2], vec![5, 6], vec![9, 10]]);
//! assert!(!engine.has_more());
//! ```
//!
//! Source failures abort the window being assembled and end the traversal:
//!
//! ```
//! use fenestra_core::TryWindowIteratorExt;
//!
//! let items = vec![Ok(1), Ok(2), Ok(3), Err("disk gone"), Ok(5)];
//! let mut windows = items.into_iter().try_window_fixed(2).unwrap();
//!
//! assert_eq!(windows.next().unwrap().unwrap(), [1, 2]);
//! assert_eq!(windows.next().unwrap().unwrap_err(), "disk gone");
//! assert!(windows.next().is_none());
//! ```

use core::iter::FusedIterator;

use crate::error::ConfigurationError;
use crate::policy::{Fixed, Sliding, WindowPolicy};
use crate::source::{IterSource, Source, TryIterSource};
use crate::state::WindowState;
use crate::window::Window;

/// Engine producing fixed windows from `S`.
pub type FixedWindows<S> = WindowEngine<S, Fixed>;

/// Engine producing sliding windows from `S`.
pub type SlidingWindows<S> = WindowEngine<S, Sliding>;

/// Windowing engine wrapping one source and one policy.
pub struct WindowEngine<S: Source, P> {
    source: S,
    state: WindowState<S::Item, P>,
}

impl<S: Source> WindowEngine<S, Fixed> {
    /// Creates an engine emitting contiguous windows of `window_size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidWindowSize`] if `window_size` is 0.
    pub fn fixed(source: S, window_size: usize) -> Result<Self, ConfigurationError> {
        Ok(Self::with_policy(source, Fixed::new(window_size)?))
    }
}

impl<S> WindowEngine<S, Sliding>
where
    S: Source,
    S::Item: Clone,
{
    /// Creates an engine emitting windows of `window_size` elements whose
    /// start advances by `slide_size`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if either size is 0.
    pub fn sliding(
        source: S,
        window_size: usize,
        slide_size: usize,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::with_policy(
            source,
            Sliding::new(window_size, slide_size)?,
        ))
    }
}

impl<S, P> WindowEngine<S, P>
where
    S: Source,
    P: WindowPolicy<S::Item>,
{
    /// Creates an engine from an already validated policy.
    pub fn with_policy(source: S, policy: P) -> Self {
        Self {
            source,
            state: WindowState::new(policy),
        }
    }

    /// Produces the next window.
    ///
    /// Returns `Ok(None)` once every window has been emitted; further calls
    /// keep returning `Ok(None)` without touching the source. A caller that
    /// wants a `(window, has_more)` pair reads [`has_more`](Self::has_more)
    /// right after this returns: `false` means no further window can come,
    /// while `true` may still be answered by `Ok(None)` on the next demand.
    ///
    /// # Errors
    ///
    /// Returns the source's failure unchanged. The partially assembled window
    /// is discarded and the engine becomes terminal.
    pub fn next_window(&mut self) -> Result<Option<Window<S::Item>>, S::Error> {
        while self.state.wants_input() {
            match self.source.pull() {
                Ok(Some(item)) => {
                    if let Some(window) = self.state.offer(item) {
                        return Ok(Some(window));
                    }
                }
                Ok(None) => break,
                Err(error) => {
                    self.state.abort();
                    return Err(error);
                }
            }
        }
        Ok(self.state.complete())
    }

    /// Returns `false` once the engine knows no further window will come.
    ///
    /// No lookahead is performed to answer this: right after the last window
    /// of an exactly divisible source it still reports `true`, and the next
    /// demand returns end of windows.
    pub fn has_more(&self) -> bool {
        !self.state.is_terminal()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn policy(&self) -> &P {
        self.state.policy()
    }

    /// Gives back the source, e.g. to inspect what is left after an early stop.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S, P> Iterator for WindowEngine<S, P>
where
    S: Source,
    P: WindowPolicy<S::Item>,
{
    type Item = Result<Window<S::Item>, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_window().transpose()
    }
}

impl<S, P> FusedIterator for WindowEngine<S, P>
where
    S: Source,
    P: WindowPolicy<S::Item>,
{
}

/// Creates a fixed-window engine over `source`.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidWindowSize`] if `window_size` is 0.
pub fn window_fixed<S: Source>(
    source: S,
    window_size: usize,
) -> Result<FixedWindows<S>, ConfigurationError> {
    WindowEngine::fixed(source, window_size)
}

/// Creates a sliding-window engine over `source`.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if either size is 0.
pub fn window_sliding<S>(
    source: S,
    window_size: usize,
    slide_size: usize,
) -> Result<SlidingWindows<S>, ConfigurationError>
where
    S: Source,
    S::Item: Clone,
{
    WindowEngine::sliding(source, window_size, slide_size)
}

/// Windows over an infallible iterator, yielding [`Window`]s directly.
pub struct Windows<I: Iterator, P> {
    engine: WindowEngine<IterSource<I>, P>,
}

impl<I, P> Windows<I, P>
where
    I: Iterator,
    P: WindowPolicy<I::Item>,
{
    pub fn has_more(&self) -> bool {
        self.engine.has_more()
    }

    pub fn policy(&self) -> &P {
        self.engine.policy()
    }
}

impl<I, P> Iterator for Windows<I, P>
where
    I: Iterator,
    P: WindowPolicy<I::Item>,
{
    type Item = Window<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.engine.next_window() {
            Ok(window) => window,
            Err(never) => match never {},
        }
    }
}

impl<I, P> FusedIterator for Windows<I, P>
where
    I: Iterator,
    P: WindowPolicy<I::Item>,
{
}

/// Extension trait adding windowing operators to every iterator.
pub trait WindowIteratorExt: Iterator + Sized {
    /// Groups consecutive items into contiguous windows of `window_size`.
    ///
    /// The last window is shorter when the item count is not a multiple of
    /// `window_size`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidWindowSize`] if `window_size` is 0.
    ///
    /// ```
    /// use fenestra_core::WindowIteratorExt;
    ///
    /// let mut windows = "abcde".chars().window_fixed(2).unwrap();
    ///
    /// assert_eq!(windows.next().unwrap(), ['a', 'b']);
    /// assert_eq!(windows.next().unwrap(), ['c', 'd']);
    /// assert_eq!(windows.next().unwrap(), ['e']);
    /// assert!(windows.next().is_none());
    /// ```
    fn window_fixed(self, window_size: usize) -> Result<Windows<Self, Fixed>, ConfigurationError>;

    /// Groups items into windows of `window_size` starting every `slide_size`
    /// items.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if either size is 0.
    ///
    /// ```
    /// use fenestra_core::WindowIteratorExt;
    ///
    /// let windows: Vec<_> = (1..=4).window_sliding(3, 1).unwrap().collect();
    ///
    /// assert_eq!(windows.len(), 4);
    /// assert_eq!(windows[0], [1, 2, 3]);
    /// assert_eq!(windows[1], [2, 3, 4]);
    /// assert_eq!(windows[2], [3, 4]);
    /// assert_eq!(windows[3], [4]);
    /// ```
    fn window_sliding(
        self,
        window_size: usize,
        slide_size: usize,
    ) -> Result<Windows<Self, Sliding>, ConfigurationError>
    where
        Self::Item: Clone;
}

impl<I: Iterator> WindowIteratorExt for I {
    fn window_fixed(self, window_size: usize) -> Result<Windows<Self, Fixed>, ConfigurationError> {
        Ok(Windows {
            engine: WindowEngine::fixed(IterSource::new(self), window_size)?,
        })
    }

    fn window_sliding(
        self,
        window_size: usize,
        slide_size: usize,
    ) -> Result<Windows<Self, Sliding>, ConfigurationError>
    where
        Self::Item: Clone,
    {
        Ok(Windows {
            engine: WindowEngine::sliding(IterSource::new(self), window_size, slide_size)?,
        })
    }
}

/// Extension trait adding windowing operators to iterators of `Result`s.
///
/// The first `Err` is yielded in place of the window it interrupted, after
/// which the windows iterator is exhausted.
pub trait TryWindowIteratorExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Fallible counterpart of [`WindowIteratorExt::window_fixed`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidWindowSize`] if `window_size` is 0.
    fn try_window_fixed(
        self,
        window_size: usize,
    ) -> Result<FixedWindows<TryIterSource<Self>>, ConfigurationError>;

    /// Fallible counterpart of [`WindowIteratorExt::window_sliding`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if either size is 0.
    fn try_window_sliding(
        self,
        window_size: usize,
        slide_size: usize,
    ) -> Result<SlidingWindows<TryIterSource<Self>>, ConfigurationError>
    where
        T: Clone;
}

impl<I, T, E> TryWindowIteratorExt<T, E> for I
where
    I: Iterator<Item = Result<T, E>>,
{
    fn try_window_fixed(
        self,
        window_size: usize,
    ) -> Result<FixedWindows<TryIterSource<Self>>, ConfigurationError> {
        WindowEngine::fixed(TryIterSource::new(self), window_size)
    }

    fn try_window_sliding(
        self,
        window_size: usize,
        slide_size: usize,
    ) -> Result<SlidingWindows<TryIterSource<Self>>, ConfigurationError>
    where
        T: Clone,
    {
        WindowEngine::sliding(TryIterSource::new(self), window_size, slide_size)
    }
}
