// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Window emission policies.
//!
//! A policy decides what a full (or final) buffer turns into and how the
//! buffer must be prepared for the next window. Both policies validate their
//! sizes on construction; an invalid size never reaches an engine.
//!
//! | Policy | `slide` vs `window` | Next window starts with |
//! |--------|---------------------|-------------------------|
//! | [`Fixed`] | n/a | an empty buffer |
//! | [`Sliding`], overlapping | `slide < window` | the last `window - slide` elements |
//! | [`Sliding`], tiling | `slide == window` | an empty buffer |
//! | [`Sliding`], gapped | `slide > window` | an empty buffer, after skipping `slide - window` elements |

use core::num::NonZeroUsize;

use crate::error::ConfigurationError;
use crate::window::Window;
use crate::window_buffer::WindowBuffer;

/// A window produced by a policy, plus the number of upstream elements to
/// discard before the next window starts accumulating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission<T> {
    pub window: Window<T>,
    pub skip: usize,
}

/// Control contract shared by every windowing policy.
pub trait WindowPolicy<T> {
    /// Maximum number of elements per window.
    fn window_size(&self) -> usize;

    /// Turns the current buffer contents into a window.
    ///
    /// On return the buffer holds exactly the elements that seed the next
    /// window, and [`Emission::skip`] tells how many upcoming elements belong
    /// to no window at all.
    fn emit(&self, buffer: &mut WindowBuffer<T>) -> Emission<T>;
}

fn window_size(size: usize) -> Result<NonZeroUsize, ConfigurationError> {
    NonZeroUsize::new(size).ok_or(ConfigurationError::InvalidWindowSize { size })
}

/// Contiguous, non-overlapping windows of `window_size` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixed {
    window_size: NonZeroUsize,
}

impl Fixed {
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidWindowSize`] if `window_size` is 0.
    pub fn new(window_size: usize) -> Result<Self, ConfigurationError> {
        Ok(Self {
            window_size: self::window_size(window_size)?,
        })
    }

    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size.get()
    }
}

impl<T> WindowPolicy<T> for Fixed {
    fn window_size(&self) -> usize {
        self.window_size.get()
    }

    fn emit(&self, buffer: &mut WindowBuffer<T>) -> Emission<T> {
        Emission {
            window: buffer.drain_as_window(),
            skip: 0,
        }
    }
}

/// How consecutive sliding windows relate to each other.
///
/// Decided once, when the [`Sliding`] policy is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideRegime {
    /// `slide < window`: each window carries the last `carry_over` elements
    /// of its predecessor.
    Overlapping { carry_over: usize },
    /// `slide == window`: identical to [`Fixed`].
    Tiling,
    /// `slide > window`: `skip` elements between windows are consumed but
    /// never emitted.
    Gapped { skip: usize },
}

/// Windows of `window_size` elements whose start advances by `slide_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sliding {
    window_size: NonZeroUsize,
    slide_size: NonZeroUsize,
    regime: SlideRegime,
}

impl Sliding {
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidWindowSize`] if `window_size` is 0,
    /// otherwise [`ConfigurationError::InvalidSlideSize`] if `slide_size` is 0.
    pub fn new(window_size: usize, slide_size: usize) -> Result<Self, ConfigurationError> {
        let window = self::window_size(window_size)?;
        let slide = NonZeroUsize::new(slide_size)
            .ok_or(ConfigurationError::InvalidSlideSize { size: slide_size })?;

        let regime = match slide_size.cmp(&window_size) {
            core::cmp::Ordering::Less => SlideRegime::Overlapping {
                carry_over: window_size - slide_size,
            },
            core::cmp::Ordering::Equal => SlideRegime::Tiling,
            core::cmp::Ordering::Greater => SlideRegime::Gapped {
                skip: slide_size - window_size,
            },
        };
        debug!("sliding window {window_size}/{slide_size} selected {regime:?}");

        Ok(Self {
            window_size: window,
            slide_size: slide,
            regime,
        })
    }

    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size.get()
    }

    #[must_use]
    pub const fn slide_size(&self) -> usize {
        self.slide_size.get()
    }

    #[must_use]
    pub const fn regime(&self) -> SlideRegime {
        self.regime
    }
}

impl<T: Clone> WindowPolicy<T> for Sliding {
    fn window_size(&self) -> usize {
        self.window_size.get()
    }

    fn emit(&self, buffer: &mut WindowBuffer<T>) -> Emission<T> {
        let len = buffer.len();
        let slide = self.slide_size.get();

        if slide < len {
            // The next window starts inside this one: copy out, keep the tail.
            let window = buffer.snapshot();
            buffer.retain_last(len - slide);
            Emission { window, skip: 0 }
        } else {
            Emission {
                window: buffer.drain_as_window(),
                skip: slide - len,
            }
        }
    }
}
