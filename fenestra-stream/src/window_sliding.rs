// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding window operator.
//!
//! [`window_sliding`](WindowSlidingExt::window_sliding) emits windows of
//! `window_size` items whose start advances by `slide_size` items. Depending
//! on how the two sizes compare, consecutive windows share items, tile the
//! stream, or leave gaps of items that are consumed but never emitted.
//!
//! After the upstream completes, every window that starts before the end is
//! still emitted, so overlapping windows produce several shorter trailing
//! windows. An upstream that completes before the first window fills up
//! yields that one short window and nothing else.
//!
//! ```
//! use fenestra_stream::prelude::*;
//! use fenestra_test_utils::{collect_windows, test_channel};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, stream) = test_channel::<i32>();
//! let windowed = stream.window_sliding(3, 2).unwrap();
//!
//! for i in 1..=6 {
//!     tx.send(i).unwrap();
//! }
//! drop(tx);
//!
//! assert_eq!(
//!     collect_windows(windowed).await,
//!     vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6]]
//! );
//! # }
//! ```

use fenestra_core::{ConfigurationError, Sliding, StreamItem};
use futures::Stream;

use crate::windowed_stream::WindowedStream;

/// Extension trait providing the [`window_sliding`](Self::window_sliding) operator.
///
/// Items are cloned when they belong to more than one window.
pub trait WindowSlidingExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone,
{
    /// Emits windows of `window_size` items starting every `slide_size` items.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidWindowSize`] if `window_size` is 0,
    /// otherwise [`ConfigurationError::InvalidSlideSize`] if `slide_size` is 0.
    fn window_sliding(
        self,
        window_size: usize,
        slide_size: usize,
    ) -> Result<WindowedStream<Self, T, Sliding>, ConfigurationError>;
}

impl<S, T> WindowSlidingExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone,
{
    fn window_sliding(
        self,
        window_size: usize,
        slide_size: usize,
    ) -> Result<WindowedStream<Self, T, Sliding>, ConfigurationError> {
        Ok(WindowedStream::new(
            self,
            Sliding::new(window_size, slide_size)?,
        ))
    }
}
