// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed window operator that batches stream items into contiguous chunks.
//!
//! # Overview
//!
//! [`window_fixed`](WindowFixedExt::window_fixed) collects items into windows
//! of a fixed size. Every item lands in exactly one window. When the upstream
//! completes, the remaining items are emitted as one shorter window.
//!
//! ```
//! use fenestra_stream::prelude::*;
//! use fenestra_test_utils::test_channel;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, stream) = test_channel::<i32>();
//! let mut windowed = stream.window_fixed(3).unwrap();
//!
//! tx.send(1).unwrap();
//! tx.send(2).unwrap();
//! tx.send(3).unwrap(); // Window complete!
//! tx.send(4).unwrap();
//! tx.send(5).unwrap();
//! drop(tx); // Partial window [4, 5] emitted on completion
//!
//! assert_eq!(windowed.next().await.unwrap().unwrap(), [1, 2, 3]);
//! assert_eq!(windowed.next().await.unwrap().unwrap(), [4, 5]);
//! assert!(windowed.next().await.is_none());
//! # }
//! ```
//!
//! # Use Cases
//!
//! - **Batch processing**: hand items downstream in groups
//! - **Protocol framing**: group records into frames of a known length

use fenestra_core::{ConfigurationError, Fixed, StreamItem};
use futures::Stream;

use crate::windowed_stream::WindowedStream;

/// Extension trait providing the [`window_fixed`](Self::window_fixed) operator.
///
/// Implemented for all streams of [`StreamItem<T>`].
pub trait WindowFixedExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Groups consecutive items into contiguous windows of `window_size`.
    ///
    /// # Behavior
    ///
    /// - **Values**: accumulated until the window is full, then emitted
    /// - **Errors**: the current window is dropped, the error is forwarded and
    ///   the stream ends
    /// - **Completion**: a non-empty partial window is emitted, then the stream ends
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidWindowSize`] if `window_size` is 0.
    fn window_fixed(
        self,
        window_size: usize,
    ) -> Result<WindowedStream<Self, T, Fixed>, ConfigurationError>;
}

impl<S, T> WindowFixedExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn window_fixed(
        self,
        window_size: usize,
    ) -> Result<WindowedStream<Self, T, Fixed>, ConfigurationError> {
        Ok(WindowedStream::new(self, Fixed::new(window_size)?))
    }
}
