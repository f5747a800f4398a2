// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Async stream adapters for fixed and sliding windows.
//!
//! Every operator here consumes a stream of [`StreamItem<T>`] and produces a
//! stream of [`StreamItem<Window<T>>`]. Windows are assembled by the same
//! [`WindowState`](fenestra_core::WindowState) that drives the synchronous
//! engine, so both front ends emit identical windows for identical input.
//!
//! # Operators
//!
//! | Operator | Emits |
//! |----------|-------|
//! | [`window_fixed`](WindowFixedExt::window_fixed) | contiguous windows of `n` items |
//! | [`window_sliding`](WindowSlidingExt::window_sliding) | windows of `w` items starting every `s` items |
//!
//! # Errors
//!
//! An upstream [`StreamItem::Error`] is forwarded as soon as it arrives. The
//! window being assembled is dropped and the windowed stream ends right
//! after the error.
//!
//! ```
//! use fenestra_core::{FenestraError, StreamItem};
//! use fenestra_stream::prelude::*;
//! use fenestra_test_utils::{test_channel_with_errors, unwrap_stream};
//!
//! # #[tokio::main]
//! # async fn main() {
//! use futures::StreamExt;
//!
//! let (tx, stream) = test_channel_with_errors::<i32>();
//! let mut windows = stream.window_fixed(2).unwrap();
//!
//! tx.send(StreamItem::Value(1)).unwrap();
//! tx.send(StreamItem::Error(FenestraError::source_error("sensor offline"))).unwrap();
//!
//! assert!(unwrap_stream(&mut windows, 500).await.is_error());
//! assert!(windows.next().await.is_none());
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod prelude;
pub mod window_fixed;
pub mod window_sliding;
pub mod windowed_stream;

pub use fenestra_core::{StreamItem, Window};
pub use window_fixed::WindowFixedExt;
pub use window_sliding::WindowSlidingExt;
pub use windowed_stream::WindowedStream;
