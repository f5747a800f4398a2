// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the Fenestra windowing crates.
//!
//! This crate provides channels, stream assertions, failure injection and a
//! reference windowing model. It is designed for use in development and
//! testing only, not for production code.
//!
//! # Key Types
//!
//! - [`test_channel`] / [`test_channel_with_errors`]: push values (or errors)
//!   into a stream of [`StreamItem`]s from test code
//! - [`ScriptedSource`]: synchronous [`Source`](fenestra_core::Source) that
//!   counts pulls and fails on demand
//! - [`ErrorInjectingStream`]: wraps a stream and injects one error
//! - [`model::expected_windows`]: windows computed by start offset, used as
//!   the oracle in property tests
//!
//! # Examples
//!
//! ```rust
//! use fenestra_test_utils::ScriptedSource;
//! use fenestra_core::WindowEngine;
//!
//! let source = ScriptedSource::new(1..=5);
//! let mut engine = WindowEngine::fixed(source, 2).unwrap();
//!
//! assert_eq!(engine.next_window().unwrap().unwrap(), [1, 2]);
//! assert_eq!(engine.into_source().pulls(), 2);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod model;
pub mod scripted_source;

use fenestra_core::StreamItem;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, collect_windows, unwrap_stream, unwrap_value,
};
pub use scripted_source::{ScriptedError, ScriptedSource};

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// # Example
///
/// ```rust
/// use fenestra_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send(42).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> Value
/// assert_eq!(item, 42);
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// # Example
///
/// ```rust
/// use fenestra_test_utils::test_channel_with_errors;
/// use fenestra_core::{FenestraError, StreamItem};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(FenestraError::source_error("test error"))).unwrap();
///
/// assert!(stream.next().await.unwrap().is_value());
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
