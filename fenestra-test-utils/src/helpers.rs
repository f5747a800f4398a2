// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Assertion helpers for windowed streams.

use fenestra_core::{StreamItem, Window};
use futures::{Stream, StreamExt};
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Waits up to `timeout_ms` for the next item.
///
/// # Panics
///
/// Panics if the stream ends or nothing arrives in time.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Stream ended, expected an item."),
        Err(_) => panic!("No item emitted within {timeout_ms}ms."),
    }
}

/// Extracts the value of an emitted item.
///
/// # Panics
///
/// Panics on `None` or on `StreamItem::Error`.
pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("Expected a value, got error: {e}"),
        None => panic!("Expected a value, got nothing."),
    }
}

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected the stream to end, but it emitted an element."),
        Err(_) => panic!("Stream did not end within {timeout_ms}ms."),
    }
}

/// Drains a finite windowed stream into plain vectors.
///
/// # Panics
///
/// Panics if the stream yields an error.
pub async fn collect_windows<S, T>(stream: S) -> Vec<Vec<T>>
where
    S: Stream<Item = StreamItem<Window<T>>>,
{
    stream
        .map(|item| item.expect("windowed stream yielded an error").into_vec())
        .collect()
        .await
}
