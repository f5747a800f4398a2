// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for `window_fixed` operator.

use fenestra_core::{FenestraError, StreamItem};
use fenestra_stream::WindowFixedExt;
use fenestra_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel_with_errors, unwrap_stream,
    unwrap_value, ErrorInjectingStream,
};
use futures::stream::{self, FusedStream};

#[tokio::test]
async fn test_window_fixed_propagates_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.window_fixed(3)?;

    // Act: Send one value, then error
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(FenestraError::source_error("test error")))?;

    // Assert: Error is propagated
    assert!(matches!(
        unwrap_stream(&mut result, 500).await,
        StreamItem::Error(FenestraError::SourceError { context }) if context == "test error"
    ));

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_error_ends_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.window_fixed(2)?;

    // Act
    tx.send(StreamItem::Error(FenestraError::source_error("test error")))?;
    assert!(unwrap_stream(&mut result, 500).await.is_error());

    // Assert: Later values are never windowed
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Value(2))?;
    assert_stream_ended(&mut result, 500).await;
    assert!(result.is_terminated());

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_error_discards_partial_window() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.window_fixed(3)?;

    // Act: Complete one window, start a second, then fail
    for i in 1..=5 {
        tx.send(StreamItem::Value(i))?;
    }
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1, 2, 3]
    );
    assert_no_element_emitted(&mut result, 100).await;
    tx.send(StreamItem::Error(FenestraError::source_error("test error")))?;

    // Assert: [4, 5] never appears
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    drop(tx);
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_with_injected_error() -> anyhow::Result<()> {
    // Arrange
    let values = stream::iter(vec![1, 2, 3, 4]);

    // Act
    let mut result = ErrorInjectingStream::new(values, 2).window_fixed(2)?;

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1, 2]
    );
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
