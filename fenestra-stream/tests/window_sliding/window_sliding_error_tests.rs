// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for `window_sliding` operator.

use fenestra_core::{FenestraError, StreamItem};
use fenestra_stream::WindowSlidingExt;
use fenestra_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel_with_errors, unwrap_stream,
    unwrap_value, ErrorInjectingStream,
};
use futures::stream;

#[tokio::test]
async fn test_window_sliding_error_drops_carried_over_items() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.window_sliding(3, 1)?;

    // Act
    for i in 1..=3 {
        tx.send(StreamItem::Value(i))?;
    }
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1, 2, 3]
    );
    tx.send(StreamItem::Error(FenestraError::source_error("test error")))?;

    // Assert: no trailing [2, 3] or [3] after the error
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    drop(tx);
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_error_inside_gap() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.window_sliding(1, 3)?;

    // Act
    tx.send(StreamItem::Value(1))?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1]
    );
    tx.send(StreamItem::Value(2))?;
    assert_no_element_emitted(&mut result, 100).await;
    tx.send(StreamItem::Error(FenestraError::source_error("gap failure")))?;

    // Assert
    assert!(matches!(
        unwrap_stream(&mut result, 500).await,
        StreamItem::Error(FenestraError::SourceError { context }) if context == "gap failure"
    ));
    tx.send(StreamItem::Value(4))?;
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_error_before_first_window() -> anyhow::Result<()> {
    // Arrange
    let values = stream::iter(vec![1, 2, 3, 4, 5]);

    // Act
    let mut result = ErrorInjectingStream::new(values, 0).window_sliding(2, 1)?;

    // Assert
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
