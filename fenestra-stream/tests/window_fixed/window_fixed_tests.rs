// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::{ConfigurationError, Window};
use fenestra_stream::WindowFixedExt;
use fenestra_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_windows, test_channel, unwrap_stream,
    unwrap_value,
};
use futures::stream::FusedStream;

#[tokio::test]
async fn test_window_fixed_emits_when_full() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_fixed(3)?;

    // Act & Assert
    tx.send(1)?;
    tx.send(2)?;
    assert_no_element_emitted(&mut result, 100).await;

    tx.send(3)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1, 2, 3]
    );

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_partial_window_on_completion() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_fixed(4)?;

    // Act
    for i in 1..=10 {
        tx.send(i)?;
    }
    drop(tx);

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1, 2, 3, 4]
    );
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [5, 6, 7, 8]
    );
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [9, 10]
    );
    assert_stream_ended(&mut result, 500).await;
    assert!(result.is_terminated());

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_exact_multiple_has_no_empty_tail() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let result = stream.window_fixed(3)?;

    // Act
    for i in 1..=9 {
        tx.send(i)?;
    }
    drop(tx);

    // Assert
    assert_eq!(
        collect_windows(result).await,
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]
    );

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_empty_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_fixed(5)?;

    // Act
    drop(tx);

    // Assert
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_window_larger_than_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<&'static str>();
    let mut result = stream.window_fixed(10)?;

    // Act
    tx.send("a")?;
    tx.send("b")?;
    assert_no_element_emitted(&mut result, 100).await;
    drop(tx);

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        ["a", "b"]
    );
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_size_one_wraps_each_item() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_fixed(1)?;

    // Act & Assert
    for i in 1..=3 {
        tx.send(i)?;
        let window: Window<i32> = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
        assert_eq!(window, [i]);
    }

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_zero_size_is_rejected() -> anyhow::Result<()> {
    // Arrange
    let (_tx, stream) = test_channel::<i32>();

    // Act
    let result = stream.window_fixed(0);

    // Assert
    assert!(matches!(
        result,
        Err(ConfigurationError::InvalidWindowSize { size: 0 })
    ));

    Ok(())
}

#[tokio::test]
async fn test_window_fixed_non_clone_items() -> anyhow::Result<()> {
    #[derive(Debug, PartialEq)]
    struct Frame(u8);

    // Arrange
    let (tx, stream) = test_channel::<Frame>();
    let result = stream.window_fixed(2)?;

    // Act
    tx.send(Frame(1))?;
    tx.send(Frame(2))?;
    tx.send(Frame(3))?;
    drop(tx);

    // Assert
    assert_eq!(
        collect_windows(result).await,
        vec![vec![Frame(1), Frame(2)], vec![Frame(3)]]
    );

    Ok(())
}
