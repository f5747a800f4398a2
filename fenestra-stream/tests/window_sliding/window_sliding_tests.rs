// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::{ConfigurationError, SlideRegime, WindowIteratorExt};
use fenestra_stream::{WindowFixedExt, WindowSlidingExt};
use fenestra_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_windows, model::expected_windows,
    test_channel, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_window_sliding_overlapping_step_one() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let result = stream.window_sliding(3, 1)?;

    // Act
    for i in 1..=10 {
        tx.send(i)?;
    }
    drop(tx);

    // Assert: one window per start offset, the last two partial
    assert_eq!(
        collect_windows(result).await,
        vec![
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 4, 5],
            vec![4, 5, 6],
            vec![5, 6, 7],
            vec![6, 7, 8],
            vec![7, 8, 9],
            vec![8, 9, 10],
            vec![9, 10],
            vec![10],
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_half_overlap() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let result = stream.window_sliding(4, 2)?;

    // Act
    for i in 1..=10 {
        tx.send(i)?;
    }
    drop(tx);

    // Assert
    assert_eq!(
        collect_windows(result).await,
        vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 5, 6],
            vec![5, 6, 7, 8],
            vec![7, 8, 9, 10],
            vec![9, 10],
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_gapped_skips_items() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_sliding(2, 4)?;

    // Act & Assert
    tx.send(1)?;
    tx.send(2)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1, 2]
    );

    // 3 and 4 fall into the gap
    tx.send(3)?;
    tx.send(4)?;
    assert_no_element_emitted(&mut result, 100).await;

    tx.send(5)?;
    tx.send(6)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [5, 6]
    );

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_overlap_emits_as_soon_as_full() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_sliding(3, 1)?;

    // Act & Assert
    tx.send(1)?;
    tx.send(2)?;
    assert_no_element_emitted(&mut result, 100).await;

    tx.send(3)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1, 2, 3]
    );

    tx.send(4)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [2, 3, 4]
    );

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_tiling_matches_fixed() -> anyhow::Result<()> {
    // Arrange
    let (tx_sliding, sliding) = test_channel::<i32>();
    let (tx_fixed, fixed) = test_channel::<i32>();
    let sliding = sliding.window_sliding(3, 3)?;
    let fixed = fixed.window_fixed(3)?;
    assert_eq!(sliding.policy().regime(), SlideRegime::Tiling);

    // Act
    for i in 1..=8 {
        tx_sliding.send(i)?;
        tx_fixed.send(i)?;
    }
    drop(tx_sliding);
    drop(tx_fixed);

    // Assert
    assert_eq!(collect_windows(sliding).await, collect_windows(fixed).await);

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_stream_shorter_than_window() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_sliding(2, 5)?;

    // Act
    tx.send(1)?;
    drop(tx);

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1]
    );
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_overlapping_short_stream_emits_single_window() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_sliding(3, 1)?;

    // Act
    tx.send(1)?;
    tx.send(2)?;
    assert_no_element_emitted(&mut result, 100).await;
    drop(tx);

    // Assert: the short window is not followed by [2]
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        [1, 2]
    );
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_half_overlap_short_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let result = stream.window_sliding(4, 2)?;

    // Act
    for i in 1..=3 {
        tx.send(i)?;
    }
    drop(tx);

    // Assert
    assert_eq!(collect_windows(result).await, vec![vec![1, 2, 3]]);

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_empty_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.window_sliding(3, 1)?;

    // Act
    drop(tx);

    // Assert
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_zero_sizes_are_rejected() -> anyhow::Result<()> {
    // Arrange
    let (_tx_a, a) = test_channel::<i32>();
    let (_tx_b, b) = test_channel::<i32>();

    // Act & Assert
    assert!(matches!(
        a.window_sliding(0, 1),
        Err(ConfigurationError::InvalidWindowSize { size: 0 })
    ));
    assert!(matches!(
        b.window_sliding(3, 0),
        Err(ConfigurationError::InvalidSlideSize { size: 0 })
    ));

    Ok(())
}

#[tokio::test]
async fn test_window_sliding_agrees_with_iterator_engine() -> anyhow::Result<()> {
    for (window, slide) in [(1, 1), (2, 1), (3, 2), (3, 3), (2, 3), (1, 4), (5, 2)] {
        // Arrange
        let (tx, stream) = test_channel::<u32>();
        let result = stream.window_sliding(window, slide)?;

        // Act
        for i in 0..13 {
            tx.send(i)?;
        }
        drop(tx);
        let streamed = collect_windows(result).await;

        // Assert
        let iterated: Vec<Vec<u32>> = (0..13)
            .window_sliding(window, slide)?
            .map(|w| w.into_vec())
            .collect();
        let items: Vec<u32> = (0..13).collect();
        assert_eq!(streamed, iterated, "window {window}, slide {slide}");
        assert_eq!(
            streamed,
            expected_windows(&items, window, slide),
            "window {window}, slide {slide}"
        );
    }

    Ok(())
}
