// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reference windowing model.
//!
//! Computes windows directly from their start offsets with random access over
//! a slice: window `i` starts at `i * slide` and holds
//! `min(window, n - i * slide)` elements. A sequence shorter than one
//! window is the exception: it forms a single window, whatever the slide.
//! Engines must agree with it.

/// Windows of `items` for a sliding policy; pass `slide == window` for fixed
/// windows.
///
/// # Panics
///
/// Panics if `window` or `slide` is 0.
///
/// # Examples
///
/// ```rust
/// use fenestra_test_utils::model::expected_windows;
///
/// let items: Vec<i32> = (1..=5).collect();
/// assert_eq!(expected_windows(&items, 2, 3), vec![vec![1, 2], vec![4, 5]]);
/// assert_eq!(expected_windows(&items[..2], 3, 1), vec![vec![1, 2]]);
/// ```
pub fn expected_windows<T: Clone>(items: &[T], window: usize, slide: usize) -> Vec<Vec<T>> {
    assert!(window > 0 && slide > 0, "model needs positive sizes");

    if !items.is_empty() && items.len() < window {
        return vec![items.to_vec()];
    }

    (0..items.len())
        .step_by(slide)
        .map(|start| items[start..(start + window).min(items.len())].to_vec())
        .collect()
}
