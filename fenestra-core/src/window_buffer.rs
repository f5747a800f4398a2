// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded ring buffer holding the elements of the window being assembled.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::mem::replace;

use crate::window::Window;

/// Raised when appending to a buffer that already holds `capacity` elements.
///
/// Engines check fullness before every append, so this only surfaces through
/// direct use of [`WindowBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("window buffer is full (capacity {capacity})")]
pub struct CapacityExceeded {
    /// Capacity of the buffer that rejected the element
    pub capacity: usize,
}

/// An ordered container holding at most `capacity` elements.
///
/// Backed by a [`VecDeque`] so that retiring the oldest elements after an
/// overlapping window is emitted costs `O(slide)` instead of shifting the
/// whole buffer.
#[derive(Debug, Clone)]
pub struct WindowBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> WindowBuffer<T> {
    /// Creates an empty buffer for windows of `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] if the buffer is already full; the element
    /// is dropped.
    pub fn append(&mut self, element: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            return Err(CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push_back(element);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Moves every buffered element into a new window, leaving the buffer empty.
    ///
    /// Draining an empty buffer yields an empty window.
    pub fn drain_as_window(&mut self) -> Window<T> {
        let items = replace(&mut self.items, VecDeque::with_capacity(self.capacity));
        Window::from_vec(Vec::from(items))
    }

    /// Keeps only the final `k` elements, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if `k` exceeds the current length.
    pub fn retain_last(&mut self, k: usize) {
        let len = self.items.len();
        assert!(k <= len, "retain_last({k}) on a buffer of {len} elements");
        self.items.drain(..len - k);
    }
}

impl<T: Clone> WindowBuffer<T> {
    /// Copies the buffered elements into a new window, leaving the buffer untouched.
    pub fn snapshot(&self) -> Window<T> {
        Window::from_vec(self.items.iter().cloned().collect())
    }
}
