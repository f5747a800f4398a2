// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Immutable window snapshots.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Deref;

/// An immutable, ordered, finite run of elements emitted by a windowing engine.
///
/// A window owns its elements and shares nothing with the engine that produced
/// it, so consecutive overlapping windows never alias each other. Engines never
/// emit an empty window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Window<T> {
    items: Box<[T]>,
}

impl<T> Window<T> {
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }

    /// Number of elements in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the window holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the elements in arrival order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the elements in arrival order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the window, returning its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T> Deref for Window<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for Window<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Window<T>> for Vec<T> {
    fn from(window: Window<T>) -> Self {
        window.into_vec()
    }
}

impl<T> IntoIterator for Window<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Window<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Window<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for Window<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Window<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
