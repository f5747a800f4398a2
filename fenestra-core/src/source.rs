// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The pull interface a windowing engine consumes.

use core::convert::Infallible;
use core::iter::Fuse;

/// A producer of elements, pulled one at a time in a fixed order.
///
/// `Ok(None)` signals exhaustion. An engine stops pulling after exhaustion or
/// after the first error, so implementations need not be fused.
pub trait Source {
    type Item;
    type Error;

    /// Pulls the next element.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the producer raises; engines propagate it
    /// unchanged.
    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error>;
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pull()
    }
}

/// Adapts an infallible iterator into a [`Source`].
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self.iter.next())
    }
}

/// Adapts an iterator of `Result`s into a [`Source`] whose failures are the
/// iterator's `Err` values.
#[derive(Debug, Clone)]
pub struct TryIterSource<I> {
    iter: Fuse<I>,
}

impl<I, T, E> TryIterSource<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I, T, E> Source for TryIterSource<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.iter.next().transpose()
    }
}
