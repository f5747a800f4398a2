// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A synchronous source that records how it is pulled.

use fenestra_core::Source;
use std::fmt;

/// Failure raised by a [`ScriptedSource`] at its scripted position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedError {
    /// Zero-based pull index at which the failure was raised
    pub position: usize,
}

impl fmt::Display for ScriptedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scripted failure at pull {}", self.position)
    }
}

impl std::error::Error for ScriptedError {}

/// Source over an iterator that counts pulls and can fail at a chosen pull.
///
/// # Examples
///
/// ```rust
/// use fenestra_core::Source;
/// use fenestra_test_utils::{ScriptedError, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![1, 2, 3]).failing_at(1);
///
/// assert_eq!(source.pull(), Ok(Some(1)));
/// assert_eq!(source.pull(), Err(ScriptedError { position: 1 }));
/// assert_eq!(source.pull(), Ok(Some(2)));
/// assert_eq!(source.pulls(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource<I> {
    iter: I,
    pulls: usize,
    pulls_after_end: usize,
    exhausted: bool,
    fail_at: Option<usize>,
}

impl<I: Iterator> ScriptedSource<I> {
    pub fn new(items: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: items.into_iter(),
            pulls: 0,
            pulls_after_end: 0,
            exhausted: false,
            fail_at: None,
        }
    }

    /// Makes the pull with zero-based index `position` fail instead of
    /// yielding an element. The element is not consumed.
    #[must_use]
    pub fn failing_at(mut self, position: usize) -> Self {
        self.fail_at = Some(position);
        self
    }

    /// Total number of pulls so far, failed ones included.
    pub fn pulls(&self) -> usize {
        self.pulls
    }

    /// Pulls answered with exhaustion after the first exhaustion signal.
    pub fn pulls_after_end(&self) -> usize {
        self.pulls_after_end
    }

    /// Elements never pulled.
    pub fn remaining(self) -> Vec<I::Item> {
        self.iter.collect()
    }
}

impl<I: Iterator> Source for ScriptedSource<I> {
    type Item = I::Item;
    type Error = ScriptedError;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let position = self.pulls;
        self.pulls += 1;

        if self.fail_at == Some(position) {
            return Err(ScriptedError { position });
        }

        let item = self.iter.next();
        if item.is_none() {
            if self.exhausted {
                self.pulls_after_end += 1;
            }
            self.exhausted = true;
        }
        Ok(item)
    }
}
