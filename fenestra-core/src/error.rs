// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Fenestra windowing engine.
//!
//! Windowing knows exactly two failure classes:
//!
//! - [`ConfigurationError`]: a non-positive window or slide size, reported
//!   synchronously by every constructor and never during traversal.
//! - Source failures: whatever the upstream producer raises while an element
//!   is being pulled. The synchronous engine hands these back using the
//!   source's own error type; streams carry them in-band as [`FenestraError`].
//!
//! # Examples
//!
//! ```
//! use fenestra_core::{ConfigurationError, Fixed};
//!
//! let err = Fixed::new(0).unwrap_err();
//! assert_eq!(err, ConfigurationError::InvalidWindowSize { size: 0 });
//! ```

use alloc::string::String;

/// Rejected engine configuration.
///
/// Returned eagerly by [`Fixed::new`](crate::Fixed::new),
/// [`Sliding::new`](crate::Sliding::new) and every engine or operator
/// constructor built on them. Values are never clamped or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ConfigurationError {
    /// The window size must be at least 1.
    #[error("invalid window size {size}: must be at least 1")]
    InvalidWindowSize {
        /// The rejected value
        size: usize,
    },

    /// The slide size must be at least 1.
    #[error("invalid slide size {size}: must be at least 1")]
    InvalidSlideSize {
        /// The rejected value
        size: usize,
    },
}

/// Error carried in-band by windowed streams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenestraError {
    /// A windowing operator was configured with invalid parameters.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The upstream source failed while an element was being pulled.
    #[error("Source error: {context}")]
    SourceError {
        /// Description of the upstream failure
        context: String,
    },
}

impl FenestraError {
    /// Create a source error with the given context
    pub fn source_error(context: impl Into<String>) -> Self {
        Self::SourceError {
            context: context.into(),
        }
    }

    /// Returns `true` if this error was raised at construction time.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Specialized Result type for Fenestra operations
pub type Result<T> = core::result::Result<T, FenestraError>;
