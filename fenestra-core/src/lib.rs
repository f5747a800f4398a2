// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Count-based windowing over ordered sequences.
//!
//! This crate turns a linear sequence of elements into an ordered sequence of
//! [`Window`]s using either a **fixed** (non-overlapping) policy or a
//! **sliding** policy whose stride may be smaller than the window (overlap),
//! equal to it (exact tiling) or larger than it (gaps).
//!
//! # Architecture
//!
//! - **[`Source`]**: narrow pull interface over the upstream producer
//! - **[`WindowBuffer`]**: bounded ring buffer owning the pending elements
//! - **[`WindowPolicy`]**: emission contract, implemented by [`Fixed`] and [`Sliding`]
//! - **[`WindowState`]**: the push-driven state machine shared by every front end
//! - **[`WindowEngine`]**: pull-based engine binding one source to one state machine
//!
//! The engine performs a single forward pass with `O(window_size)` auxiliary
//! memory and never reads further ahead than the window being produced needs.
//!
//! # Example
//!
//! ```
//! use fenestra_core::WindowIteratorExt;
//!
//! let windows: Vec<Vec<i32>> = (1..=10)
//!     .window_sliding(4, 2)
//!     .unwrap()
//!     .map(|w| w.into_vec())
//!     .collect();
//!
//! assert_eq!(
//!     windows,
//!     vec![
//!         vec![1, 2, 3, 4],
//!         vec![3, 4, 5, 6],
//!         vec![5, 6, 7, 8],
//!         vec![7, 8, 9, 10],
//!         vec![9, 10],
//!     ]
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod engine;
pub mod error;
pub mod policy;
pub mod source;
pub mod state;
pub mod stream_item;
pub mod window;
pub mod window_buffer;

pub use self::engine::{
    window_fixed, window_sliding, FixedWindows, SlidingWindows, TryWindowIteratorExt,
    WindowEngine, WindowIteratorExt, Windows,
};
pub use self::error::{ConfigurationError, FenestraError, Result};
pub use self::policy::{Emission, Fixed, SlideRegime, Sliding, WindowPolicy};
pub use self::source::{IterSource, Source, TryIterSource};
pub use self::state::WindowState;
pub use self::stream_item::StreamItem;
pub use self::window::Window;
pub use self::window_buffer::{CapacityExceeded, WindowBuffer};
