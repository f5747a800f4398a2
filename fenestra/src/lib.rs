// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Fenestra
//!
//! Count-based fixed and sliding windows over ordered sequences, for both
//! plain iterators and async streams.
//!
//! ## Overview
//!
//! A *window* is a contiguous run of at most `window_size` elements. Two
//! policies decide how windows are cut:
//!
//! - **Fixed**: consecutive windows never share an element; every element
//!   lands in exactly one window.
//! - **Sliding**: each window starts `slide_size` elements after the previous
//!   one. Windows overlap when `slide_size < window_size`, tile the sequence
//!   when the sizes are equal, and leave unreported gaps otherwise.
//!
//! Elements are pulled lazily. A window is produced as soon as it is full and
//! no element beyond it is read, so unbounded sources are fine as long as the
//! consumer stops asking.
//!
//! ## Quick Start
//!
//! ```rust
//! use fenestra::prelude::*;
//!
//! let windows: Vec<Vec<i32>> = (1..=7)
//!     .window_sliding(3, 2)
//!     .unwrap()
//!     .map(Window::into_vec)
//!     .collect();
//!
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6, 7], vec![7]]);
//! ```
//!
//! The same operators exist for streams of [`StreamItem`]:
//!
//! ```rust
//! use fenestra::prelude::*;
//! use futures::stream;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let items = stream::iter((1..=5).map(StreamItem::Value));
//! let mut windows = items.window_fixed(2).unwrap();
//!
//! assert_eq!(windows.next().await.unwrap().unwrap(), [1, 2]);
//! assert_eq!(windows.next().await.unwrap().unwrap(), [3, 4]);
//! assert_eq!(windows.next().await.unwrap().unwrap(), [5]);
//! assert!(windows.next().await.is_none());
//! # }
//! ```
//!
//! ## Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `fenestra-core` | policies, state machine, pull engine, errors |
//! | `fenestra-stream` | async `window_fixed` / `window_sliding` operators |
//! | `fenestra-test-utils` | channels, assertions and scripted sources for tests |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "runtime-tokio")]
pub mod receiver_ext;

// Re-export core types
pub use fenestra_core::{
    window_fixed, window_sliding, ConfigurationError, Emission, FenestraError, Fixed,
    FixedWindows, IterSource, Result, SlideRegime, Sliding, SlidingWindows, Source, StreamItem,
    TryIterSource, TryWindowIteratorExt, Window, WindowEngine, WindowIteratorExt, WindowPolicy,
    Windows,
};

// Re-export the stream operators
pub use fenestra_stream::{WindowFixedExt, WindowSlidingExt, WindowedStream};

#[cfg(feature = "runtime-tokio")]
pub use receiver_ext::{ReceiverItemStream, UnboundedReceiverExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use fenestra_core::{
        ConfigurationError, FenestraError, StreamItem, TryWindowIteratorExt, Window,
        WindowIteratorExt,
    };
    pub use fenestra_stream::prelude::*;
    pub use futures::StreamExt;

    #[cfg(feature = "runtime-tokio")]
    pub use crate::receiver_ext::UnboundedReceiverExt;
}
