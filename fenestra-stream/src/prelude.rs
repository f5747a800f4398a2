// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to window a stream with a single import.

pub use crate::window_fixed::WindowFixedExt;
pub use crate::window_sliding::WindowSlidingExt;
pub use crate::windowed_stream::WindowedStream;
