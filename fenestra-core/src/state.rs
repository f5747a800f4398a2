// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The windowing state machine.
//!
//! [`WindowState`] is push-driven: a front end pulls one element from its
//! upstream, [`offer`](WindowState::offer)s it, and forwards any window that
//! comes back. When the upstream is exhausted the front end calls
//! [`complete`](WindowState::complete) once per demand until it returns
//! `None`. Because a window is returned the moment it fills up, a front end
//! built this way never reads further ahead than the current window needs.
//!
//! A source that ends before the first window fills up yields exactly one
//! short window holding everything it produced, whatever the policy.
//!
//! ```text
//!                 offer (window full → emit)
//!               ┌───────────┐
//!               ▼           │
//!         ┌──────────────┐  │   complete    ┌──────────┐  complete   ┌──────────┐
//!  new ──►│ Accumulating │──┴──────────────►│ Draining │────────────►│ Terminal │
//!         └──────────────┘                  └──────────┘  (empty)    └──────────┘
//!                │              abort                                     ▲
//!                └────────────────────────────────────────────────────────┘
//! ```

use core::mem::replace;

use crate::policy::{Emission, WindowPolicy};
use crate::window::Window;
use crate::window_buffer::WindowBuffer;

#[derive(Debug)]
enum Phase<T> {
    /// The upstream may still produce elements.
    Accumulating {
        buffer: WindowBuffer<T>,
        /// Upstream elements to drop before buffering resumes.
        skip: usize,
    },
    /// The upstream is exhausted; trailing windows remain in the buffer.
    Draining { buffer: WindowBuffer<T> },
    Terminal,
}

/// Windowing state bound to one policy and one traversal.
#[derive(Debug)]
pub struct WindowState<T, P> {
    policy: P,
    phase: Phase<T>,
    /// Set once the first window has been handed out.
    emitted: bool,
}

impl<T, P> WindowState<T, P>
where
    P: WindowPolicy<T>,
{
    pub fn new(policy: P) -> Self {
        let buffer = WindowBuffer::new(policy.window_size());
        Self {
            policy,
            phase: Phase::Accumulating { buffer, skip: 0 },
            emitted: false,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Feeds one upstream element, returning a window if it completed one.
    ///
    /// Elements offered after [`complete`](Self::complete) or
    /// [`abort`](Self::abort) are dropped.
    pub fn offer(&mut self, item: T) -> Option<Window<T>> {
        debug_assert!(
            self.wants_input(),
            "element offered after the upstream was exhausted"
        );
        let Phase::Accumulating { buffer, skip } = &mut self.phase else {
            return None;
        };

        if *skip > 0 {
            *skip -= 1;
            return None;
        }

        buffer
            .append(item)
            .expect("full windows are emitted before the next element arrives");

        if !buffer.is_full() {
            return None;
        }

        let Emission {
            window,
            skip: next_skip,
        } = self.policy.emit(buffer);
        *skip = next_skip;
        self.emitted = true;
        Some(window)
    }

    /// Signals upstream exhaustion and returns the next trailing window.
    ///
    /// Call once per demand; `None` means no windows remain and the state is
    /// now terminal.
    pub fn complete(&mut self) -> Option<Window<T>> {
        let mut buffer = match replace(&mut self.phase, Phase::Terminal) {
            Phase::Accumulating { buffer, .. } | Phase::Draining { buffer } => buffer,
            Phase::Terminal => return None,
        };

        if buffer.is_empty() {
            debug!("window state terminal");
            return None;
        }

        if !self.emitted {
            // First and only window: the source was shorter than one window
            self.emitted = true;
            debug!("source ended before the first window filled");
            return Some(buffer.drain_as_window());
        }

        let window = self.policy.emit(&mut buffer).window;
        if !buffer.is_empty() {
            self.phase = Phase::Draining { buffer };
        }
        Some(window)
    }

    /// Signals an upstream failure: the partial window is discarded and the
    /// state becomes terminal. Returns the number of discarded elements.
    pub fn abort(&mut self) -> usize {
        let discarded = self.buffered();
        self.phase = Phase::Terminal;
        if discarded > 0 {
            warn!("upstream failure discarded {discarded} buffered element(s)");
        }
        discarded
    }

    /// Returns `true` while the upstream has not been reported exhausted or failed.
    pub fn wants_input(&self) -> bool {
        matches!(self.phase, Phase::Accumulating { .. })
    }

    /// Returns `true` once no further window can be produced.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Terminal)
    }

    /// Number of elements currently held for the next window.
    pub fn buffered(&self) -> usize {
        match &self.phase {
            Phase::Accumulating { buffer, .. } | Phase::Draining { buffer } => buffer.len(),
            Phase::Terminal => 0,
        }
    }
}
