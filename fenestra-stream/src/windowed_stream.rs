// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{ready, Context, Poll};

use fenestra_core::{StreamItem, Window, WindowPolicy, WindowState};
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;

/// Stream of windows over an upstream of [`StreamItem`]s.
///
/// Created by [`window_fixed`](crate::WindowFixedExt::window_fixed) and
/// [`window_sliding`](crate::WindowSlidingExt::window_sliding), or directly
/// from any validated policy with [`WindowedStream::new`].
///
/// The upstream is polled only while the current window is incomplete.
/// Once the upstream ends the trailing windows are emitted one per poll, and
/// once an upstream error has been forwarded the upstream is never polled
/// again.
#[pin_project]
#[derive(Debug)]
pub struct WindowedStream<S, T, P> {
    #[pin]
    stream: S,
    state: WindowState<T, P>,
}

impl<S, T, P> WindowedStream<S, T, P>
where
    S: Stream<Item = StreamItem<T>>,
    P: WindowPolicy<T>,
{
    pub fn new(stream: S, policy: P) -> Self {
        Self {
            stream,
            state: WindowState::new(policy),
        }
    }

    pub fn policy(&self) -> &P {
        self.state.policy()
    }

    /// Number of items held for the window currently being assembled.
    pub fn buffered(&self) -> usize {
        self.state.buffered()
    }
}

impl<S, T, P> Stream for WindowedStream<S, T, P>
where
    S: Stream<Item = StreamItem<T>>,
    P: WindowPolicy<T>,
{
    type Item = StreamItem<Window<T>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        while this.state.wants_input() {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(StreamItem::Value(item)) => {
                    if let Some(window) = this.state.offer(item) {
                        return Poll::Ready(Some(StreamItem::Value(window)));
                    }
                }
                Some(StreamItem::Error(error)) => {
                    this.state.abort();
                    debug!("windowed stream forwarding upstream error: {error}");
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                None => break,
            }
        }

        Poll::Ready(this.state.complete().map(StreamItem::Value))
    }
}

impl<S, T, P> FusedStream for WindowedStream<S, T, P>
where
    S: Stream<Item = StreamItem<T>>,
    P: WindowPolicy<T>,
{
    fn is_terminated(&self) -> bool {
        self.state.is_terminal()
    }
}
