// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::StreamItem;
use futures::stream::{Map, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Stream of [`StreamItem`]s read from a tokio unbounded receiver.
pub type ReceiverItemStream<T> = Map<UnboundedReceiverStream<T>, fn(T) -> StreamItem<T>>;

/// Turns a tokio unbounded receiver into a stream the windowing operators accept.
///
/// ```
/// use fenestra::prelude::*;
/// use tokio::sync::mpsc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, rx) = mpsc::unbounded_channel();
/// let mut windows = rx.into_item_stream().window_fixed(2).unwrap();
///
/// tx.send("a").unwrap();
/// tx.send("b").unwrap();
///
/// assert_eq!(windows.next().await.unwrap().unwrap(), ["a", "b"]);
/// # }
/// ```
pub trait UnboundedReceiverExt<T> {
    fn into_item_stream(self) -> ReceiverItemStream<T>;
}

impl<T> UnboundedReceiverExt<T> for mpsc::UnboundedReceiver<T> {
    fn into_item_stream(self) -> ReceiverItemStream<T> {
        UnboundedReceiverStream::new(self).map(StreamItem::Value as fn(T) -> StreamItem<T>)
    }
}
