// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Assertion helpers for driving operator streams in tests.

use futures::stream::{Stream, StreamExt};
use nwise_core::{Notification, StreamItem};
use std::time::Duration;
use tokio::time::timeout;

/// Waits for the next item, panicking if the stream ends or stays silent.
///
/// # Panics
///
/// Panics if no item arrives within `timeout_ms` or the stream has ended.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected an item but the stream ended"),
        Err(_) => panic!("Timeout: no item received within {timeout_ms} ms"),
    }
}

/// Extracts the value of an item, panicking on errors or a missing item.
///
/// # Panics
///
/// Panics if `item` is `None` or a `StreamItem::Error`.
pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("Expected a value but got error: {e}"),
        None => panic!("Expected a value but got None"),
    }
}

/// Asserts that nothing is emitted within `timeout_ms`.
///
/// # Panics
///
/// Panics if the stream yields an item or ends before the timeout.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    if let Ok(polled) = timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        match polled {
            Some(_) => panic!("Unexpected element emitted, expected no output."),
            None => panic!("Stream ended, expected it to stay open."),
        }
    }
}

/// Asserts that the stream ends (yields `None`) within `timeout_ms`.
///
/// # Panics
///
/// Panics if the stream yields an item or stays open past the timeout.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected the stream to end but it emitted an element"),
        Err(_) => panic!("Expected the stream to end within {timeout_ms} ms"),
    }
}

/// Drains a stream and records everything it emitted, ending with `Completed`.
///
/// Items are recorded as-is, including anything emitted after an error, so the
/// recording shows exactly what a downstream observer would have seen.
pub async fn collect_notifications<S, T>(stream: S) -> Vec<Notification<T>>
where
    S: Stream<Item = StreamItem<T>>,
{
    let mut recorded: Vec<Notification<T>> = stream.map(Notification::from).collect().await;
    recorded.push(Notification::Completed);
    recorded
}
