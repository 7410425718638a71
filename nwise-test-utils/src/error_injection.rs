// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream wrapper that injects a `StreamItem::Error` at a fixed position.

use futures::Stream;
use nwise_core::{NwiseError, StreamItem};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Wraps a stream of plain values in `StreamItem::Value`, injecting one
/// error at the given 0-based position.
///
/// The wrapped stream keeps producing after the injected error, which makes
/// it a handy source for checking that operators stop at the first failure.
///
/// # Examples
///
/// ```rust
/// use nwise_test_utils::ErrorInjectingStream;
/// use nwise_core::StreamItem;
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut items = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 1);
///
/// assert!(matches!(items.next().await, Some(StreamItem::Value(1))));
/// assert!(matches!(items.next().await, Some(StreamItem::Error(_))));
/// assert!(matches!(items.next().await, Some(StreamItem::Value(2))));
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Creates a wrapper that emits an error at `inject_error_at`.
    pub const fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.inject_error_at == Some(self.count) {
            self.inject_error_at = None;
            self.count += 1;
            return Poll::Ready(Some(StreamItem::Error(NwiseError::stream_error(
                "Injected test error",
            ))));
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
