// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::operator::{Lifecycle, Operator};
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::stream::FusedStream;
use futures::Stream;
use nwise_core::{Notification, StreamItem};
use pin_project::pin_project;

/// Stream adapter that drives an [`Operator`] from a source stream.
///
/// Each source event is lifted into a [`Notification`] and passed through the
/// operator's [`Lifecycle`]. Once a terminal notification has been forwarded
/// the source is dropped on the spot, so a source that keeps producing is
/// never polled again. Dropping the adapter drops the source and the operator
/// state with it.
#[must_use = "streams do nothing unless polled"]
#[pin_project]
pub struct OperatorStream<S, O> {
    #[pin]
    source: Option<S>,
    lifecycle: Lifecycle<O>,
}

impl<S, O> OperatorStream<S, O>
where
    O: Operator,
{
    pub(crate) const fn new(source: S, operator: O) -> Self {
        Self {
            source: Some(source),
            lifecycle: Lifecycle::new(operator),
        }
    }

    /// Borrows the operator state, `None` once terminated.
    pub fn operator(&self) -> Option<&O> {
        self.lifecycle.operator()
    }
}

impl<S, O> Stream for OperatorStream<S, O>
where
    S: Stream<Item = StreamItem<O::Input>>,
    O: Operator,
{
    type Item = StreamItem<O::Output>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let Some(source) = this.source.as_mut().as_pin_mut() else {
                return Poll::Ready(None);
            };

            let notification = Notification::from_polled(ready!(source.poll_next(cx)));
            let forwarded = this.lifecycle.on_notification(notification);

            if this.lifecycle.is_terminated() {
                this.source.set(None);
            }

            match forwarded {
                Some(Notification::Next(value)) => {
                    return Poll::Ready(Some(StreamItem::Value(value)));
                }
                Some(Notification::Error(error)) => {
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                Some(Notification::Completed) => return Poll::Ready(None),
                // Value absorbed into the operator state, pull the next one
                None => continue,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            // At most one output per source item
            Some(source) => (0, source.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<S, O> FusedStream for OperatorStream<S, O>
where
    S: Stream<Item = StreamItem<O::Input>>,
    O: Operator,
{
    fn is_terminated(&self) -> bool {
        self.lifecycle.is_terminated()
    }
}
