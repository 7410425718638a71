// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber push source.
//!
//! A [`Subject`] broadcasts each [`StreamItem<T>`](crate::StreamItem) to all active subscribers.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past items, only items sent after subscribing.
//! - **Unbounded**: Uses unbounded channels internally (no backpressure).
//! - **Independent subscriptions**: every call to [`Subject::subscribe`] returns a
//!   separate stream, so operators built on top of each one keep private state.
//! - **Error/close**: Errors are propagated to all subscribers and terminate the subject.
//!
//! ## Example
//!
//! ```
//! use nwise_core::{Subject, StreamItem};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<i32>::new();
//! let mut stream = subject.subscribe().unwrap();
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(StreamItem::Value(1)));
//! assert_eq!(stream.next().await, Some(StreamItem::Value(2)));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::{NwiseError, StreamItem, SubjectError};
use async_channel::Sender;
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

/// Stream handed out to each subscriber of a [`Subject`].
pub type SubjectBoxStream<T> = Pin<Box<dyn Stream<Item = StreamItem<T>> + Send + 'static>>;

struct SubjectState<T> {
    closed: bool,
    senders: Vec<Sender<StreamItem<T>>>,
}

/// A hot, unbounded subject that broadcasts items to all current subscribers.
///
/// See the [module documentation](crate::subject) for details.
pub struct Subject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> Subject<T> {
    /// Creates a new open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject and receive a stream of `StreamItem<T>`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectBoxStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let (tx, rx) = async_channel::unbounded();
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Send an item to all active subscribers.
    ///
    /// Subscribers whose stream has been dropped are pruned here.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, item: StreamItem<T>) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        state
            .senders
            .retain(|tx| tx.try_send(item.clone()).is_ok());
        Ok(())
    }

    /// Send a value to all active subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamItem::Value(value))
    }

    /// Send an error to all subscribers and close the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject was already closed.
    pub fn error(&self, err: NwiseError) -> Result<(), SubjectError> {
        let result = self.send(StreamItem::Error(err));
        self.close();
        result
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Dropped subscribers are removed on the next `send()`, not when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
