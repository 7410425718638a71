// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The three kinds of event a source can deliver.

use crate::error::NwiseError;
use crate::stream_item::StreamItem;

/// A single source event: a value, a failure, or normal completion.
///
/// [`StreamItem`] only covers the first two; completion is the end of the
/// stream. Operators that need to reason about all three at once (for
/// example to guarantee a single terminal notification) lift stream events
/// into a `Notification`.
#[derive(Debug, Clone)]
pub enum Notification<T> {
    /// A value emitted by the source
    Next(T),
    /// The source failed; no further events follow
    Error(NwiseError),
    /// The source completed normally; no further events follow
    Completed,
}

impl<T> Notification<T> {
    /// Returns `true` for `Error` and `Completed`.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Next(_))
    }

    /// Returns `true` if this is a `Next`.
    pub const fn is_next(&self) -> bool {
        matches!(self, Notification::Next(_))
    }

    /// Maps the carried value, leaving terminal notifications untouched.
    pub fn map<U, F>(self, f: F) -> Notification<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Notification::Next(v) => Notification::Next(f(v)),
            Notification::Error(e) => Notification::Error(e),
            Notification::Completed => Notification::Completed,
        }
    }

    /// Lifts the result of polling a stream into a notification.
    ///
    /// `None` (end of stream) becomes `Completed`.
    pub fn from_polled(item: Option<StreamItem<T>>) -> Self {
        match item {
            Some(item) => item.into(),
            None => Notification::Completed,
        }
    }
}

impl<T> From<StreamItem<T>> for Notification<T> {
    fn from(item: StreamItem<T>) -> Self {
        match item {
            StreamItem::Value(v) => Notification::Next(v),
            StreamItem::Error(e) => Notification::Error(e),
        }
    }
}

impl<T: PartialEq> PartialEq for Notification<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Notification::Next(a), Notification::Next(b)) => a == b,
            (Notification::Completed, Notification::Completed) => true,
            // Errors only compare by rendered message
            (Notification::Error(a), Notification::Error(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
