// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::operator::Operator;
use crate::operator_stream::OperatorStream;
use crate::types::WindowSize;
use futures::Stream;
use nwise_core::{Result, StreamItem};
use std::collections::VecDeque;

/// Sliding window over the most recent `size` source values.
///
/// Every accepted value is appended at the back; once the window holds
/// `size` values the oldest is evicted first. Each emission is a fresh
/// `Vec`, so later values never alter a snapshot already handed downstream.
#[derive(Clone, Debug)]
pub struct WindowOperator<T> {
    size: WindowSize,
    window: VecDeque<T>,
}

impl<T> WindowOperator<T> {
    /// Creates an empty window of the given size.
    ///
    /// Storage grows with the values actually seen, never past `size`.
    pub fn new(size: WindowSize) -> Self {
        Self {
            size,
            window: VecDeque::new(),
        }
    }

    /// Configured window size.
    pub const fn size(&self) -> WindowSize {
        self.size
    }

    /// Number of values currently remembered.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` before the first value has been accepted.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl<T: Clone> Operator for WindowOperator<T> {
    type Input = T;
    type Output = Vec<T>;

    fn on_value(&mut self, value: T) -> Option<Vec<T>> {
        if self.window.len() == self.size.get() {
            self.window.pop_front();
        }
        self.window.push_back(value);

        Some(self.window.iter().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "nwise"
    }
}

/// Stream returned by [`nwise`](NwiseExt::nwise).
pub type Nwise<S, T> = OperatorStream<S, WindowOperator<T>>;

/// Extension trait providing the [`nwise`](NwiseExt::nwise) operator.
///
/// Implemented for every stream of [`StreamItem<T>`].
pub trait NwiseExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone,
{
    /// Emits the last `size` values as a `Vec` on every source value.
    ///
    /// The first `size - 1` emissions are partial windows holding every value
    /// seen so far. Errors and completion are forwarded once and end the
    /// stream.
    ///
    /// See the [module-level documentation](crate::nwise) for examples.
    ///
    /// # Errors
    ///
    /// Returns [`NwiseError::InvalidWindowSize`](nwise_core::NwiseError::InvalidWindowSize)
    /// when `size` is 0.
    fn nwise(self, size: usize) -> Result<Nwise<Self, T>>;

    /// Same as [`nwise`](NwiseExt::nwise) with an already validated size.
    fn nwise_with(self, size: WindowSize) -> Nwise<Self, T>;
}

impl<S, T> NwiseExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
    T: Clone,
{
    fn nwise(self, size: usize) -> Result<Nwise<Self, T>> {
        Ok(self.nwise_with(WindowSize::new(size)?))
    }

    fn nwise_with(self, size: WindowSize) -> Nwise<Self, T> {
        OperatorStream::new(self, WindowOperator::new(size))
    }
}
