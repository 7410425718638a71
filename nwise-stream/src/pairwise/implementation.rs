// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::operator::Operator;
use crate::operator_stream::OperatorStream;
use futures::Stream;
use nwise_core::StreamItem;

/// Remembers the previous source value and pairs it with the next one.
///
/// Holds a single slot instead of a general window: empty until the first
/// value, then always the most recently accepted value.
#[derive(Clone, Debug)]
pub struct PairOperator<T> {
    previous: Option<T>,
}

impl<T> PairOperator<T> {
    /// Creates an operator that has not seen any value yet.
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// The most recently accepted value, if any.
    pub const fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }
}

impl<T> Default for PairOperator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Operator for PairOperator<T> {
    type Input = T;
    type Output = (T, T);

    fn on_value(&mut self, value: T) -> Option<(T, T)> {
        self.previous
            .replace(value.clone())
            .map(|previous| (previous, value))
    }

    fn name(&self) -> &'static str {
        "pairwise"
    }
}

/// Stream returned by [`pairwise`](PairwiseExt::pairwise).
pub type Pairwise<S, T> = OperatorStream<S, PairOperator<T>>;

/// Extension trait providing the [`pairwise`](PairwiseExt::pairwise) operator.
pub trait PairwiseExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone,
{
    /// Emits `(previous, current)` for every source value from the second on.
    ///
    /// The first value is remembered but produces nothing. A lone trailing
    /// value is never paired on completion.
    ///
    /// See the [module-level documentation](crate::pairwise) for examples.
    fn pairwise(self) -> Pairwise<Self, T>;
}

impl<S, T> PairwiseExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
    T: Clone,
{
    fn pairwise(self) -> Pairwise<Self, T> {
        OperatorStream::new(self, PairOperator::new())
    }
}
