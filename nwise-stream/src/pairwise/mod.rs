// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairing operator that emits each value together with its predecessor.
//!
//! The [`pairwise`](PairwiseExt::pairwise) operator emits `(previous, current)`
//! tuples. It behaves like [`nwise(2)`](crate::NwiseExt::nwise) without the
//! leading one-element window, but holds a single remembered value instead of
//! a window buffer.
//!
//! # Behavior
//!
//! - First value: remembered, nothing emitted
//! - Every later value `v`: emits `(previous, v)`, then remembers `v`
//! - Completion after a single value: no tuple, just completion
//!
//! # Examples
//!
//! ```rust
//! use nwise_stream::PairwiseExt;
//! use nwise_core::StreamItem;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter(vec![1, 2, 3, 4]).map(StreamItem::Value);
//!
//! let pairs: Vec<_> = source.pairwise().map(StreamItem::unwrap).collect().await;
//!
//! assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
//! # }
//! ```
//!
//! # Errors
//!
//! Source errors are forwarded unchanged and end the stream. The remembered
//! value is dropped with the operator.
//!
//! # Use Cases
//!
//! - Change detection (comparing consecutive values)
//! - Delta calculation (computing differences)
//! - State transitions (analyzing previous -> current)

mod implementation;

pub use implementation::{PairOperator, Pairwise, PairwiseExt};
