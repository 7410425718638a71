// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding-window stream operators.
//!
//! This crate provides two operators that turn a stream of values into a
//! stream of overlapping groups of the most recent values:
//!
//! - **[`nwise`](NwiseExt::nwise)**: the last `size` values as a `Vec`, on every value
//! - **[`pairwise`](PairwiseExt::pairwise)**: `(previous, current)` from the second value on
//!
//! # Architecture
//!
//! - **[`Operator`]**: the per-subscription state (window buffer or previous-value slot)
//! - **[`Lifecycle`]**: the `Active -> Terminated` state machine shared by all operators,
//!   guaranteeing a single terminal notification and nothing after it
//! - **[`OperatorStream`]**: the `Stream` adapter that drives a lifecycle from a source
//! - **Extension traits**: each operator is provided via an extension trait for composability
//!
//! Every call to `nwise`/`pairwise` builds a fresh operator, so two consumers of
//! the same hot source never share window state.
//!
//! # Operator Selection Guide
//!
//! | Operator | Output | First emission | Memory |
//! |----------|--------|----------------|--------|
//! | [`nwise`](NwiseExt::nwise) | `Vec<T>` snapshot | first value (partial window) | $O(size)$ |
//! | [`pairwise`](PairwiseExt::pairwise) | `(T, T)` | second value | $O(1)$ |
//!
//! # Getting Started
//!
//! ```rust
//! use nwise_stream::prelude::*;
//! use nwise_core::StreamItem;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() -> nwise_core::Result<()> {
//! let readings = stream::iter(vec![10, 12, 11, 15]).map(StreamItem::Value);
//!
//! let averages: Vec<f64> = readings
//!     .nwise(2)?
//!     .filter_map(|window| async move { window.ok() })
//!     .map(|window| window.iter().sum::<i32>() as f64 / window.len() as f64)
//!     .collect()
//!     .await;
//!
//! assert_eq!(averages, vec![10.0, 11.0, 11.5, 13.0]);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod nwise;
pub mod operator;
pub mod operator_stream;
pub mod pairwise;
pub mod prelude;
pub mod types;

// Re-export commonly used types
pub use nwise::{Nwise, NwiseExt, WindowOperator};
pub use operator::{Lifecycle, Operator};
pub use operator_stream::OperatorStream;
pub use pairwise::{PairOperator, Pairwise, PairwiseExt};
pub use types::WindowSize;
