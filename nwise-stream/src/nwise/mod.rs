// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding-window operator that re-emits the most recent values on every item.
//!
//! This module provides the [`nwise`](NwiseExt::nwise) operator that turns a
//! stream of values into a stream of overlapping windows.
//!
//! # Overview
//!
//! `nwise(size)` keeps the last `size` values seen on the source. Every source
//! value produces one emission: a `Vec` holding the window contents, oldest
//! first, ending with the value that triggered it.
//!
//! - The first `size - 1` emissions are partial windows (`[1]`, `[1, 2]`, ...)
//! - From the `size`-th value on, every emission has exactly `size` elements
//! - Each emitted `Vec` is an independent copy of the window
//!
//! # Basic Usage
//!
//! ```
//! use nwise_stream::NwiseExt;
//! use nwise_core::StreamItem;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter(vec![1, 2, 3, 4]).map(StreamItem::Value);
//!
//! let windows: Vec<_> = source
//!     .nwise(3)
//!     .unwrap()
//!     .map(StreamItem::unwrap)
//!     .collect()
//!     .await;
//!
//! assert_eq!(
//!     windows,
//!     vec![vec![1], vec![1, 2], vec![1, 2, 3], vec![2, 3, 4]]
//! );
//! # }
//! ```
//!
//! # Configuration
//!
//! The window size is the only option. A size of 0 is rejected when the
//! operator is built:
//!
//! ```
//! use nwise_stream::NwiseExt;
//! use nwise_core::{NwiseError, StreamItem};
//! use futures::stream;
//!
//! let source = stream::iter(Vec::<StreamItem<i32>>::new());
//! assert!(matches!(
//!     source.nwise(0),
//!     Err(NwiseError::InvalidWindowSize { size: 0 })
//! ));
//! ```
//!
//! # Error Handling
//!
//! Errors from the source are forwarded immediately and unchanged. The error
//! is the last item: the window is released and the source is dropped, even
//! if it would have produced more values.
//!
//! # Use Cases
//!
//! - Moving averages and other rolling statistics
//! - Pattern detection over the last few events
//! - Smoothing noisy sensor readings

mod implementation;

pub use implementation::{Nwise, NwiseExt, WindowOperator};
