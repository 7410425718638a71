// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # nwise
//!
//! Sliding-window operators for async streams.
//!
//! ## Overview
//!
//! - [`nwise(size)`](NwiseExt::nwise) emits the last `size` values as a `Vec`
//!   on every source value, starting with partial windows
//! - [`pairwise()`](PairwiseExt::pairwise) emits `(previous, current)` from the
//!   second value on
//!
//! Streams carry [`StreamItem`]s: a value or an [`NwiseError`]. An error is
//! forwarded once and ends the stream. Dropping a stream disposes it together
//! with its upstream source.
//!
//! ## Design Philosophy
//!
//! - **Production code**: compose operators on any `Stream<Item = StreamItem<T>>`
//! - **Hot sources**: [`Subject`] fans one producer out to many subscribers,
//!   each with its own operator state
//! - **Consumers**: [`SubscribeExt`] drives a chain with async handlers
//!
//! ## Quick Start
//!
//! ```rust
//! use nwise::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let subject = Subject::<i32>::new();
//! let pairs = subject.subscribe()?.pairwise();
//!
//! subject.next(1)?;
//! subject.next(4)?;
//! subject.next(9)?;
//! subject.close();
//!
//! let deltas = std::sync::Arc::new(futures::lock::Mutex::new(Vec::new()));
//! let sink = deltas.clone();
//! pairs
//!     .subscribe(
//!         move |(previous, current), _token| {
//!             let sink = sink.clone();
//!             async move {
//!                 sink.lock().await.push(current - previous);
//!                 Ok::<(), std::io::Error>(())
//!             }
//!         },
//!         |_error: std::io::Error| {},
//!         None,
//!     )
//!     .await?;
//!
//! assert_eq!(*deltas.lock().await, vec![3, 5]);
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use nwise_core::{
    CancellationToken, Notification, NwiseError, Result, StreamItem, Subject, SubjectError,
};

// Re-export the operators
pub use nwise_stream::{
    Lifecycle, Nwise, NwiseExt, Operator, OperatorStream, PairOperator, Pairwise, PairwiseExt,
    WindowOperator, WindowSize,
};

// Re-export subscribers
pub use nwise_exec::SubscribeExt;
#[cfg(feature = "runtime-tokio")]
pub use nwise_exec::{spawn_subscription, Subscription};

/// Prelude module for convenient imports
pub mod prelude {
    pub use nwise_core::{CancellationToken, Notification, NwiseError, StreamItem, Subject};
    pub use nwise_exec::SubscribeExt;
    pub use nwise_stream::prelude::*;
}
