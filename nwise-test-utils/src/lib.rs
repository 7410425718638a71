// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the nwise operators.
//!
//! This crate is for development and testing only.
//!
//! # Architecture
//!
//! Operators consume their source (`self`), while tests need to keep pushing
//! into it. Test channels solve this by splitting a source into a sender that
//! the test keeps and a stream that the operator takes.
//!
//! # Key Items
//!
//! - [`test_channel`] / [`test_channel_with_errors`]: push-driven test sources
//! - [`helpers`]: assertions with timeouts and a notification recorder
//! - [`ErrorInjectingStream`]: inject a failure at a fixed position
//! - [`test_data`]: `TestData` fixtures
//!
//! # Examples
//!
//! ```rust
//! use nwise_test_utils::{test_channel, unwrap_stream, unwrap_value};
//! use nwise_test_utils::test_data::person_alice;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, mut stream) = test_channel();
//!
//! tx.unbounded_send(person_alice()).unwrap();
//!
//! let item = unwrap_value(Some(unwrap_stream(&mut stream, 500).await));
//! assert_eq!(item, person_alice());
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod test_data;

use futures::channel::mpsc::{self, UnboundedSender};
use futures::{Stream, StreamExt};
use nwise_core::StreamItem;

// Re-export commonly used test utilities
pub use error_injection::ErrorInjectingStream;
pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, collect_notifications, unwrap_stream,
    unwrap_value,
};
pub use test_data::TestData;

/// Creates a test channel that wraps every sent value in `StreamItem::Value`.
///
/// Dropping the sender completes the stream.
pub fn test_channel<T>() -> (UnboundedSender<T>, impl Stream<Item = StreamItem<T>> + Unpin) {
    let (tx, rx) = mpsc::unbounded();
    let stream = rx.map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// ```rust
/// use nwise_test_utils::test_channel_with_errors;
/// use nwise_core::{NwiseError, StreamItem};
///
/// let (tx, _stream) = test_channel_with_errors::<i32>();
///
/// tx.unbounded_send(StreamItem::Value(42)).unwrap();
/// tx.unbounded_send(StreamItem::Error(NwiseError::stream_error("test error"))).unwrap();
/// ```
pub fn test_channel_with_errors<T>() -> (
    UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Unpin,
) {
    let (tx, rx) = mpsc::unbounded();
    (tx, rx)
}
