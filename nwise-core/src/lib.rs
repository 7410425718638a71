// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by the nwise crates.
//!
//! - [`StreamItem`]: the item type every operator consumes and produces
//! - [`Notification`]: value / failure / completion as a single sum type
//! - [`NwiseError`]: the error carried by failed streams
//! - [`Subject`]: a hot, multi-subscriber push source
//! - [`CancellationToken`]: runtime-agnostic disposal signal

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
pub mod notification;
pub mod stream_item;
pub mod subject;
pub mod subject_error;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{NwiseError, Result};
pub use self::notification::Notification;
pub use self::stream_item::StreamItem;
pub use self::subject::Subject;
pub use self::subject_error::SubjectError;
