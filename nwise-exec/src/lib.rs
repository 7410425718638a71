// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscribers that drive nwise operator chains to completion.
//!
//! - [`SubscribeExt::subscribe`]: awaitable, sequential consumption of a stream
//! - [`spawn_subscription`]: the same on a tokio task, with a disposable handle

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod subscribe;
#[cfg(feature = "runtime-tokio")]
pub mod subscription;

// Re-export commonly used types
pub use subscribe::SubscribeExt;
#[cfg(feature = "runtime-tokio")]
pub use subscription::{spawn_subscription, Subscription};
