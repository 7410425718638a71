// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposable handle for a subscription running on the tokio runtime.

use crate::SubscribeExt;
use core::future::Future;
use futures::stream::Stream;
use nwise_core::{CancellationToken, NwiseError, Result, StreamItem};
use tokio::task::JoinHandle;

/// Handle to a spawned subscription.
///
/// Dropping the handle detaches the task, it keeps running until the stream
/// terminates. Call [`dispose`](Subscription::dispose) to stop it early.
#[derive(Debug)]
pub struct Subscription {
    token: CancellationToken,
    handle: JoinHandle<Result<()>>,
}

impl Subscription {
    /// Cancels the subscription. The stream and everything upstream of it is
    /// dropped by the task as soon as it observes the cancellation.
    pub fn dispose(&self) {
        self.token.cancel();
    }

    /// Returns `true` once [`dispose`](Subscription::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns `true` when the subscription task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the subscription to end and returns its result.
    ///
    /// # Errors
    ///
    /// Returns the upstream error that terminated the stream, or a
    /// `StreamProcessingError` if the task panicked.
    pub async fn join(self) -> Result<()> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_error) => Err(NwiseError::stream_error(format!(
                "subscription task failed: {join_error}"
            ))),
        }
    }
}

/// Spawns [`subscribe`](SubscribeExt::subscribe) on the current tokio runtime.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
///
/// # Examples
///
/// ```
/// use nwise_exec::spawn_subscription;
/// use nwise_core::StreamItem;
/// use futures::stream;
///
/// # #[tokio::main]
/// # async fn main() {
/// let subscription = spawn_subscription(
///     stream::pending::<StreamItem<i32>>(),
///     |_value, _token| async { Ok::<(), std::io::Error>(()) },
///     |_error: std::io::Error| {},
/// );
///
/// subscription.dispose();
/// assert!(subscription.join().await.is_ok());
/// # }
/// ```
pub fn spawn_subscription<S, T, F, Fut, E, OnError>(
    stream: S,
    on_next_func: F,
    on_error_callback: OnError,
) -> Subscription
where
    S: Stream<Item = StreamItem<T>> + Unpin + Send + 'static,
    T: Send + 'static,
    F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
    OnError: Fn(E) + Send + Sync + 'static,
    E: Send + 'static,
{
    let token = CancellationToken::new();
    let handle = tokio::spawn(stream.subscribe(
        on_next_func,
        on_error_callback,
        Some(token.clone()),
    ));

    Subscription { token, handle }
}
