// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod implementation;

use async_trait::async_trait;
use core::future::Future;
use futures::stream::Stream;
use nwise_core::{CancellationToken, Result, StreamItem};

use implementation::subscribe_impl;

/// Extension trait for consuming a `StreamItem` stream with async handlers.
///
/// This is the observer end of an operator chain: values go to `on_next`,
/// the stream's single terminal event decides the returned result.
#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Subscribes to the stream, processing values sequentially.
    ///
    /// Each handler call completes before the next value is pulled from the
    /// stream, so values are observed in source order.
    ///
    /// # Behavior
    ///
    /// - `StreamItem::Value`: passed to `on_next_func` with a clone of the token
    /// - handler `Err`: passed to `on_error_callback`, processing continues
    /// - `StreamItem::Error`: ends the subscription, returned as `Err`
    /// - end of stream: returns `Ok(())`
    /// - cancellation: returns `Ok(())` without waiting for the next item
    ///
    /// The stream is dropped when this returns, releasing any upstream source.
    ///
    /// # Errors
    ///
    /// Returns the upstream error that terminated the stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use nwise_exec::SubscribeExt;
    /// use nwise_core::StreamItem;
    /// use futures::{stream, StreamExt};
    /// use std::sync::Arc;
    /// use futures::lock::Mutex;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    ///
    /// stream::iter(vec![1, 2, 3])
    ///     .map(StreamItem::Value)
    ///     .subscribe(
    ///         move |value, _token| {
    ///             let sink = sink.clone();
    ///             async move {
    ///                 sink.lock().await.push(value);
    ///                 Ok::<(), std::io::Error>(())
    ///             }
    ///         },
    ///         |_error: std::io::Error| {},
    ///         None,
    ///     )
    ///     .await
    ///     .unwrap();
    ///
    /// assert_eq!(*seen.lock().await, vec![1, 2, 3]);
    /// # }
    /// ```
    async fn subscribe<F, Fut, E, OnError>(
        self,
        on_next_func: F,
        on_error_callback: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        E: Send + 'static;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Unpin + Send + 'static,
    T: Send + 'static,
{
    async fn subscribe<F, Fut, E, OnError>(
        self,
        on_next_func: F,
        on_error_callback: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        E: Send + 'static,
    {
        subscribe_impl(self, on_next_func, on_error_callback, cancellation_token).await
    }
}
