// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::pin;
use futures::future::{select, Either};
use futures::stream::{Stream, StreamExt};
use nwise_core::{CancellationToken, Result, StreamItem};

// Drives the stream to its end, an upstream error or cancellation.
// Returning drops the stream, which disposes every operator above it.
pub async fn subscribe_impl<S, T, F, Fut, E, OnError>(
    mut stream: S,
    on_next_func: F,
    on_error_callback: OnError,
    cancellation_token: Option<CancellationToken>,
) -> Result<()>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    F: Fn(T, CancellationToken) -> Fut,
    Fut: Future<Output = core::result::Result<(), E>>,
    OnError: Fn(E),
{
    let cancellation_token = cancellation_token.unwrap_or_default();

    loop {
        let next = {
            let cancelled = pin!(cancellation_token.cancelled());
            match select(cancelled, stream.next()).await {
                Either::Left(((), _)) => None,
                Either::Right((item, _)) => Some(item),
            }
        };

        let Some(item) = next else {
            debug!("subscription cancelled");
            return Ok(());
        };

        match item {
            Some(StreamItem::Value(value)) => {
                // Handler runs to completion before the next item is pulled
                if let Err(error) = on_next_func(value, cancellation_token.clone()).await {
                    on_error_callback(error);
                }
            }
            Some(StreamItem::Error(error)) => {
                warn!("subscription terminated by upstream error: {}", error);
                return Err(error);
            }
            None => {
                debug!("subscription completed");
                return Ok(());
            }
        }
    }
}
