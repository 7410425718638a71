// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for the `nwise` operator.

use futures::stream::{self, FusedStream};
use futures::StreamExt;
use nwise_core::{Notification, NwiseError, StreamItem};
use nwise_stream::NwiseExt;
use nwise_test_utils::{
    assert_stream_ended, collect_notifications, test_channel_with_errors,
    test_data::{person_alice, person_bob, TestData},
    unwrap_stream, unwrap_value, ErrorInjectingStream,
};

#[tokio::test]
async fn test_nwise_forwards_immediate_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut result = stream.nwise(3)?;

    // Act
    tx.unbounded_send(StreamItem::Error(NwiseError::stream_error("boom")))?;

    // Assert: the failure is the first and last item
    match unwrap_stream(&mut result, 500).await {
        StreamItem::Error(e) => assert_eq!(e.to_string(), "Stream processing error: boom"),
        StreamItem::Value(v) => panic!("Expected error, got window {v:?}"),
    }
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_nwise_error_after_values() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut result = stream.nwise(2)?;

    // Act & Assert
    tx.unbounded_send(StreamItem::Value(person_alice()))?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![person_alice()]
    );

    tx.unbounded_send(StreamItem::Error(NwiseError::stream_error("test error")))?;
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert!(result.is_terminated());

    Ok(())
}

#[tokio::test]
async fn test_nwise_ignores_source_after_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut result = stream.nwise(2)?;

    // Act
    tx.unbounded_send(StreamItem::Error(NwiseError::stream_error("test error")))?;
    assert!(unwrap_stream(&mut result, 500).await.is_error());

    // Assert: the source was released, later values have nowhere to go
    assert!(tx
        .unbounded_send(StreamItem::Value(person_bob()))
        .is_err());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_nwise_stops_at_first_of_many_errors() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![
        StreamItem::Value(1),
        StreamItem::Error(NwiseError::stream_error("first")),
        StreamItem::Value(2),
        StreamItem::Error(NwiseError::stream_error("second")),
    ]);

    // Act
    let recorded = collect_notifications(source.nwise(2)?).await;

    // Assert
    assert_eq!(
        recorded,
        vec![
            Notification::Next(vec![1]),
            Notification::Error(NwiseError::stream_error("first")),
            Notification::Completed,
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_nwise_with_injected_error() -> anyhow::Result<()> {
    // Arrange
    let source = ErrorInjectingStream::new(stream::iter(vec![1, 2, 3, 4]), 2);

    // Act
    let items: Vec<StreamItem<Vec<i32>>> = source.nwise(3)?.collect().await;

    // Assert
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], StreamItem::Value(vec![1]));
    assert_eq!(items[1], StreamItem::Value(vec![1, 2]));
    assert!(items[2].is_error());

    Ok(())
}

#[tokio::test]
async fn test_nwise_forwards_user_error_unchanged() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.nwise(2)?;
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sensor unplugged");

    // Act
    tx.unbounded_send(StreamItem::Error(NwiseError::user_error(io)))?;

    // Assert
    match unwrap_stream(&mut result, 500).await {
        StreamItem::Error(NwiseError::UserError(inner)) => {
            assert_eq!(inner.to_string(), "sensor unplugged");
        }
        other => panic!("Expected the user error to pass through, got {other:?}"),
    }

    Ok(())
}
