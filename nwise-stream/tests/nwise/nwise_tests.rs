// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, FusedStream};
use futures::StreamExt;
use nwise_core::{Notification, NwiseError, StreamItem};
use nwise_stream::{NwiseExt, WindowSize};
use nwise_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_notifications, test_channel,
    test_data::{animal_dog, person_alice, person_bob, person_charlie, plant_rose, TestData},
    unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_nwise_emits_partial_windows_then_full() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut result = stream.nwise(3)?;

    // Act & Assert
    tx.unbounded_send(person_alice())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![person_alice()]
    );

    tx.unbounded_send(person_bob())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![person_alice(), person_bob()]
    );

    tx.unbounded_send(person_charlie())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![person_alice(), person_bob(), person_charlie()]
    );

    tx.unbounded_send(animal_dog())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![person_bob(), person_charlie(), animal_dog()]
    );

    Ok(())
}

#[tokio::test]
async fn test_nwise_two_over_three_values() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![1, 2, 3]).map(StreamItem::Value);

    // Act
    let recorded = collect_notifications(source.nwise(2)?).await;

    // Assert
    assert_eq!(
        recorded,
        vec![
            Notification::Next(vec![1]),
            Notification::Next(vec![1, 2]),
            Notification::Next(vec![2, 3]),
            Notification::Completed,
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_nwise_size_one_wraps_every_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut result = stream.nwise(1)?;

    // Act & Assert
    for item in [person_alice(), animal_dog(), plant_rose()] {
        tx.unbounded_send(item.clone())?;
        assert_eq!(
            unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
            vec![item]
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_nwise_rejects_zero_size() {
    // Arrange
    let (_tx, stream) = test_channel::<i32>();

    // Act
    let result = stream.nwise(0);

    // Assert
    assert!(matches!(
        result,
        Err(NwiseError::InvalidWindowSize { size: 0 })
    ));
}

#[tokio::test]
async fn test_nwise_with_validated_size() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![10, 20, 30]).map(StreamItem::Value);

    // Act
    let windows: Vec<Vec<i32>> = source
        .nwise_with(WindowSize::PAIR)
        .map(StreamItem::unwrap)
        .collect()
        .await;

    // Assert
    assert_eq!(windows, vec![vec![10], vec![10, 20], vec![20, 30]]);

    Ok(())
}

#[tokio::test]
async fn test_nwise_size_larger_than_source() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![1, 2]).map(StreamItem::Value);

    // Act
    let windows: Vec<Vec<i32>> = source.nwise(5)?.map(StreamItem::unwrap).collect().await;

    // Assert: only partial windows, completion leaves nothing behind
    assert_eq!(windows, vec![vec![1], vec![1, 2]]);

    Ok(())
}

#[tokio::test]
async fn test_nwise_huge_size_over_short_source() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![1, 2]).map(StreamItem::Value);

    // Act
    let windows: Vec<Vec<i32>> = source
        .nwise(usize::MAX)?
        .map(StreamItem::unwrap)
        .collect()
        .await;

    // Assert
    assert_eq!(windows, vec![vec![1], vec![1, 2]]);

    Ok(())
}

#[tokio::test]
async fn test_nwise_empty_source_completes_without_emissions() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.nwise(3)?;

    // Act
    drop(tx);

    // Assert
    assert_stream_ended(&mut result, 500).await;
    assert!(result.is_terminated());

    Ok(())
}

#[tokio::test]
async fn test_nwise_waits_for_source() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut result = stream.nwise(2)?;

    // Act & Assert
    assert_no_element_emitted(&mut result, 100).await;

    tx.unbounded_send(plant_rose())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![plant_rose()]
    );
    assert_no_element_emitted(&mut result, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_nwise_completion_is_forwarded_once() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.nwise(2)?;

    // Act
    tx.unbounded_send(1)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), vec![1]);
    drop(tx);

    // Assert
    assert_stream_ended(&mut result, 500).await;
    assert!(result.is_terminated());
    assert!(result.next().await.is_none());
    assert!(result.operator().is_none());

    Ok(())
}

#[tokio::test]
async fn test_nwise_dispose_releases_source() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.nwise(2)?;

    tx.unbounded_send(1)?;
    unwrap_stream(&mut result, 500).await;

    // Act
    drop(result);

    // Assert: the upstream receiver is gone with the subscription
    assert!(tx.unbounded_send(2).is_err());
    assert!(tx.is_closed());

    Ok(())
}

#[tokio::test]
async fn test_nwise_operator_state_is_inspectable() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.nwise(2)?;

    // Act
    tx.unbounded_send(1)?;
    tx.unbounded_send(2)?;
    tx.unbounded_send(3)?;
    unwrap_stream(&mut result, 500).await;
    unwrap_stream(&mut result, 500).await;
    unwrap_stream(&mut result, 500).await;

    // Assert
    let operator = result.operator().expect("operator is active");
    assert_eq!(operator.len(), 2);
    assert_eq!(operator.size(), WindowSize::PAIR);

    Ok(())
}
