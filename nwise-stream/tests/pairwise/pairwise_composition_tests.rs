// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use nwise_core::{StreamItem, Subject};
use nwise_stream::prelude::*;
use nwise_test_utils::{
    test_data::{person_alice, person_bob, person_charlie, TestData},
    unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_pairwise_deltas() {
    // Arrange
    let readings = stream::iter(vec![10, 13, 9, 9]).map(StreamItem::Value);

    // Act
    let deltas: Vec<i32> = readings
        .pairwise()
        .map(|pair| pair.map(|(previous, current)| current - previous))
        .map(StreamItem::unwrap)
        .collect()
        .await;

    // Assert
    assert_eq!(deltas, vec![3, -4, 0]);
}

#[tokio::test]
async fn test_pairwise_matches_full_windows_of_two() -> anyhow::Result<()> {
    // Arrange
    let values = vec![5, 1, 4, 1, 5, 9];

    // Act
    let pairs: Vec<(i32, i32)> = stream::iter(values.clone())
        .map(StreamItem::Value)
        .pairwise()
        .map(StreamItem::unwrap)
        .collect()
        .await;
    let windows: Vec<(i32, i32)> = stream::iter(values)
        .map(StreamItem::Value)
        .nwise(2)?
        .skip(1)
        .map(|w| w.map(|w| (w[0], w[1])))
        .map(StreamItem::unwrap)
        .collect()
        .await;

    // Assert
    assert_eq!(pairs, windows);

    Ok(())
}

#[tokio::test]
async fn test_pairwise_of_nwise() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![1, 2, 3]).map(StreamItem::Value);

    // Act
    let pairs: Vec<(Vec<i32>, Vec<i32>)> = source
        .nwise(2)?
        .pairwise()
        .map(StreamItem::unwrap)
        .collect()
        .await;

    // Assert
    assert_eq!(
        pairs,
        vec![(vec![1], vec![1, 2]), (vec![1, 2], vec![2, 3])]
    );

    Ok(())
}

#[tokio::test]
async fn test_pairwise_subscribers_of_subject_have_independent_state() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<TestData>::new();
    let mut early = subject.subscribe()?.pairwise();

    subject.next(person_alice())?;
    let mut late = subject.subscribe()?.pairwise();

    // Act
    subject.next(person_bob())?;
    subject.next(person_charlie())?;

    // Assert: the late subscriber never saw alice
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut early, 500).await)),
        (person_alice(), person_bob())
    );
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut early, 500).await)),
        (person_bob(), person_charlie())
    );
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut late, 500).await)),
        (person_bob(), person_charlie())
    );

    Ok(())
}

#[tokio::test]
async fn test_pairwise_completes_with_subject() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let result = subject.subscribe()?.pairwise();

    // Act
    subject.next(1)?;
    subject.next(2)?;
    subject.close();

    // Assert
    let pairs: Vec<StreamItem<(i32, i32)>> = result.collect().await;
    assert_eq!(pairs, vec![StreamItem::Value((1, 2))]);

    Ok(())
}
