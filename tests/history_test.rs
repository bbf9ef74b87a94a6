// ABOUTME: Integration tests for the history service
// ABOUTME: Newest-first ordering, result capping, malformed-row skipping, degrade-to-empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use std::sync::Arc;

use anyhow::Result;
use common::{create_failing_store, create_memory_store, entry};
use liftlog::services::HistoryService;
use liftlog::table::{Cell, RowTable};

#[tokio::test]
async fn history_is_reverse_of_append_order() -> Result<()> {
    let (_, store) = create_memory_store();
    store
        .append_entries(&[entry("Chest", "Bench Press", 80.0, 8, 3.0)])
        .await?;
    store
        .append_entries(&[entry("Back", "Row", 60.0, 10, 3.0)])
        .await?;
    store
        .append_entries(&[entry("Legs", "Squat", 100.0, 5, 5.0)])
        .await?;

    let history = HistoryService::new(store).get_history(None).await;
    let names: Vec<&str> = history.iter().map(|r| r.exercise.as_str()).collect();
    assert_eq!(names, vec!["Squat", "Row", "Bench Press"]);
    Ok(())
}

#[tokio::test]
async fn limit_truncates_to_most_recent_entries() -> Result<()> {
    let (_, store) = create_memory_store();
    for i in 0..5 {
        store
            .append_entries(&[entry("Chest", &format!("Exercise {i}"), 50.0, 10, 3.0)])
            .await?;
    }

    let history = HistoryService::new(store).get_history(Some(2)).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].exercise, "Exercise 4");
    assert_eq!(history[1].exercise, "Exercise 3");
    Ok(())
}

#[tokio::test]
async fn default_cap_applies_when_no_limit_is_given() -> Result<()> {
    let (_, store) = create_memory_store();
    for i in 0..4 {
        store
            .append_entries(&[entry("Back", &format!("Exercise {i}"), 40.0, 12, 2.0)])
            .await?;
    }

    let service = HistoryService::new(store).with_default_limit(3);
    let history = service.get_history(None).await;
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].exercise, "Exercise 3");
    Ok(())
}

#[tokio::test]
async fn malformed_rows_are_skipped_without_aborting_the_scan() -> Result<()> {
    let (table, store) = create_memory_store();
    store
        .append_entries(&[entry("Chest", "Bench Press", 80.0, 8, 3.0)])
        .await?;

    // Plant a row with an empty timestamp directly in the backing table
    table
        .append_rows(vec![vec![
            Cell::Empty,
            Cell::Text("Back".into()),
            Cell::Text("Row".into()),
            Cell::Number(60.0),
            Cell::Number(10.0),
            Cell::Number(3.0),
            Cell::Number(75.0),
            Cell::Empty,
        ]])
        .await?;

    store
        .append_entries(&[entry("Legs", "Squat", 100.0, 5, 5.0)])
        .await?;

    let history = HistoryService::new(store).get_history(None).await;
    let names: Vec<&str> = history.iter().map(|r| r.exercise.as_str()).collect();
    assert_eq!(names, vec!["Squat", "Bench Press"]);
    Ok(())
}

#[tokio::test]
async fn store_failure_degrades_to_empty_history() {
    let store = create_failing_store();
    let service = HistoryService::new(Arc::clone(&store));

    // Public surface degrades, the fallible core reports the cause
    assert!(service.get_history(None).await.is_empty());
    assert!(service.try_get_history(None).await.is_err());
}
