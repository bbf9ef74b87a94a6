// ABOUTME: Integration tests for the per-exercise progress service
// ABOUTME: Store-order series, name trimming, fresh metric recomputation, legacy dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use anyhow::Result;
use common::{create_failing_store, create_memory_store, entry};
use liftlog::services::ProgressService;
use liftlog::table::{Cell, RowTable};

#[tokio::test]
async fn series_contains_only_the_requested_exercise_in_store_order() -> Result<()> {
    let (_, store) = create_memory_store();
    store
        .append_entries(&[
            entry("Chest", "Bench Press", 80.0, 8, 3.0),
            entry("Back", "Row", 60.0, 10, 3.0),
            entry("Chest", "Bench Press", 82.5, 6, 3.0),
        ])
        .await?;

    let series = ProgressService::new(store)
        .get_exercise_progress("Bench Press")
        .await;
    assert_eq!(series.len(), 2);
    assert!((series[0].weight - 80.0).abs() < f64::EPSILON);
    assert!((series[1].weight - 82.5).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn exercise_names_are_compared_after_trimming() -> Result<()> {
    let (_, store) = create_memory_store();
    store
        .append_entries(&[entry("Chest", "  Bench Press  ", 80.0, 8, 3.0)])
        .await?;

    let series = ProgressService::new(store)
        .get_exercise_progress(" Bench Press ")
        .await;
    assert_eq!(series.len(), 1);
    Ok(())
}

#[tokio::test]
async fn volume_and_one_rep_max_are_recomputed_fresh() -> Result<()> {
    let (table, store) = create_memory_store();

    // A legacy row whose stored 1RM cell is stale garbage
    table
        .append_rows(vec![vec![
            Cell::from("2023/11/20 07:45"),
            Cell::from("Chest"),
            Cell::from("Bench Press"),
            Cell::from(80.0),
            Cell::from(8.0),
            Cell::from(3.0),
            Cell::from(9999.0),
            Cell::Empty,
        ]])
        .await?;

    let series = ProgressService::new(store)
        .get_exercise_progress("Bench Press")
        .await;
    assert_eq!(series.len(), 1);
    assert!((series[0].one_rep_max - 96.0).abs() < f64::EPSILON);
    assert!((series[0].volume - 1920.0).abs() < f64::EPSILON);
    // Legacy slash timestamp normalized to a strict instant
    assert_eq!(series[0].instant, "2023-11-20T07:45:00+00:00");
    Ok(())
}

#[tokio::test]
async fn non_numeric_cells_coerce_to_zero() -> Result<()> {
    let (table, store) = create_memory_store();
    table
        .append_rows(vec![vec![
            Cell::Text("2024-01-05 18:00".into()),
            Cell::Text("Legs".into()),
            Cell::Text("Squat".into()),
            Cell::Text("heavy".into()),
            Cell::Empty,
            Cell::Number(3.0),
            Cell::Empty,
            Cell::Empty,
        ]])
        .await?;

    let series = ProgressService::new(store).get_exercise_progress("Squat").await;
    assert_eq!(series.len(), 1);
    assert!((series[0].weight - 0.0).abs() < f64::EPSILON);
    assert_eq!(series[0].reps, 0);
    assert!((series[0].volume - 0.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn empty_timestamp_rows_are_excluded_but_raw_text_survives() -> Result<()> {
    let (table, store) = create_memory_store();
    // Empty timestamp: excluded
    table
        .append_rows(vec![vec![
            Cell::Empty,
            Cell::Text("Chest".into()),
            Cell::Text("Bench Press".into()),
            Cell::Number(80.0),
            Cell::Number(8.0),
            Cell::Number(3.0),
            Cell::Empty,
            Cell::Empty,
        ]])
        .await?;
    // Unparseable but non-empty timestamp: kept with the raw text
    table
        .append_rows(vec![vec![
            Cell::Text("around new year".into()),
            Cell::Text("Chest".into()),
            Cell::Text("Bench Press".into()),
            Cell::Number(60.0),
            Cell::Number(12.0),
            Cell::Number(2.0),
            Cell::Empty,
            Cell::Empty,
        ]])
        .await?;

    let series = ProgressService::new(store)
        .get_exercise_progress("Bench Press")
        .await;
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].instant, "around new year");
    Ok(())
}

#[tokio::test]
async fn end_to_end_bench_press_example() -> Result<()> {
    let (_, store) = create_memory_store();
    store
        .append_entries(&[entry("Chest", "Bench Press", 80.0, 8, 3.0)])
        .await?;

    let scanned = store.scan_all().await?;
    assert!((scanned[0].1.estimated_one_rep_max - 96.0).abs() < f64::EPSILON);
    // Volume recomputed from the decoded record matches the raw inputs
    assert!((scanned[0].1.volume() - 1920.0).abs() < f64::EPSILON);

    let series = ProgressService::new(store)
        .get_exercise_progress("Bench Press")
        .await;
    assert_eq!(series.len(), 1);
    assert!((series[0].volume - 1920.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn store_failure_degrades_to_empty_series() {
    let store = create_failing_store();
    let service = ProgressService::new(store);
    assert!(service.get_exercise_progress("Bench Press").await.is_empty());
    assert!(service.try_get_exercise_progress("Bench Press").await.is_err());
}
