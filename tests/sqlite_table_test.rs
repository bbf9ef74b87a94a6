// ABOUTME: Integration tests for the SQLite backing-table backend
// ABOUTME: Header seeding, append/read parity with memory, delete renumbering, reopen durability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use common::{entry, init_test_logging};
use liftlog::errors::AppError;
use liftlog::services::HistoryService;
use liftlog::store::LogStore;
use liftlog::table::{sqlite::SqliteTable, RowTable};

async fn create_sqlite_store() -> Result<Arc<LogStore>> {
    init_test_logging();
    let table = Arc::new(SqliteTable::new("sqlite::memory:").await?);
    Ok(Arc::new(LogStore::new(table)))
}

#[tokio::test]
async fn fresh_database_holds_only_the_header() -> Result<()> {
    init_test_logging();
    let table = SqliteTable::new("sqlite::memory:").await?;
    assert_eq!(table.last_row_index().await?, 1);

    let rows = table.read_range(1, 10).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0].as_text(), "Date");
    Ok(())
}

#[tokio::test]
async fn append_scan_delete_matches_store_semantics() -> Result<()> {
    let store = create_sqlite_store().await?;
    store
        .append_entries(&[
            entry("Chest", "Bench Press", 80.0, 8, 3.0),
            entry("Back", "Row", 60.0, 10, 3.0),
            entry("Legs", "Squat", 100.0, 5, 5.0),
        ])
        .await?;
    assert_eq!(store.last_position().await?, 3);

    store.delete_at(1).await?;

    let scanned = store.scan_all().await?;
    assert_eq!(scanned.len(), 2);
    assert_eq!(scanned[0].0, 1);
    assert_eq!(scanned[0].1.exercise, "Row");
    assert_eq!(scanned[1].0, 2);
    assert_eq!(scanned[1].1.exercise, "Squat");

    let err = store.delete_at(3).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn history_reads_back_newest_first() -> Result<()> {
    let store = create_sqlite_store().await?;
    store
        .append_entries(&[entry("Chest", "Bench Press", 80.0, 8, 3.0)])
        .await?;
    store
        .append_entries(&[entry("Back", "Row", 60.0, 10, 3.0)])
        .await?;

    let history = HistoryService::new(store).get_history(None).await;
    assert_eq!(history[0].exercise, "Row");
    assert_eq!(history[1].exercise, "Bench Press");
    Ok(())
}

#[tokio::test]
async fn data_survives_reopening_the_database() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let url = format!(
        "sqlite:{}",
        dir.path().join("log.db").to_string_lossy()
    );

    {
        let table = Arc::new(SqliteTable::new(&url).await?);
        let store = LogStore::new(table);
        store
            .append_entries(&[entry("Chest", "Bench Press", 80.0, 8, 3.0)])
            .await?;
    }

    let table = Arc::new(SqliteTable::new(&url).await?);
    let store = LogStore::new(table);
    let scanned = store.scan_all().await?;
    assert_eq!(scanned.len(), 1);
    assert_eq!(scanned[0].1.exercise, "Bench Press");
    Ok(())
}
