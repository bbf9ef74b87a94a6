// ABOUTME: Shared test utilities for liftlog integration tests
// ABOUTME: Store factories, sample entries, and a failing-table stub
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(dead_code, clippy::missing_errors_doc, clippy::must_use_candidate)]

//! Shared test setup helpers to reduce duplication across integration tests.

use std::sync::{Arc, Once};

use async_trait::async_trait;
use liftlog::errors::{AppError, AppResult};
use liftlog::models::WorkoutEntry;
use liftlog::store::LogStore;
use liftlog::table::{memory::MemoryTable, Row, RowTable};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory store plus a handle on its backing table, for tests that need
/// to plant raw rows
pub fn create_memory_store() -> (Arc<MemoryTable>, Arc<LogStore>) {
    init_test_logging();
    let table = Arc::new(MemoryTable::new());
    let store = Arc::new(LogStore::new(Arc::<MemoryTable>::clone(&table)));
    (table, store)
}

/// A caller-shaped workout entry
pub fn entry(body_part: &str, exercise: &str, weight: f64, reps: u32, sets: f64) -> WorkoutEntry {
    WorkoutEntry {
        body_part: body_part.to_owned(),
        exercise: exercise.to_owned(),
        weight,
        reps,
        sets: Some(sets),
        note: String::new(),
    }
}

/// Backing table whose every operation fails, for degrade-to-empty tests
pub struct FailingTable;

#[async_trait]
impl RowTable for FailingTable {
    async fn append_rows(&self, _rows: Vec<Row>) -> AppResult<()> {
        Err(AppError::store("simulated outage"))
    }

    async fn read_range(&self, _start_row: u64, _row_count: u64) -> AppResult<Vec<Row>> {
        Err(AppError::store("simulated outage"))
    }

    async fn delete_row(&self, _row_index: u64) -> AppResult<()> {
        Err(AppError::store("simulated outage"))
    }

    async fn last_row_index(&self) -> AppResult<u64> {
        Err(AppError::store("simulated outage"))
    }
}

/// Store over the failing table
pub fn create_failing_store() -> Arc<LogStore> {
    init_test_logging();
    Arc::new(LogStore::new(Arc::new(FailingTable)))
}
