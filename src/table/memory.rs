// ABOUTME: In-memory backing-table implementation for tests and ephemeral use
// ABOUTME: Holds rows behind an async RwLock with the header row pre-seeded
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory [`RowTable`] backend.
//!
//! Used by tests to substitute the durable store, per the injected-store
//! design: services never touch a process-wide table handle.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{header_row, Row, RowTable};
use crate::errors::{AppError, AppResult};

/// In-memory ordered-row table
pub struct MemoryTable {
    rows: RwLock<Vec<Row>>,
}

impl MemoryTable {
    /// Create a table holding only the header row
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(vec![header_row()]),
        }
    }
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowTable for MemoryTable {
    async fn append_rows(&self, rows: Vec<Row>) -> AppResult<()> {
        let mut guard = self.rows.write().await;
        guard.extend(rows);
        Ok(())
    }

    async fn read_range(&self, start_row: u64, row_count: u64) -> AppResult<Vec<Row>> {
        if start_row == 0 {
            return Err(AppError::store("row indices are 1-based"));
        }
        let guard = self.rows.read().await;
        let start = (start_row - 1) as usize;
        if start >= guard.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(row_count as usize).min(guard.len());
        Ok(guard[start..end].to_vec())
    }

    async fn delete_row(&self, row_index: u64) -> AppResult<()> {
        let mut guard = self.rows.write().await;
        let len = guard.len() as u64;
        if row_index == 0 || row_index > len {
            return Err(AppError::not_found(row_index, len.saturating_sub(1)));
        }
        guard.remove((row_index - 1) as usize);
        Ok(())
    }

    async fn last_row_index(&self) -> AppResult<u64> {
        let guard = self.rows.read().await;
        Ok(guard.len() as u64)
    }
}
