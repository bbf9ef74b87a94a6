// ABOUTME: Append-only log store over an injected ordered-row table
// ABOUTME: Handles batch append with capture-time stamping, scans, and positional deletes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Log Store
//!
//! [`LogStore`] wraps an injected [`RowTable`] backend with the workout-log
//! semantics: records append contiguously after the last row, scans decode
//! and skip malformed rows, and deletes remove exactly one row by position.
//!
//! Positions are 1-based over data rows (the header is invisible to
//! callers) and are invalidated by any delete: callers must re-fetch before
//! the next positional mutation. The store assumes a single writer; no
//! locking or versioning coordinates concurrent mutators.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::codec;
use crate::constants::sheet;
use crate::errors::{AppError, AppResult};
use crate::models::{WorkoutEntry, WorkoutRecord};
use crate::table::{Row, RowTable};

/// Append-only workout log over an injected backing table
pub struct LogStore {
    table: Arc<dyn RowTable>,
}

impl LogStore {
    /// Wrap a backing table
    #[must_use]
    pub fn new(table: Arc<dyn RowTable>) -> Self {
        Self { table }
    }

    /// Append already-built records contiguously after the last row.
    ///
    /// Returns the number of rows appended.
    ///
    /// # Errors
    /// [`AppError::NoData`] when `records` is empty; `StoreUnavailable`
    /// when the backing table cannot be written.
    pub async fn append(&self, records: &[WorkoutRecord]) -> AppResult<usize> {
        if records.is_empty() {
            return Err(AppError::NoData);
        }
        let rows: Vec<Row> = records.iter().map(codec::encode).collect();
        let count = rows.len();
        self.table.append_rows(rows).await?;
        debug!(count, "appended workout records");
        Ok(count)
    }

    /// Append caller-submitted entries, stamping every record in the batch
    /// with one capture instant and deriving the estimated one-rep max at
    /// write time.
    ///
    /// # Errors
    /// Same as [`Self::append`].
    pub async fn append_entries(&self, entries: &[WorkoutEntry]) -> AppResult<usize> {
        let captured_at = Utc::now();
        let records: Vec<WorkoutRecord> = entries
            .iter()
            .map(|e| WorkoutRecord::from_entry(e, captured_at))
            .collect();
        self.append(&records).await
    }

    /// Scan every data row, decoded. Malformed rows (bad timestamp, short
    /// row) are skipped with a warning and never abort the scan.
    ///
    /// Returns `(position, record)` pairs in store order, positions 1-based
    /// over data rows.
    ///
    /// # Errors
    /// `StoreUnavailable` when the backing table cannot be read.
    pub async fn scan_all(&self) -> AppResult<Vec<(u64, WorkoutRecord)>> {
        let rows = self.scan_rows().await?;
        let mut records = Vec::with_capacity(rows.len());
        for (position, row) in &rows {
            match codec::decode(row) {
                Ok(record) => records.push((*position, record)),
                Err(err) if err.is_decode() => {
                    warn!(position, %err, "skipping malformed log row");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(records)
    }

    /// Scan every data row in raw cell form, for consumers that do their
    /// own tolerant field extraction.
    ///
    /// # Errors
    /// `StoreUnavailable` when the backing table cannot be read.
    pub async fn scan_rows(&self) -> AppResult<Vec<(u64, Row)>> {
        let last = self.table.last_row_index().await?;
        if last < sheet::FIRST_DATA_ROW {
            return Ok(Vec::new());
        }
        let count = last - sheet::FIRST_DATA_ROW + 1;
        let rows = self.table.read_range(sheet::FIRST_DATA_ROW, count).await?;
        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| (i as u64 + 1, row))
            .collect())
    }

    /// Delete exactly one record by 1-based data position. Subsequent
    /// positions shift down by one; any position held by the caller is
    /// stale after this returns.
    ///
    /// # Errors
    /// [`AppError::NotFound`] when the position is out of range;
    /// `StoreUnavailable` on backend failure.
    pub async fn delete_at(&self, position: u64) -> AppResult<()> {
        let available = self.last_position().await?;
        if position == 0 || position > available {
            return Err(AppError::not_found(position, available));
        }
        self.table
            .delete_row(position + sheet::FIRST_DATA_ROW - 1)
            .await?;
        debug!(position, "deleted log row");
        Ok(())
    }

    /// Number of data rows currently in the store (header excluded)
    ///
    /// # Errors
    /// `StoreUnavailable` when the backing table cannot be read.
    pub async fn last_position(&self) -> AppResult<u64> {
        let last = self.table.last_row_index().await?;
        Ok(last.saturating_sub(sheet::FIRST_DATA_ROW - 1))
    }
}
