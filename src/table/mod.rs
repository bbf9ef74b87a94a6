// ABOUTME: Backing-table abstraction for the append-only workout log
// ABOUTME: Ordered-row table trait with in-memory and SQLite backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Backing Table
//!
//! The log is persisted in an external ordered-row table: row 1 is a fixed
//! header, data rows start at row 2, and row identity is the 1-based row
//! index. [`RowTable`] is the contract every backend implements; the
//! [`memory`] backend serves tests and the [`sqlite`] backend is the
//! durable store.
//!
//! Positions shift after a delete, so row indices are only valid until the
//! next mutation.

pub mod factory;
pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::sheet;
use crate::errors::AppResult;

/// One cell of a backing-table row.
///
/// The original store is spreadsheet-like: a cell may hold a native
/// date-time, free text, a number, or nothing. The codec is responsible for
/// interpreting cells positionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum Cell {
    /// Empty cell
    Empty,
    /// Text cell
    Text(String),
    /// Numeric cell
    Number(f64),
    /// Native date-time cell
    Instant(DateTime<Utc>),
}

impl Cell {
    /// Text content of the cell, rendering numbers and instants as strings
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Instant(t) => t.to_rfc3339(),
        }
    }

    /// Numeric content of the cell, coercing numeric text; `None` when the
    /// cell holds nothing numeric
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Empty | Self::Instant(_) => None,
        }
    }

    /// Whether the cell holds no usable content
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) | Self::Instant(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One ordered row of the backing table
pub type Row = Vec<Cell>;

/// Build the fixed header row
#[must_use]
pub fn header_row() -> Row {
    sheet::HEADER.iter().map(|h| Cell::from(*h)).collect()
}

/// Ordered-row table contract.
///
/// Row indices are 1-based and include the header row; implementations seed
/// the header on first open. `delete_row` shifts every subsequent row up by
/// one, so indices are not stable identities across mutations.
#[async_trait]
pub trait RowTable: Send + Sync {
    /// Append rows contiguously after the current last row.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::StoreUnavailable`] when the
    /// backend cannot be written.
    async fn append_rows(&self, rows: Vec<Row>) -> AppResult<()>;

    /// Read `row_count` rows starting at 1-based `start_row`. Rows past the
    /// end are simply not returned.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::StoreUnavailable`] when the
    /// backend cannot be read.
    async fn read_range(&self, start_row: u64, row_count: u64) -> AppResult<Vec<Row>>;

    /// Delete exactly one row by 1-based index, shifting subsequent rows up.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::NotFound`] when the index is out
    /// of range, or `StoreUnavailable` on backend failure.
    async fn delete_row(&self, row_index: u64) -> AppResult<()>;

    /// 1-based index of the last row currently holding data (the header
    /// counts, so an empty table reports 1).
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::StoreUnavailable`] when the
    /// backend cannot be read.
    async fn last_row_index(&self) -> AppResult<u64>;
}
