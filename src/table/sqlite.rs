// ABOUTME: SQLite-backed durable implementation of the ordered-row table
// ABOUTME: Persists rows as JSON cell arrays keyed by a shifting position column
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite [`RowTable`] backend.
//!
//! Rows are stored as JSON-serialized cell arrays with an explicit position
//! column. Deletes renumber subsequent positions inside one transaction so
//! the spreadsheet-style shift-up contract holds.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row as SqlxRow, SqlitePool};
use tracing::debug;

use super::{header_row, Row, RowTable};
use crate::errors::{AppError, AppResult};

/// SQLite ordered-row table
pub struct SqliteTable {
    pool: SqlitePool,
}

impl SqliteTable {
    /// Open (and create if missing) the backing database and seed the
    /// header row when the table is empty.
    ///
    /// # Errors
    /// Returns `StoreUnavailable` when the database cannot be opened or the
    /// schema cannot be created.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let in_memory = database_url.contains(":memory:");

        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !in_memory {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // An in-memory database exists per connection, so the pool must
        // never open a second one
        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&connection_options)
                .await?
        } else {
            SqlitePool::connect(&connection_options).await?
        };
        let table = Self { pool };
        table.migrate().await?;
        Ok(table)
    }

    /// Create the schema and seed the header row if absent
    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS sheet_rows (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                pos INTEGER NOT NULL,
                cells TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_sheet_rows_pos ON sheet_rows (pos)")
            .execute(&self.pool)
            .await?;

        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM sheet_rows")
            .fetch_one(&self.pool)
            .await?
            .try_get("n")?;

        if count == 0 {
            debug!("seeding header row in empty sheet table");
            let cells = encode_cells(&header_row())?;
            sqlx::query("INSERT INTO sheet_rows (pos, cells) VALUES (1, ?)")
                .bind(cells)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }
}

fn encode_cells(row: &Row) -> AppResult<String> {
    serde_json::to_string(row).map_err(|e| AppError::store(format!("cell encoding failed: {e}")))
}

fn decode_cells(raw: &str) -> AppResult<Row> {
    serde_json::from_str(raw).map_err(|e| AppError::store(format!("cell decoding failed: {e}")))
}

#[async_trait]
impl RowTable for SqliteTable {
    async fn append_rows(&self, rows: Vec<Row>) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let last: i64 = sqlx::query("SELECT COALESCE(MAX(pos), 0) AS last FROM sheet_rows")
            .fetch_one(&mut *tx)
            .await?
            .try_get("last")?;

        for (offset, row) in rows.iter().enumerate() {
            let cells = encode_cells(row)?;
            sqlx::query("INSERT INTO sheet_rows (pos, cells) VALUES (?, ?)")
                .bind(last + 1 + offset as i64)
                .bind(cells)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn read_range(&self, start_row: u64, row_count: u64) -> AppResult<Vec<Row>> {
        if start_row == 0 {
            return Err(AppError::store("row indices are 1-based"));
        }
        let end = start_row.saturating_add(row_count);
        let rows = sqlx::query("SELECT cells FROM sheet_rows WHERE pos >= ? AND pos < ? ORDER BY pos")
            .bind(start_row as i64)
            .bind(end as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| {
                let raw: String = r.try_get("cells")?;
                decode_cells(&raw)
            })
            .collect()
    }

    async fn delete_row(&self, row_index: u64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let last: i64 = sqlx::query("SELECT COALESCE(MAX(pos), 0) AS last FROM sheet_rows")
            .fetch_one(&mut *tx)
            .await?
            .try_get("last")?;

        let deleted = sqlx::query("DELETE FROM sheet_rows WHERE pos = ?")
            .bind(row_index as i64)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::not_found(row_index, (last as u64).saturating_sub(1)));
        }

        sqlx::query("UPDATE sheet_rows SET pos = pos - 1 WHERE pos > ?")
            .bind(row_index as i64)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn last_row_index(&self) -> AppResult<u64> {
        let last: i64 = sqlx::query("SELECT COALESCE(MAX(pos), 0) AS last FROM sheet_rows")
            .fetch_one(&self.pool)
            .await?
            .try_get("last")?;
        Ok(last as u64)
    }
}
