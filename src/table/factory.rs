// ABOUTME: Table factory resolving the configured backend to a live RowTable
// ABOUTME: Maps backend selection onto the memory or SQLite implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend factory.
//!
//! Resolves [`AppConfig`]'s backend selection to an opened [`RowTable`]
//! instance, so callers wire storage once at startup and inject it into
//! [`crate::store::LogStore`].

use std::sync::Arc;

use tracing::info;

use super::{memory::MemoryTable, sqlite::SqliteTable, RowTable};
use crate::config::{AppConfig, TableBackend};
use crate::errors::AppResult;

/// Open the backing table selected by configuration.
///
/// # Errors
/// Returns `StoreUnavailable` when the SQLite database cannot be opened.
pub async fn open_table(config: &AppConfig) -> AppResult<Arc<dyn RowTable>> {
    match &config.backend {
        TableBackend::Memory => {
            info!("opening in-memory backing table");
            Ok(Arc::new(MemoryTable::new()))
        }
        TableBackend::Sqlite { database_url } => {
            info!(database_url = %database_url, "opening sqlite backing table");
            Ok(Arc::new(SqliteTable::new(database_url).await?))
        }
    }
}
