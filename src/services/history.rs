// ABOUTME: Reverse-chronological history retrieval with optional result capping
// ABOUTME: Skips malformed rows and degrades to empty on store failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout history, most recent first.

use std::sync::Arc;

use tracing::warn;

use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::errors::AppResult;
use crate::models::WorkoutRecord;
use crate::store::LogStore;

/// Newest-first history over the log
pub struct HistoryService {
    store: Arc<LogStore>,
    default_limit: usize,
}

impl HistoryService {
    /// Create a history service with the standard result cap
    #[must_use]
    pub fn new(store: Arc<LogStore>) -> Self {
        Self {
            store,
            default_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Override the cap applied when the caller passes no limit
    #[must_use]
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Fallible core: full scan, malformed rows dropped, reversed so the
    /// most recently appended record comes first, truncated to `limit`
    /// (or the service default when `None`).
    ///
    /// # Errors
    /// `StoreUnavailable` when the backing table cannot be read.
    pub async fn try_get_history(&self, limit: Option<usize>) -> AppResult<Vec<WorkoutRecord>> {
        let mut records: Vec<WorkoutRecord> = self
            .store
            .scan_all()
            .await?
            .into_iter()
            .map(|(_, record)| record)
            .collect();
        records.reverse();
        records.truncate(limit.unwrap_or(self.default_limit));
        Ok(records)
    }

    /// History, newest first. Degrades to an empty list on store failure;
    /// the cause is logged, not raised.
    pub async fn get_history(&self, limit: Option<usize>) -> Vec<WorkoutRecord> {
        match self.try_get_history(limit).await {
            Ok(records) => records,
            Err(err) => {
                warn!(%err, "history read failed, returning empty result");
                Vec::new()
            }
        }
    }
}
