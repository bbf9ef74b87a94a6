// ABOUTME: Deduplicated exercise catalog derived from the log
// ABOUTME: First-seen ordering of (body part, exercise) pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise catalog: the distinct (body part, exercise) pairs seen in the
//! log, in first-seen order.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::errors::AppResult;
use crate::models::CatalogEntry;
use crate::store::LogStore;

/// Deduplicated (body part, exercise) catalog
pub struct CatalogService {
    store: Arc<LogStore>,
}

impl CatalogService {
    /// Create a catalog service over the given store
    #[must_use]
    pub fn new(store: Arc<LogStore>) -> Self {
        Self { store }
    }

    /// Fallible core: scan the log and collect each distinct
    /// (body part, exercise) pair once, preserving first-seen order and
    /// skipping records missing either field.
    ///
    /// # Errors
    /// `StoreUnavailable` when the backing table cannot be read.
    pub async fn try_get_exercise_catalog(&self) -> AppResult<Vec<CatalogEntry>> {
        let records = self.store.scan_all().await?;
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut catalog = Vec::new();
        for (_, record) in records {
            let body_part = record.body_part.trim();
            let exercise = record.exercise.trim();
            if body_part.is_empty() || exercise.is_empty() {
                continue;
            }
            if seen.insert((body_part.to_owned(), exercise.to_owned())) {
                catalog.push(CatalogEntry {
                    body_part: body_part.to_owned(),
                    exercise: exercise.to_owned(),
                });
            }
        }
        Ok(catalog)
    }

    /// Exercise catalog in first-seen order. Degrades to an empty list on
    /// store failure; the cause is logged, not raised.
    pub async fn get_exercise_catalog(&self) -> Vec<CatalogEntry> {
        match self.try_get_exercise_catalog().await {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(%err, "catalog read failed, returning empty catalog");
                Vec::new()
            }
        }
    }
}
