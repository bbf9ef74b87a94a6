// ABOUTME: Per-exercise progress time-series extraction from raw log rows
// ABOUTME: Recomputes volume and 1RM fresh, tolerating legacy date encodings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-exercise progress series.
//!
//! The series is built from raw cells rather than decoded records: the
//! stored one-rep-max is a cache, so both volume and 1RM are recomputed
//! from the row's weight/reps/sets here, and timestamps go through the
//! codec's series normalizer so legacy encodings still yield a usable
//! instant string.

use std::sync::Arc;

use tracing::warn;

use crate::codec;
use crate::constants::sheet::{self, col};
use crate::errors::AppResult;
use crate::metrics;
use crate::models::ProgressPoint;
use crate::store::LogStore;

/// Per-exercise time-series extraction
pub struct ProgressService {
    store: Arc<LogStore>,
}

impl ProgressService {
    /// Create a progress service over the given store
    #[must_use]
    pub fn new(store: Arc<LogStore>) -> Self {
        Self { store }
    }

    /// Fallible core: store-order series of every row whose exercise name
    /// matches `exercise` after trimming both sides. Rows with an empty or
    /// unparseable timestamp are excluded; missing or non-numeric weight,
    /// reps, and sets cells coerce to 0 (sets to 1).
    ///
    /// # Errors
    /// `StoreUnavailable` when the backing table cannot be read.
    pub async fn try_get_exercise_progress(
        &self,
        exercise: &str,
    ) -> AppResult<Vec<ProgressPoint>> {
        let wanted = exercise.trim();
        let rows = self.store.scan_rows().await?;

        let mut series = Vec::new();
        for (_, row) in &rows {
            if row.len() < sheet::COLUMN_COUNT {
                continue;
            }
            if row[col::EXERCISE].as_text().trim() != wanted {
                continue;
            }
            if codec::parse_timestamp(&row[col::DATE]).is_none() && row[col::DATE].is_empty() {
                // Empty timestamp: malformed row, skipped entirely
                continue;
            }

            let weight = row[col::WEIGHT].as_number().unwrap_or(0.0).max(0.0);
            let reps = row[col::REPS].as_number().unwrap_or(0.0).max(0.0) as u32;
            let sets = row[col::SETS]
                .as_number()
                .filter(|s| *s > 0.0)
                .unwrap_or(1.0);

            series.push(ProgressPoint {
                instant: codec::normalize_timestamp_for_series(&row[col::DATE]),
                weight,
                reps,
                sets,
                one_rep_max: metrics::estimate_one_rep_max(weight, reps),
                volume: metrics::volume(weight, reps, sets),
            });
        }
        Ok(series)
    }

    /// Progress series in store order. Degrades to an empty series on
    /// store failure; the cause is logged, not raised.
    pub async fn get_exercise_progress(&self, exercise: &str) -> Vec<ProgressPoint> {
        match self.try_get_exercise_progress(exercise).await {
            Ok(series) => series,
            Err(err) => {
                warn!(exercise, %err, "progress read failed, returning empty series");
                Vec::new()
            }
        }
    }
}
