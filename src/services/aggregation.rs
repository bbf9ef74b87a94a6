// ABOUTME: Set-volume aggregation grouped by body part
// ABOUTME: Sums logged set counts with unparseable counts defaulting to 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Total logged sets per body part.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::errors::AppResult;
use crate::store::LogStore;

/// Body-part set-total aggregation
pub struct AggregationService {
    store: Arc<LogStore>,
}

impl AggregationService {
    /// Create an aggregation service over the given store
    #[must_use]
    pub fn new(store: Arc<LogStore>) -> Self {
        Self { store }
    }

    /// Fallible core: sum of `sets` grouped by body-part label. Decode
    /// already defaults a missing or non-numeric set count to 1, so every
    /// surviving record contributes at least one set.
    ///
    /// # Errors
    /// `StoreUnavailable` when the backing table cannot be read.
    pub async fn try_get_body_part_set_totals(&self) -> AppResult<HashMap<String, f64>> {
        let records = self.store.scan_all().await?;
        let mut totals: HashMap<String, f64> = HashMap::new();
        for (_, record) in records {
            *totals.entry(record.body_part).or_insert(0.0) += record.sets;
        }
        Ok(totals)
    }

    /// Set totals per body part. Degrades to an empty mapping on store
    /// failure; the cause is logged, not raised.
    pub async fn get_body_part_set_totals(&self) -> HashMap<String, f64> {
        match self.try_get_body_part_set_totals().await {
            Ok(totals) => totals,
            Err(err) => {
                warn!(%err, "aggregation read failed, returning empty totals");
                HashMap::new()
            }
        }
    }
}
