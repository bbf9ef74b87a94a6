// ABOUTME: Domain models for workout records, caller input, and query results
// ABOUTME: Serde-enabled types shared by the store, codec, and query services
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain models for the workout log.
//!
//! [`WorkoutEntry`] is what callers (UI or plan-generator ingestion) submit;
//! [`WorkoutRecord`] is the stored form with the capture instant and derived
//! one-rep-max attached at write time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics;

/// One workout set-group as submitted by a caller.
///
/// Field names follow the JSON payload shape shared with the UI and the
/// plan generator (`camelCase`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    /// Coarse muscle-group label (free text, e.g. "Chest")
    pub body_part: String,
    /// Exercise name; must be non-empty after trimming
    pub exercise: String,
    /// Weight lifted in kilograms; 0 for bodyweight work
    #[serde(default)]
    pub weight: f64,
    /// Repetitions per set
    #[serde(default)]
    pub reps: u32,
    /// Number of sets; defaults to 1 when absent
    #[serde(default)]
    pub sets: Option<f64>,
    /// Free-text note
    #[serde(default)]
    pub note: String,
}

impl WorkoutEntry {
    /// Set count with the default of 1 applied
    #[must_use]
    pub fn sets_or_default(&self) -> f64 {
        self.sets.filter(|s| *s > 0.0).unwrap_or(1.0)
    }
}

/// One stored workout record, immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Capture instant; one `append_entries` call stamps every record in
    /// the batch with the same instant
    pub timestamp: DateTime<Utc>,
    /// Coarse muscle-group label
    pub body_part: String,
    /// Exercise name
    pub exercise: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Repetitions per set
    pub reps: u32,
    /// Number of sets
    pub sets: f64,
    /// Epley-style estimated one-rep max, rounded to one decimal.
    /// Recomputed at write time; read-side consumers treat it as a cache.
    pub estimated_one_rep_max: f64,
    /// Free-text note
    pub note: String,
}

impl WorkoutRecord {
    /// Build a record from caller input, stamping the capture instant and
    /// deriving the estimated one-rep max.
    #[must_use]
    pub fn from_entry(entry: &WorkoutEntry, captured_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: captured_at,
            body_part: entry.body_part.clone(),
            exercise: entry.exercise.clone(),
            weight: entry.weight,
            reps: entry.reps,
            sets: entry.sets_or_default(),
            estimated_one_rep_max: metrics::estimate_one_rep_max(entry.weight, entry.reps),
            note: entry.note.clone(),
        }
    }

    /// Training volume for this record
    #[must_use]
    pub fn volume(&self) -> f64 {
        metrics::volume(self.weight, self.reps, self.sets)
    }
}

/// One point in a per-exercise progress series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    /// Normalized instant string (RFC 3339 when the stored timestamp was
    /// parseable, raw stored text otherwise)
    pub instant: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Repetitions per set
    pub reps: u32,
    /// Number of sets
    pub sets: f64,
    /// Estimated one-rep max, recomputed from the row's weight/reps
    pub one_rep_max: f64,
    /// Training volume, recomputed fresh as weight × reps × sets
    pub volume: f64,
}

/// One deduplicated (body part, exercise) pair observed in the log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Body-part label as first seen
    pub body_part: String,
    /// Exercise name as first seen
    pub exercise: String,
}
