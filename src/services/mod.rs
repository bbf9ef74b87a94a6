// ABOUTME: Read-side query services over the workout log
// ABOUTME: History, progress, aggregation, and catalog views recomputed from the raw log
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Query Services
//!
//! Each read-side service scans the store independently and applies its own
//! transformation; there is no shared derived index, so every read
//! recomputes from the raw log.
//!
//! All services follow the same failure policy: a fallible `try_*` core
//! returns `AppResult`, and the public method degrades to an empty result
//! on store failure, logging the cause. A failed read is therefore
//! indistinguishable from an empty log at the public surface; mutation
//! paths on [`crate::store::LogStore`] surface structured errors instead.

pub mod aggregation;
pub mod catalog;
pub mod history;
pub mod progress;

pub use aggregation::AggregationService;
pub use catalog::CatalogService;
pub use history::HistoryService;
pub use progress::ProgressService;
