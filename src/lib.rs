// ABOUTME: Library entry point for the liftlog workout-log engine
// ABOUTME: Append-only record store with derived fitness metrics and plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # liftlog
//!
//! A personal workout-log store with derived fitness metrics and an
//! AI-assisted workout-plan generator.
//!
//! The log is an append-only collection of workout records over an
//! ordered-row backing table ([`table::RowTable`]). Writes go through
//! [`store::LogStore`], which stamps one capture instant per batch and
//! derives the estimated one-rep max; the read-side services
//! ([`services::HistoryService`], [`services::ProgressService`],
//! [`services::AggregationService`], [`services::CatalogService`]) each
//! scan the raw log independently and recompute their own view.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use liftlog::models::WorkoutEntry;
//! use liftlog::services::HistoryService;
//! use liftlog::store::LogStore;
//! use liftlog::table::memory::MemoryTable;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(LogStore::new(Arc::new(MemoryTable::new())));
//!     store
//!         .append_entries(&[WorkoutEntry {
//!             body_part: "Chest".into(),
//!             exercise: "Bench Press".into(),
//!             weight: 80.0,
//!             reps: 8,
//!             sets: Some(3.0),
//!             note: String::new(),
//!         }])
//!         .await?;
//!
//!     let history = HistoryService::new(store).get_history(None).await;
//!     println!("{} records", history.len());
//!     Ok(())
//! }
//! ```

/// Row codec between backing-table rows and workout records
pub mod codec;
/// Environment-driven application configuration
pub mod config;
/// Shared constants for sheet layout and timestamp formats
pub mod constants;
/// Structured error types
pub mod errors;
/// Logging configuration and subscriber setup
pub mod logging;
/// Derived fitness metric calculations
pub mod metrics;
/// Domain models
pub mod models;
/// Plan-generator collaborator and Gemini implementation
pub mod planner;
/// Read-side query services
pub mod services;
/// Append-only log store
pub mod store;
/// Backing-table abstraction and backends
pub mod table;

pub use errors::{AppError, AppResult};
pub use models::{CatalogEntry, ProgressPoint, WorkoutEntry, WorkoutRecord};
pub use store::LogStore;
