// ABOUTME: Unified error types for the workout-log engine
// ABOUTME: Structured failure kinds for storage, decoding, and upstream plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Handling
//!
//! One structured error type covers the whole crate. Mutation paths
//! (`append`, `delete_at`) surface these errors to the caller; read-side
//! services catch them at the service boundary and degrade to an empty
//! result (see the `services` module).

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Application error kinds
#[derive(Debug, Error)]
pub enum AppError {
    /// An append was requested with no records in it
    #[error("no workout data provided")]
    NoData,

    /// A positional operation referenced a row that does not exist
    #[error("log position {position} not found (store holds {available} rows)")]
    NotFound {
        /// The 1-based position the caller asked for
        position: u64,
        /// Number of data rows currently in the store
        available: u64,
    },

    /// A stored row could not be decoded into a workout record
    #[error("row decode failed: {reason}")]
    Decode {
        /// Why the row was rejected
        reason: String,
    },

    /// The backing table could not be read or written
    #[error("backing table unavailable: {0}")]
    StoreUnavailable(String),

    /// The plan-generator call failed or returned unparseable content
    #[error("plan generator failed: {0}")]
    Upstream(String),

    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Position out of range for a delete or lookup
    #[must_use]
    pub fn not_found(position: u64, available: u64) -> Self {
        Self::NotFound {
            position,
            available,
        }
    }

    /// Row-level decode failure (non-fatal; callers skip the row)
    #[must_use]
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// Backing-table read/write failure
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Plan-generator failure, opaque to the core
    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Configuration failure
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error is a per-row decode failure rather than a
    /// store-level fault
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}
