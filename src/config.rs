// ABOUTME: Environment-driven application configuration
// ABOUTME: Selects the table backend and carries planner and history settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-only configuration.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `LIFTLOG_DATABASE_URL` | SQLite URL for the durable table | `sqlite:liftlog.db` |
//! | `LIFTLOG_TABLE_BACKEND` | `sqlite` or `memory` | `sqlite` |
//! | `LIFTLOG_HISTORY_LIMIT` | default history cap | `300` |
//! | `GEMINI_API_KEY` | plan-generator key | unset (planner disabled) |

use std::env;

use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::errors::{AppError, AppResult};

/// Which backing-table implementation to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBackend {
    /// Durable SQLite table at the configured URL
    Sqlite {
        /// SQLite connection URL
        database_url: String,
    },
    /// Ephemeral in-memory table
    Memory,
}

/// Application configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backing-table selection
    pub backend: TableBackend,
    /// History cap applied when the caller passes no explicit limit
    pub history_limit: usize,
    /// Gemini API key; `None` leaves the plan generator unavailable
    pub gemini_api_key: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] for an unknown backend name or a
    /// non-numeric history limit.
    pub fn from_env() -> AppResult<Self> {
        let backend = match env::var("LIFTLOG_TABLE_BACKEND").as_deref() {
            Ok("memory") => TableBackend::Memory,
            Ok("sqlite") | Err(_) => TableBackend::Sqlite {
                database_url: env::var("LIFTLOG_DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:liftlog.db".to_owned()),
            },
            Ok(other) => {
                return Err(AppError::config(format!(
                    "unknown table backend '{other}' (expected 'sqlite' or 'memory')"
                )))
            }
        };

        let history_limit = match env::var("LIFTLOG_HISTORY_LIMIT") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::config(format!("LIFTLOG_HISTORY_LIMIT must be a number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_HISTORY_LIMIT,
        };

        Ok(Self {
            backend,
            history_limit,
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: TableBackend::Sqlite {
                database_url: "sqlite:liftlog.db".to_owned(),
            },
            history_limit: DEFAULT_HISTORY_LIMIT,
            gemini_api_key: None,
        }
    }
}
