// ABOUTME: Plan-generator collaborator contract and suggestion sanitation
// ABOUTME: Treats AI-produced workout suggestions as untrusted external input
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Generator
//!
//! The plan generator is an opaque external collaborator: given
//! user-supplied constraints it returns a list of exercise suggestions, or
//! a human-readable failure. The core never inspects plan quality; it only
//! sanitizes the suggestions like any other untrusted append input before
//! they reach the log store.

pub mod gemini;

pub use gemini::GeminiPlanGenerator;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppResult;
use crate::models::WorkoutEntry;

/// User-supplied constraints for plan generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Session duration in minutes
    pub duration_minutes: u32,
    /// Body parts the session should target
    pub target_body_parts: Vec<String>,
    /// Equipment available to the user
    pub equipment: Vec<String>,
    /// Optional body metrics to calibrate suggested weights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_metrics: Option<BodyMetrics>,
    /// Free-text preference from the user
    #[serde(default)]
    pub preference: String,
}

/// Optional body metrics attached to a plan request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

/// One exercise suggestion as produced by a generator, before sanitation.
///
/// Field names match the JSON the generator is instructed to emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSuggestion {
    /// Body-part label for the suggestion
    #[serde(default)]
    pub body_part: String,
    /// Suggested exercise name
    #[serde(default)]
    pub exercise: String,
    /// Suggested weight in kilograms
    #[serde(default)]
    pub weight: f64,
    /// Suggested repetitions per set
    #[serde(default)]
    pub reps: f64,
    /// Suggested set count
    #[serde(default)]
    pub sets: f64,
    /// One-line advice note
    #[serde(default)]
    pub note: String,
}

/// Opaque plan-generation collaborator
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generate exercise suggestions for the given constraints.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::Upstream`] when the call fails or
    /// the response cannot be parsed.
    async fn generate_plan(&self, request: &PlanRequest) -> AppResult<Vec<ExerciseSuggestion>>;
}

/// Validate and coerce generator output into appendable entries.
///
/// Suggestions with an empty exercise name (after trimming) are dropped
/// with a warning; numeric fields are clamped to non-negative values and a
/// missing or non-positive set count defaults to 1 — the same rules any
/// other append path gets.
#[must_use]
pub fn sanitize_suggestions(suggestions: Vec<ExerciseSuggestion>) -> Vec<WorkoutEntry> {
    suggestions
        .into_iter()
        .filter_map(|s| {
            let exercise = s.exercise.trim();
            if exercise.is_empty() {
                warn!("dropping suggestion with empty exercise name");
                return None;
            }
            Some(WorkoutEntry {
                body_part: s.body_part.trim().to_owned(),
                exercise: exercise.to_owned(),
                weight: s.weight.max(0.0),
                reps: s.reps.max(0.0) as u32,
                sets: (s.sets > 0.0).then_some(s.sets),
                note: s.note,
            })
        })
        .collect()
}
