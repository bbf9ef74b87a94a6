// ABOUTME: Gemini-backed plan generator implementation
// ABOUTME: JSON-forced generation request with code-fence stripping and structured upstream errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Gemini Plan Generator
//!
//! Implementation of [`PlanGenerator`] against Google's Generative AI API.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with an API key from
//! Google AI Studio. The system instruction forces a bare JSON array so the
//! response parses without free-text cleanup beyond markdown code-fence
//! stripping.

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{ExerciseSuggestion, PlanGenerator, PlanRequest};
use crate::errors::{AppError, AppResult};

/// Environment variable for the Gemini API key
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for plan generation
const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// System instruction forcing a strict JSON-array response shape
const SYSTEM_INSTRUCTION: &str = r#"You are a professional strength trainer. Build the best workout plan for the user's constraints.
Respond with a JSON array only, no markdown fences and no commentary. Every element must contain all of these keys:
- bodyPart (string)
- exercise (string, must not be empty)
- weight (number, recommended kg)
- reps (number)
- sets (number)
- note (string, one-line coaching tip)
If an exercise name is uncertain, still emit a non-empty string."#;

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction")]
    system_instruction: GeminiContent,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Generator Implementation
// ============================================================================

/// Gemini-backed plan generator
pub struct GeminiPlanGenerator {
    api_key: String,
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiPlanGenerator {
    /// Create a generator with an explicit API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            base_url: API_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Create a generator from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when the variable is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV)
            .map_err(|_| AppError::config(format!("{GEMINI_API_KEY_ENV} is not set")))?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL, e.g. to target a local stub server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model name
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Render the user prompt from the request constraints
    #[must_use]
    pub fn build_prompt(request: &PlanRequest) -> String {
        let mut prompt = format!(
            "Session duration: {} minutes.\nTarget body parts: {}.\nAvailable equipment: {}.",
            request.duration_minutes,
            join_or_any(&request.target_body_parts),
            join_or_any(&request.equipment),
        );
        if let Some(metrics) = &request.body_metrics {
            prompt.push_str(&format!("\nBody weight: {} kg.", metrics.weight_kg));
            if let Some(height) = metrics.height_cm {
                prompt.push_str(&format!(" Height: {height} cm."));
            }
        }
        if !request.preference.trim().is_empty() {
            prompt.push_str(&format!("\nPreference: {}", request.preference.trim()));
        }
        prompt
    }

    /// Strip markdown code fences the model sometimes wraps JSON in
    fn strip_fences(text: &str) -> &str {
        text.trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim()
    }

    /// Parse a response body into suggestions
    ///
    /// # Errors
    /// Returns [`AppError::Upstream`] when the payload is not the expected
    /// JSON array.
    pub fn parse_suggestions(text: &str) -> AppResult<Vec<ExerciseSuggestion>> {
        let cleaned = Self::strip_fences(text);
        serde_json::from_str(cleaned)
            .map_err(|e| AppError::upstream(format!("unparseable plan payload: {e}")))
    }
}

#[async_trait]
impl PlanGenerator for GeminiPlanGenerator {
    async fn generate_plan(&self, request: &PlanRequest) -> AppResult<Vec<ExerciseSuggestion>> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![ContentPart {
                    text: Self::build_prompt(request),
                }],
            }],
            system_instruction: GeminiContent {
                parts: vec![ContentPart {
                    text: SYSTEM_INSTRUCTION.to_owned(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: 0.7,
                response_mime_type: "application/json",
            },
        };

        debug!(model = %self.model, "requesting workout plan");

        let response = self
            .client
            .post(self.build_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::upstream(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            error!(status = %status, "plan generator API error");
            return Err(AppError::upstream(format!(
                "plan generator returned HTTP {status}"
            )));
        }

        let parsed: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| AppError::upstream(format!("unparseable API envelope: {e}")))?;

        if let Some(err) = parsed.error {
            return Err(AppError::upstream(err.message));
        }

        let text = parsed
            .candidates
            .and_then(|mut c| c.drain(..).next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AppError::upstream("response carried no candidate content"))?;

        Self::parse_suggestions(&text)
    }
}

fn join_or_any(items: &[String]) -> String {
    if items.is_empty() {
        "any".to_owned()
    } else {
        items.join(", ")
    }
}
