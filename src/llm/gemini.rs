// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Gemini completion provider
//!
//! Calls the Generative Language `generateContent` REST endpoint with a
//! single user turn and returns the concatenated text parts of the first
//! candidate.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::config::GeminiConfig;
use super::provider::CompletionProvider;
use super::types::CompletionError;

/// Gemini API provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(config: GeminiConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CompletionError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key.trim(),
            _ => {
                return Err(CompletionError::NoApiKey {
                    provider: "gemini".to_string(),
                })
            }
        };

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!("Gemini request to {} ({} prompt chars)", self.config.model, prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        timeout_ms: self.config.timeout_secs * 1000,
                    }
                } else {
                    CompletionError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        data.first_text()
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_available(&self) -> bool {
        self.config.has_api_key()
    }

    fn credential_len(&self) -> usize {
        self.config.api_key.as_deref().map(str::len).unwrap_or(0)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Result<String, CompletionError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(CompletionError::InvalidResponse(format!(
                "prompt blocked: {}",
                reason
            )));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::InvalidResponse("no candidates returned".to_string()))?;

        Ok(candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default())
    }
}
