// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the completion provider and prompt construction

use std::env;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Gemini API configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Google API key (`GOOGLE_API_KEY`)
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-1.5-flash`
    pub model: String,
    /// Base URL of the Generative Language API
    pub api_base: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GOOGLE_API_KEY").ok(),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }

    /// Check if a non-empty API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: 20,
        }
    }
}

/// Prompt construction limits
///
/// `prompt_char_limit` is deliberately separate from the extractor's
/// `max_text_chars`; only this prefix of the document reaches the model.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Characters of document text included in each prompt (default: 15,000)
    pub prompt_char_limit: usize,
    /// Answers must be longer than this after trimming (default: 10)
    pub min_answer_chars: usize,
}

impl GenerationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            prompt_char_limit: env::var("PROMPT_CHAR_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15_000),
            min_answer_chars: 10,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt_char_limit == 0 {
            return Err("prompt_char_limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            prompt_char_limit: 15_000,
            min_answer_chars: 10,
        }
    }
}
