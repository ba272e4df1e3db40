// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for document retrieval and text extraction
//!
//! Defines the fetch timeout, the byte cap on downloads, and the character
//! cap on extracted text.

use std::env;

/// Browser-like User-Agent; some document hosts reject unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for document fetching and extraction
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Timeout for a document download in seconds (default: 20)
    pub fetch_timeout_secs: u64,
    /// Timeout for the diagnostics probe in seconds (default: 10)
    pub probe_timeout_secs: u64,
    /// Maximum bytes kept from a download (default: 10 MiB)
    pub max_document_bytes: usize,
    /// Maximum characters of extracted text (default: 100,000)
    pub max_text_chars: usize,
    /// User-Agent header sent with every download
    pub user_agent: String,
    /// Skip TLS certificate validation (default: false)
    pub accept_invalid_certs: bool,
}

impl DocumentConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fetch_timeout_secs: env::var("DOCUMENT_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
            probe_timeout_secs: defaults.probe_timeout_secs,
            max_document_bytes: env::var("DOCUMENT_MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_document_bytes),
            max_text_chars: env::var("DOCUMENT_MAX_TEXT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_text_chars),
            user_agent: defaults.user_agent,
            accept_invalid_certs: env::var("ALLOW_INSECURE_TLS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be at least 1".to_string());
        }
        if self.max_document_bytes == 0 {
            return Err("max_document_bytes must be greater than 0".to_string());
        }
        if self.max_text_chars == 0 {
            return Err("max_text_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 20,
            probe_timeout_secs: 10,
            max_document_bytes: 10 * 1024 * 1024,
            max_text_chars: 100_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }
}
