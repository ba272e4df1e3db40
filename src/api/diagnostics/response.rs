// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

pub const DEBUG_SUCCESS: &str = "debug_success";
pub const DEBUG_FAILED: &str = "debug_failed";

/// Outcome of the completion API probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionProbeReport {
    pub provider: String,
    pub api_key_present: bool,
    pub api_key_length: usize,
    pub ok: bool,
    /// First 100 characters of the reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of the document URL probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentProbeReport {
    pub url: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugResponse {
    pub status: String,
    pub completion: CompletionProbeReport,
    pub document: DocumentProbeReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub timestamp: String,
    pub version: String,
}

impl DebugResponse {
    pub fn from_reports(
        completion: CompletionProbeReport,
        document: DocumentProbeReport,
        timestamp: String,
        version: String,
    ) -> Self {
        let (status, suggestion) = if completion.ok && document.ok {
            (DEBUG_SUCCESS, None)
        } else {
            (DEBUG_FAILED, Some(suggestion_for(&completion, &document)))
        };

        Self {
            status: status.to_string(),
            completion,
            document,
            suggestion,
            timestamp,
            version,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == DEBUG_SUCCESS
    }
}

fn suggestion_for(completion: &CompletionProbeReport, document: &DocumentProbeReport) -> String {
    if !completion.api_key_present {
        "Set GOOGLE_API_KEY in the environment".to_string()
    } else if !completion.ok {
        "Check GOOGLE_API_KEY and network access to the Gemini API".to_string()
    } else {
        format!("Check network access to {}", document.url)
    }
}
