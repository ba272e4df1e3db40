// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Webhook receipt types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body for POST /webhook/callback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookReceipt {
    /// `received` or `error`
    pub status: String,
    pub detail: String,
    /// Echo of the payload's `timestamp`, or `"not provided"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed: Option<bool>,
}

impl WebhookReceipt {
    /// Acknowledge a parsed payload
    pub fn received(payload: &Value) -> Self {
        let timestamp = payload
            .get("timestamp")
            .cloned()
            .unwrap_or_else(|| Value::String("not provided".to_string()));

        Self {
            status: "received".to_string(),
            detail: "Webhook processed successfully".to_string(),
            timestamp: Some(timestamp),
            processed: Some(true),
        }
    }

    /// Report a payload that could not be read
    pub fn error(reason: &str) -> Self {
        Self {
            status: "error".to_string(),
            detail: format!("Failed to process webhook: {}", reason),
            timestamp: None,
            processed: None,
        }
    }
}
