// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Best-effort webhook delivery of finished answer sets

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use url::Url;

/// Body posted to the caller-supplied webhook URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookPayload {
    pub answers: Vec<String>,
}

/// Webhook delivery error types
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Invalid webhook URL '{0}'")]
    InvalidUrl(String),

    #[error("Webhook request failed: {0}")]
    Http(String),

    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// Posts answer sets to webhook URLs
pub struct WebhookNotifier {
    client: Client,
}

impl WebhookNotifier {
    pub fn new(timeout: Duration) -> Result<Self, WebhookError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WebhookError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// POST `{"answers": [...]}` to `url` once
    pub async fn deliver(&self, url: &str, payload: &WebhookPayload) -> Result<(), WebhookError> {
        let parsed = Url::parse(url).map_err(|_| WebhookError::InvalidUrl(url.to_string()))?;
        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(WebhookError::InvalidUrl(url.to_string()));
        }

        let response = self
            .client
            .post(parsed)
            .json(payload)
            .send()
            .await
            .map_err(|e| WebhookError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }

    /// Deliver in a detached task; failures are logged and dropped
    pub fn dispatch(self: &Arc<Self>, url: String, answers: Vec<String>) -> JoinHandle<()> {
        let notifier = Arc::clone(self);
        tokio::spawn(async move {
            let payload = WebhookPayload { answers };
            match notifier.deliver(&url, &payload).await {
                Ok(()) => info!("Webhook delivered to {}", url),
                Err(e) => warn!("Webhook delivery failed for {}: {}", url, e),
            }
        })
    }
}
