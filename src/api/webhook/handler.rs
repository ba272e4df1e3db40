// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Webhook receiver handler

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;
use tracing::{info, warn};

use super::response::WebhookReceipt;

/// POST /webhook/callback - Acknowledge an arbitrary JSON payload
///
/// Always answers 200; unreadable bodies get an `error` receipt.
pub async fn webhook_callback_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Json<WebhookReceipt> {
    match payload {
        Ok(Json(data)) => {
            info!(
                "Webhook received: {}",
                serde_json::to_string_pretty(&data).unwrap_or_default()
            );
            Json(WebhookReceipt::received(&data))
        }
        Err(rejection) => {
            warn!("Unreadable webhook payload: {}", rejection.body_text());
            Json(WebhookReceipt::error(&rejection.body_text()))
        }
    }
}
