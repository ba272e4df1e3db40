// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Webhook receiver endpoint
//!
//! Provides `/webhook/callback`, which acknowledges any JSON it is sent.

pub mod handler;
pub mod response;

pub use handler::webhook_callback_handler;
pub use response::WebhookReceipt;
