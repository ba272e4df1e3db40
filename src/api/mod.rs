// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod auth;
pub mod diagnostics;
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod run;
pub mod webhook;

pub use auth::{bearer_token, verify_token, BearerAuth};
pub use diagnostics::{debug_handler, DebugResponse};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{health_handler, root_handler, HealthResponse, RootResponse};
pub use http_server::{create_app, start_server, AppState};
pub use run::{run_handler, RunRequest, RunResponse};
pub use webhook::{webhook_callback_handler, WebhookReceipt};
