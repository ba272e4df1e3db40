// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Run API endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::request::RunRequest;
use super::response::RunResponse;
use crate::api::auth::BearerAuth;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /hackrx/run - Answer questions about a document
///
/// # Request
/// - `documents`: URL of the document (required)
/// - `questions`: Questions to answer (required, non-empty)
/// - `webhook_url`: Optional URL that also receives the answers
///
/// # Response
/// - `answers`: One answer per question, same order. On timeout or an
///   internal failure, a single status message instead.
///
/// # Errors
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 400 Bad Request: Invalid body, or the document could not be fetched,
///   parsed, or held no text
pub async fn run_handler(
    _auth: BearerAuth,
    State(state): State<AppState>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> Result<Json<RunResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected run request body: {}", rejection.body_text());
        ApiError::InvalidRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let request_id = Uuid::new_v4();
    let span = info_span!("hackrx_run", %request_id);

    async move {
        info!(
            "Run request: {} questions for {}",
            request.questions.len(),
            request.documents
        );

        let result = state
            .pipeline
            .run(
                &request.documents,
                &request.questions,
                request.webhook_url.as_deref(),
            )
            .await;

        match result {
            Ok(answers) => Ok(Json(RunResponse::new(answers))),
            Err(e) if e.is_answer_shaped() => {
                warn!("Run degraded to status answer: {}", e);
                Ok(Json(RunResponse::single(e.to_string())))
            }
            Err(e) => {
                warn!("Run failed: {}", e);
                Err(ApiError::from(e))
            }
        }
    }
    .instrument(span)
    .await
}
