// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pipeline::PipelineError;

/// Error body, `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    Unauthorized(String),
    InvalidRequest(String),
    DocumentFetch(String),
    DocumentParse(String),
    EmptyDocument(String),
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            ApiError::Unauthorized(msg)
            | ApiError::InvalidRequest(msg)
            | ApiError::DocumentFetch(msg)
            | ApiError::DocumentParse(msg)
            | ApiError::EmptyDocument(msg)
            | ApiError::InternalError(msg) => msg.clone(),
        };

        ErrorResponse { detail }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthorized(_) => 401,
            ApiError::InvalidRequest(_)
            | ApiError::DocumentFetch(_)
            | ApiError::DocumentParse(_)
            | ApiError::EmptyDocument(_) => 400,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::DocumentFetch(msg) => write!(f, "{}", msg),
            ApiError::DocumentParse(msg) => write!(f, "{}", msg),
            ApiError::EmptyDocument(msg) => write!(f, "{}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        let detail = error.to_string();
        match error {
            PipelineError::Validation(_) => ApiError::InvalidRequest(detail),
            PipelineError::Fetch(_) => ApiError::DocumentFetch(detail),
            PipelineError::Extract(_) => ApiError::DocumentParse(detail),
            PipelineError::EmptyDocument => ApiError::EmptyDocument(detail),
            PipelineError::Timeout | PipelineError::Internal(_) => ApiError::InternalError(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self.to_response())).into_response();

        if matches!(self, ApiError::Unauthorized(_)) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}
