// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bearer token gate for protected endpoints
//!
//! A single shared secret guards every protected route. Add `BearerAuth` as
//! the first handler argument so the check runs before the body is read.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::warn;

use super::errors::ApiError;
use super::http_server::AppState;

/// Proof that the request carried the configured bearer token
#[derive(Debug, Clone, Copy)]
pub struct BearerAuth;

/// Extract the credential from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Compare a presented credential with the configured secret
pub fn verify_token(token: &str, expected: &str) -> Result<(), ApiError> {
    if token == expected {
        Ok(())
    } else {
        Err(ApiError::Unauthorized(
            "Invalid authentication credentials".to_string(),
        ))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for BearerAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            warn!("Rejected request to {} without bearer token", parts.uri.path());
            ApiError::Unauthorized("Not authenticated".to_string())
        })?;

        verify_token(token, &state.config.api_key).map_err(|e| {
            warn!("Rejected request to {} with invalid token", parts.uri.path());
            e
        })?;

        Ok(BearerAuth)
    }
}
