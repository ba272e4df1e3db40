// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::version::{ENDPOINTS, FEATURES, SERVICE_NAME, VERSION_NUMBER};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub features: Vec<String>,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub format: String,
}

/// GET / - static service metadata
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Enhanced Hackathon PDF QA API is running".to_string(),
        version: VERSION_NUMBER.to_string(),
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// GET /health - liveness
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        format: "platform-compatible".to_string(),
    })
}
