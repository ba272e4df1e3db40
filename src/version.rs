// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the document QA node

/// Full version string with feature description
pub const VERSION: &str = "v3.0.0-direct-gemini-2025-07-28";

/// Semantic version number
pub const VERSION_NUMBER: &str = "3.0.0";

/// Build date
pub const BUILD_DATE: &str = "2025-07-28";

/// Service name reported by `/health`
pub const SERVICE_NAME: &str = "hackrx-pdf-qa-api";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "Direct Gemini API integration",
    "Optimized PDF processing",
    "High-accuracy question answering",
    "Platform-compatible responses",
    "Robust error handling",
];

/// Public endpoints advertised by `GET /`
pub const ENDPOINTS: &[&str] = &["/hackrx/run", "/webhook/callback", "/health", "/debug"];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("DocQA Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
