// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use tracing::{info, warn};

use super::response::{CompletionProbeReport, DebugResponse, DocumentProbeReport};
use crate::api::http_server::AppState;
use crate::document::DocumentFetcher;
use crate::llm::CompletionProvider;
use crate::utils::truncate_chars;
use crate::version::VERSION;

pub const PROBE_PROMPT: &str = "Test message - respond with 'API working'";

const RESPONSE_EXCERPT_CHARS: usize = 100;

/// GET /debug - Probe the completion API and the reference document URL
pub async fn debug_handler(State(state): State<AppState>) -> Json<DebugResponse> {
    let provider = state.pipeline.provider().as_ref();
    let (completion, document) = tokio::join!(
        probe_completion(provider),
        probe_document(state.pipeline.fetcher(), &state.config.debug_document_url),
    );

    let response = DebugResponse::from_reports(
        completion,
        document,
        chrono::Utc::now().to_rfc3339(),
        VERSION.to_string(),
    );
    info!("Debug probes finished: {}", response.status);

    Json(response)
}

/// Send a fixed prompt to the provider, skipping the call without a credential
pub async fn probe_completion(provider: &dyn CompletionProvider) -> CompletionProbeReport {
    let mut report = CompletionProbeReport {
        provider: provider.name().to_string(),
        api_key_present: provider.is_available(),
        api_key_length: provider.credential_len(),
        ok: false,
        response: None,
        error: None,
    };

    if !report.api_key_present {
        report.error = Some("GOOGLE_API_KEY not found in environment variables".to_string());
        return report;
    }

    match provider.complete(PROBE_PROMPT).await {
        Ok(text) => {
            let excerpt = if text.is_empty() {
                "No response".to_string()
            } else {
                truncate_chars(&text, RESPONSE_EXCERPT_CHARS).to_string()
            };
            report.ok = true;
            report.response = Some(excerpt);
        }
        Err(e) => {
            warn!("Completion probe failed: {}", e);
            report.error = Some(e.to_string());
        }
    }

    report
}

/// Fetch the reference document once and report status and size
pub async fn probe_document(fetcher: &DocumentFetcher, url: &str) -> DocumentProbeReport {
    match fetcher.probe(url).await {
        Ok(probe) => DocumentProbeReport {
            url: url.to_string(),
            ok: true,
            status: Some(probe.status),
            size_bytes: Some(probe.size_bytes),
            error: None,
        },
        Err(e) => {
            warn!("Document probe failed: {}", e);
            DocumentProbeReport {
                url: url.to_string(),
                ok: false,
                status: None,
                size_bytes: None,
                error: Some(e.to_string()),
            }
        }
    }
}
