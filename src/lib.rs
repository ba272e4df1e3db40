// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod document;
pub mod llm;
pub mod notify;
pub mod pipeline;
pub mod utils;
pub mod version;

// Re-export main types
pub use api::{create_app, AppState, RunRequest, RunResponse};
pub use config::ServiceConfig;
pub use document::{DocumentConfig, DocumentFetcher};
pub use llm::{AnswerGenerator, CompletionProvider, GeminiProvider};
pub use notify::WebhookNotifier;
pub use pipeline::{PipelineError, QaPipeline};
