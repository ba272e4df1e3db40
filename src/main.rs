// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use docqa_node::{
    api::{start_server, AppState},
    cli::Cli,
    config::ServiceConfig,
};
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("🚀 Starting {}", docqa_node::version::get_version_string());

    let mut config = ServiceConfig::from_env();
    cli.apply(&mut config);
    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    if config.document.accept_invalid_certs {
        warn!("⚠️  TLS certificate verification disabled for document downloads");
    }
    if !config.gemini.has_api_key() {
        warn!("⚠️  GOOGLE_API_KEY not set, every answer will report a Gemini processing error");
    }

    info!(
        "Model: {}, request timeout: {}s, document cap: {} bytes, text cap: {} chars",
        config.gemini.model,
        config.request_timeout.as_secs(),
        config.document.max_document_bytes,
        config.document.max_text_chars
    );

    let state = AppState::from_config(config)?;
    start_server(state).await?;

    info!("✅ Server stopped");
    Ok(())
}
