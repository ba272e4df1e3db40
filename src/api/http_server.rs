// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::diagnostics::debug_handler;
use super::handlers::{health_handler, root_handler};
use super::run::run_handler;
use super::webhook::webhook_callback_handler;
use crate::config::ServiceConfig;
use crate::llm::{CompletionProvider, GeminiProvider};
use crate::pipeline::QaPipeline;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub pipeline: Arc<QaPipeline>,
}

impl AppState {
    /// Build state with an explicit completion provider
    pub fn new(config: ServiceConfig, provider: Arc<dyn CompletionProvider>) -> Result<Self> {
        let pipeline = QaPipeline::new(&config, provider)?;
        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        })
    }

    /// Build state backed by the Gemini API
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        let provider =
            GeminiProvider::new(config.gemini.clone()).context("Failed to create Gemini provider")?;
        Self::new(config, Arc::new(provider))
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Service metadata
        .route("/", get(root_handler))
        // Health check
        .route("/health", get(health_handler))
        // Diagnostics probes
        .route("/debug", get(debug_handler))
        // Question answering
        .route("/hackrx/run", post(run_handler))
        // Webhook receiver
        .route("/webhook/callback", post(webhook_callback_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(state: AppState) -> Result<()> {
    let addr = state
        .config
        .listen_addr()
        .parse::<SocketAddr>()
        .context("Invalid listen address")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("⏹️  Shutdown signal received");
    }
}
