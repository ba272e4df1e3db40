// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared helpers: stub completion providers and throwaway local servers

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use docqa_node::{
    api::http_server::{create_app, AppState},
    config::ServiceConfig,
    llm::{CompletionError, CompletionProvider},
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tower::util::ServiceExt; // for `oneshot`

#[path = "../../src/document/sample.rs"]
pub mod pdf;

pub use pdf::build_pdf;

pub const API_KEY: &str = "hackrx-api-key-2025";

type Reply = Box<dyn Fn(&str) -> Result<String, CompletionError> + Send + Sync>;

/// Completion provider driven by a closure over the prompt
pub struct StubProvider {
    reply: Reply,
    available: bool,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new<F>(reply: F) -> Self
    where
        F: Fn(&str) -> Result<String, CompletionError> + Send + Sync + 'static,
    {
        Self {
            reply: Box::new(reply),
            available: true,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer every prompt with the same text
    pub fn fixed(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| Ok(text.clone()))
    }

    pub fn without_credential(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        (self.reply)(prompt)
    }

    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn credential_len(&self) -> usize {
        if self.available {
            16
        } else {
            0
        }
    }
}

/// Config with library defaults, untouched by the environment
pub fn test_config() -> ServiceConfig {
    ServiceConfig::default()
}

pub fn build_app(config: ServiceConfig, provider: Arc<StubProvider>) -> Router {
    let state = AppState::new(config, provider).expect("Failed to build app state");
    create_app(state)
}

/// Send one request through the router and decode the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

pub fn run_request(token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/hackrx/run")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Serve a router on an ephemeral local port
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Serve fixed bytes at `/policy.pdf` and a 404 at `/missing.pdf`
pub async fn serve_bytes(bytes: Vec<u8>) -> SocketAddr {
    let router = Router::new()
        .route(
            "/policy.pdf",
            get(move || {
                let body = bytes.clone();
                async move { body }
            }),
        )
        .route("/missing.pdf", get(|| async { StatusCode::NOT_FOUND }));
    serve(router).await
}

/// Serve a generated PDF with one page per entry, returning its URL
pub async fn serve_pdf(pages: &[&str]) -> String {
    let bytes = build_pdf(pages).expect("Failed to build test PDF");
    format!("http://{}/policy.pdf", serve_bytes(bytes).await)
}

/// Local endpoint that forwards every JSON body it receives
pub async fn webhook_sink() -> (String, mpsc::Receiver<Value>) {
    let (tx, rx) = mpsc::channel(8);
    let router = Router::new()
        .route(
            "/hook",
            post(
                |State(tx): State<mpsc::Sender<Value>>, Json(body): Json<Value>| async move {
                    let _ = tx.send(body).await;
                    StatusCode::OK
                },
            ),
        )
        .with_state(tx);
    let addr = serve(router).await;
    (format!("http://{}/hook", addr), rx)
}

/// A URL nothing listens on
pub fn unreachable_url() -> String {
    "http://127.0.0.1:9/policy.pdf".to_string()
}
