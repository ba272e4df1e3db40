// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP document fetching with a timeout and a hard size cap
//!
//! Downloads the raw bytes behind a document URL. Bodies larger than the
//! configured cap are truncated rather than rejected.

use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::config::DocumentConfig;

/// Document fetch error types
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed or uses an unsupported scheme
    #[error("Invalid document URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),

    /// Transport-level failure (DNS, connect, TLS)
    #[error("HTTP error: {0}")]
    Http(String),

    /// HTTP non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    /// The body stream failed part way through
    #[error("Error while reading document body: {0}")]
    Stream(String),

    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else {
            FetchError::Http(e.to_string())
        }
    }
}

/// Result of a diagnostics probe against a document URL
#[derive(Debug, Clone)]
pub struct DocumentProbe {
    /// HTTP status code returned by the host
    pub status: u16,
    /// Body size in bytes (capped at `max_document_bytes`)
    pub size_bytes: usize,
}

/// Body of a fetched document
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// At most `max_document_bytes` bytes of the body
    pub bytes: Bytes,
    /// The body ran past the cap and `bytes` is only its prefix
    pub truncated: bool,
}

/// Streaming document fetcher
pub struct DocumentFetcher {
    client: Client,
    config: DocumentConfig,
}

impl DocumentFetcher {
    /// Create a new document fetcher
    pub fn new(config: DocumentConfig) -> Result<Self, FetchError> {
        if config.accept_invalid_certs {
            warn!("⚠️  TLS certificate validation is DISABLED for document downloads");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Download a document, keeping at most `max_document_bytes` bytes
    pub async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError> {
        Self::parse_url(url)?;

        debug!("Fetching document from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let (bytes, truncated) = self.read_capped(url, response).await?;
        if truncated {
            warn!(
                "Document exceeded {} bytes, keeping truncated prefix: {}",
                self.config.max_document_bytes, url
            );
        }

        info!("Fetched {} bytes from: {}", bytes.len(), url);
        Ok(FetchedDocument { bytes, truncated })
    }

    /// Issue a GET without failing on the status code
    ///
    /// Used by the `/debug` endpoint to report reachability.
    pub async fn probe(&self, url: &str) -> Result<DocumentProbe, FetchError> {
        Self::parse_url(url)?;

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.probe_timeout_secs))
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status().as_u16();
        let (body, _) = self.read_capped(url, response).await?;

        Ok(DocumentProbe {
            status,
            size_bytes: body.len(),
        })
    }

    /// Accumulate body chunks until the stream ends or the cap is passed
    async fn read_capped(&self, url: &str, response: Response) -> Result<(Bytes, bool), FetchError> {
        let cap = self.config.max_document_bytes;
        let mut buffer = BytesMut::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(url.to_string())
                } else {
                    FetchError::Stream(e.to_string())
                }
            })?;
            buffer.extend_from_slice(&chunk);
            if buffer.len() > cap {
                buffer.truncate(cap);
                return Ok((buffer.freeze(), true));
            }
        }

        Ok((buffer.freeze(), false))
    }

    /// Check the URL is well formed and uses http or https
    pub fn parse_url(url: &str) -> Result<Url, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(parsed)
    }

    /// Get the configuration
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }
}
