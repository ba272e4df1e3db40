// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request orchestration: validate → fetch → extract → generate
//!
//! The fetch/extract/generate sequence runs under one deadline. Generation
//! failures are flattened into placeholder strings here and nowhere else.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::errors::{PipelineError, Stage};
use crate::config::ServiceConfig;
use crate::document::{extract_prefix_text, extract_text, DocumentFetcher};
use crate::llm::{AnswerGenerator, AnswerResult, CompletionProvider, GenerationFailure};
use crate::notify::WebhookNotifier;
use crate::utils::char_count;

pub const INSUFFICIENT_ANSWER: &str = "Unable to generate a proper answer from the document content";

/// The document question-answering pipeline
pub struct QaPipeline {
    fetcher: DocumentFetcher,
    generator: AnswerGenerator,
    notifier: Arc<WebhookNotifier>,
    max_text_chars: usize,
    request_timeout: Duration,
}

impl QaPipeline {
    /// Build the pipeline from configuration and a completion provider
    pub fn new(config: &ServiceConfig, provider: Arc<dyn CompletionProvider>) -> Result<Self> {
        let fetcher = DocumentFetcher::new(config.document.clone())
            .context("Failed to create document fetcher")?;
        let notifier = WebhookNotifier::new(config.webhook_timeout)
            .context("Failed to create webhook notifier")?;

        Ok(Self {
            fetcher,
            generator: AnswerGenerator::new(provider, config.generation.clone()),
            notifier: Arc::new(notifier),
            max_text_chars: config.document.max_text_chars,
            request_timeout: config.request_timeout,
        })
    }

    /// Run one request to completion
    ///
    /// On success the answer list has one entry per question. A non-blank
    /// `webhook_url` receives the same list from a detached task.
    pub async fn run(
        &self,
        documents: &str,
        questions: &[String],
        webhook_url: Option<&str>,
    ) -> Result<Vec<String>, PipelineError> {
        debug!(stage = %Stage::Received, "questions={}", questions.len());

        debug!(stage = %Stage::Validating, "validating request");
        validate_inputs(documents, questions).map_err(PipelineError::Validation)?;

        let started = Instant::now();
        let answers = match timeout(self.request_timeout, self.process(documents, questions)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    "Pipeline exceeded {}s deadline, abandoning in-flight work",
                    self.request_timeout.as_secs_f32()
                );
                return Err(PipelineError::Timeout);
            }
        };

        info!(
            stage = %Stage::Completed,
            "Answered {} questions in {}ms",
            answers.len(),
            started.elapsed().as_millis()
        );

        if let Some(url) = webhook_url.filter(|u| !u.trim().is_empty()) {
            self.notifier.dispatch(url.to_string(), answers.clone());
        }

        Ok(answers)
    }

    async fn process(&self, documents: &str, questions: &[String]) -> Result<Vec<String>, PipelineError> {
        debug!(stage = %Stage::Fetching, "url={}", documents);
        let fetched = self.fetcher.fetch(documents).await?;

        debug!(
            stage = %Stage::Extracting,
            "bytes={} truncated={}",
            fetched.bytes.len(),
            fetched.truncated
        );
        let max_chars = self.max_text_chars;
        let document = tokio::task::spawn_blocking(move || {
            if fetched.truncated {
                extract_prefix_text(&fetched.bytes, max_chars)
            } else {
                extract_text(&fetched.bytes, max_chars)
            }
        })
        .await
        .map_err(|e| PipelineError::Internal(e.to_string()))??;

        if document.is_blank() {
            return Err(PipelineError::EmptyDocument);
        }
        info!(
            "Extracted {} chars from {}/{} pages",
            char_count(&document.text),
            document.pages_read,
            document.page_count
        );

        debug!(stage = %Stage::Generating, "questions={}", questions.len());
        let results = self.generator.generate(&document.text, questions).await;
        Ok(into_answers(results))
    }

    /// Get the completion provider
    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        self.generator.provider()
    }

    /// Get the document fetcher
    pub fn fetcher(&self) -> &DocumentFetcher {
        &self.fetcher
    }
}

/// Check the document URL and question list before any work starts
pub fn validate_inputs(documents: &str, questions: &[String]) -> Result<(), String> {
    if documents.trim().is_empty() {
        return Err("Documents URL is required".to_string());
    }
    if questions.is_empty() {
        return Err("At least one question is required".to_string());
    }
    Ok(())
}

/// Flatten per-question results into the response shape, logging failures
pub fn into_answers(results: Vec<AnswerResult>) -> Vec<String> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(answer) => answer,
            Err(failure) => {
                warn!("Question {} degraded to placeholder: {}", index, failure);
                placeholder(&failure)
            }
        })
        .collect()
}

/// Placeholder text for a failed question
pub fn placeholder(failure: &GenerationFailure) -> String {
    match failure {
        GenerationFailure::MissingCredential => {
            format!("Gemini API processing error: {}", failure)
        }
        GenerationFailure::InsufficientOutput { .. } => INSUFFICIENT_ANSWER.to_string(),
        GenerationFailure::Provider(e) => {
            format!("Unable to process this specific question: {}", e)
        }
    }
}
