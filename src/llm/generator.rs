// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-question answer generation
//!
//! Questions are answered one at a time, in order, with a single provider
//! call each. Failures stay in their own slot as `GenerationFailure`.

use std::sync::Arc;
use tracing::{debug, warn};

use super::config::GenerationConfig;
use super::provider::CompletionProvider;
use super::types::{AnswerResult, GenerationFailure};
use crate::utils::truncate_chars;

const PROMPT_PREAMBLE: &str = "You are an expert document analyst. Based on the following document, answer the question with specific details.";

const PROMPT_INSTRUCTIONS: &str = "INSTRUCTIONS:
- Provide a detailed, accurate answer based ONLY on the document content
- Include specific numbers, timeframes, conditions, and clauses
- Use the terminology of the document
- If information is not found in the document, state that clearly
- Be comprehensive but concise";

/// Builds prompts and drives the completion provider
pub struct AnswerGenerator {
    provider: Arc<dyn CompletionProvider>,
    config: GenerationConfig,
}

impl AnswerGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: GenerationConfig) -> Self {
        Self { provider, config }
    }

    /// Answer every question against `document_text`
    ///
    /// Always returns exactly `questions.len()` results, index-aligned with
    /// the input.
    pub async fn generate(&self, document_text: &str, questions: &[String]) -> Vec<AnswerResult> {
        if !self.provider.is_available() {
            warn!(
                "{} provider has no credential, failing {} questions",
                self.provider.name(),
                questions.len()
            );
            return questions
                .iter()
                .map(|_| Err(GenerationFailure::MissingCredential))
                .collect();
        }

        let mut answers = Vec::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            debug!("Generating answer {}/{}", index + 1, questions.len());
            answers.push(self.answer_one(document_text, question).await);
        }
        answers
    }

    async fn answer_one(&self, document_text: &str, question: &str) -> AnswerResult {
        let prompt = self.build_prompt(document_text, question);
        let reply = self.provider.complete(&prompt).await?;

        let trimmed = reply.trim();
        if trimmed.chars().count() > self.config.min_answer_chars {
            Ok(trimmed.to_string())
        } else {
            Err(GenerationFailure::InsufficientOutput {
                min_chars: self.config.min_answer_chars,
            })
        }
    }

    /// Assemble the fixed preamble, the truncated document and the question
    pub fn build_prompt(&self, document_text: &str, question: &str) -> String {
        let excerpt = truncate_chars(document_text, self.config.prompt_char_limit);
        format!(
            "\n{}\n\nDOCUMENT:\n{}\n\nQUESTION: {}\n\n{}\n\nANSWER:",
            PROMPT_PREAMBLE, excerpt, question, PROMPT_INSTRUCTIONS
        )
    }

    /// Get the underlying provider
    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        &self.provider
    }
}
