// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for answer generation

use thiserror::Error;

/// Errors raised by a completion provider
#[derive(Debug, Error)]
pub enum CompletionError {
    /// API error from the completion provider
    #[error("Completion API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Completion request timed out
    #[error("Completion timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Transport failure before a response was received
    #[error("Completion request failed: {0}")]
    Http(String),

    /// The response body did not have the expected shape
    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),

    /// No API key configured for the provider
    #[error("No API key configured for {provider}")]
    NoApiKey {
        /// Name of the provider missing API key
        provider: String,
    },
}

/// Why a single question did not get a usable answer
#[derive(Debug, Error)]
pub enum GenerationFailure {
    /// The provider credential is absent; no call was attempted
    #[error("GOOGLE_API_KEY not found in environment variables")]
    MissingCredential,

    /// The provider answered, but with too little text to be useful
    #[error("completion was empty or shorter than {min_chars} characters")]
    InsufficientOutput {
        /// Minimum accepted length after trimming
        min_chars: usize,
    },

    /// The provider call itself failed
    #[error(transparent)]
    Provider(#[from] CompletionError),
}

/// Outcome for one question, in question order
pub type AnswerResult = Result<String, GenerationFailure>;
