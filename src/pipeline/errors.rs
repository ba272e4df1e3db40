// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pipeline stages and terminal failures

use std::fmt;
use thiserror::Error;

use crate::document::{ExtractError, FetchError};

/// Answer shown when the overall deadline expires
pub const TIMEOUT_ANSWER: &str = "Request timeout - unable to process questions within time limit";

/// Stage a request is in, used for log context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    Validating,
    Fetching,
    Extracting,
    Generating,
    Completed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Received => "received",
            Stage::Validating => "validating",
            Stage::Fetching => "fetching",
            Stage::Extracting => "extracting",
            Stage::Generating => "generating",
            Stage::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Ways a request can end without a full answer set
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Request body failed validation; no network call was made
    #[error("{0}")]
    Validation(String),

    #[error("Document fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Document parse error: {0}")]
    Extract(#[from] ExtractError),

    /// The document parsed but held no text
    #[error("No text content found in document")]
    EmptyDocument,

    /// Fetch + extract + generate ran past the overall deadline
    #[error("{}", TIMEOUT_ANSWER)]
    Timeout,

    /// Unexpected failure inside the pipeline (e.g. a panicked worker)
    #[error("Processing error occurred: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Failures that are reported as a one-element answer list, not an HTTP error
    pub fn is_answer_shaped(&self) -> bool {
        matches!(self, PipelineError::Timeout | PipelineError::Internal(_))
    }
}
