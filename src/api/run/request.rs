// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Run API request types

use serde::{Deserialize, Serialize};

use crate::pipeline::validate_inputs;

/// Request body for POST /hackrx/run
///
/// Missing `documents`/`questions` deserialize as empty so `validate`
/// reports them with a 400 instead of a JSON rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    /// URL of the document to read
    #[serde(default)]
    pub documents: String,

    /// Questions to answer, in order
    #[serde(default)]
    pub questions: Vec<String>,

    /// Optional URL that receives the answers once ready
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl RunRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        validate_inputs(&self.documents, &self.questions)
    }
}
