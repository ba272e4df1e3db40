// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Run API response types

use serde::{Deserialize, Serialize};

/// Response body for POST /hackrx/run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunResponse {
    /// One answer per question, or a single status message
    pub answers: Vec<String>,
}

impl RunResponse {
    pub fn new(answers: Vec<String>) -> Self {
        Self { answers }
    }

    /// A one-element answer list carrying a status message
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            answers: vec![message.into()],
        }
    }
}
