// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request pipeline for `/hackrx/run`
//!
//! ```text
//! Received → Validating → Fetching → Extracting → Generating → Completed
//!                 ↓            ↓           ↓                      ↓
//!            Validation      Fetch    Extract/Empty        webhook (detached)
//!
//! Fetching..Generating bounded by one deadline → Timeout
//! ```

pub mod errors;
pub mod orchestrator;

pub use errors::{PipelineError, Stage, TIMEOUT_ANSWER};
pub use orchestrator::{into_answers, placeholder, validate_inputs, QaPipeline, INSUFFICIENT_ANSWER};
