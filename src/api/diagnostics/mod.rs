// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Diagnostics endpoint
//!
//! `/debug` checks that the completion API and a known document URL are both
//! reachable. Each probe runs once per call; neither touches the run pipeline.

pub mod handler;
pub mod response;

pub use handler::{debug_handler, probe_completion, probe_document, PROBE_PROMPT};
pub use response::{CompletionProbeReport, DebugResponse, DocumentProbeReport};
