// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Answer generation against an external completion API
//!
//! ```text
//! (document text, questions) → AnswerGenerator → CompletionProvider (Gemini) → Vec<AnswerResult>
//! ```

pub mod config;
pub mod gemini;
pub mod generator;
pub mod provider;
pub mod types;

pub use config::{GeminiConfig, GenerationConfig};
pub use gemini::GeminiProvider;
pub use generator::AnswerGenerator;
pub use provider::CompletionProvider;
pub use types::{AnswerResult, CompletionError, GenerationFailure};
