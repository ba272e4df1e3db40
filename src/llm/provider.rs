// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Completion provider trait definition

use async_trait::async_trait;

use super::types::CompletionError;

/// Trait for implementing text completion providers
///
/// A provider turns one prompt into one free-text completion. Callers make
/// exactly one attempt per prompt.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for `prompt`
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Check if the provider is usable (has a non-empty API key, etc.)
    fn is_available(&self) -> bool;

    /// Length of the configured credential, reported by diagnostics
    fn credential_len(&self) -> usize {
        0
    }
}
