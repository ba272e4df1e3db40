// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Document retrieval and text extraction
//!
//! ## Architecture
//!
//! ```text
//! Document URL → DocumentFetcher → bytes (≤ 10 MiB) → extract_text → text (≤ 100k chars)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let config = DocumentConfig::from_env();
//! let fetcher = DocumentFetcher::new(config.clone())?;
//!
//! let fetched = fetcher.fetch("https://example.com/policy.pdf").await?;
//! let document = if fetched.truncated {
//!     extract_prefix_text(&fetched.bytes, config.max_text_chars)?
//! } else {
//!     extract_text(&fetched.bytes, config.max_text_chars)?
//! };
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod recovery;

pub use config::DocumentConfig;
pub use extractor::{extract_prefix_text, extract_text, ExtractError, ExtractedDocument};
pub use fetcher::{DocumentFetcher, DocumentProbe, FetchError, FetchedDocument};
