// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! PDF text extraction
//!
//! Parses a PDF with `lopdf` and concatenates the best-effort text of each
//! page, one page per line block, stopping once the character cap is passed.

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::recovery::rebuild_prefix;
use crate::utils::{char_count, truncate_chars};

/// Text extraction error types
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes are not a readable PDF document
    #[error("Failed to parse document: {0}")]
    Parse(String),
}

/// Plain text pulled out of a fetched document
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Concatenated page text, at most `max_chars` characters
    pub text: String,
    /// Total pages in the document
    pub page_count: usize,
    /// Pages actually read before the cap was reached
    pub pages_read: usize,
}

impl ExtractedDocument {
    /// True if no page yielded any non-whitespace text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Extract text from PDF bytes
///
/// A page whose text cannot be decoded contributes nothing; only a document
/// that cannot be loaded at all is an error.
pub fn extract_text(data: &[u8], max_chars: usize) -> Result<ExtractedDocument, ExtractError> {
    let doc = Document::load_mem(data).map_err(|e| ExtractError::Parse(e.to_string()))?;
    Ok(read_pages(&doc, max_chars))
}

/// Extract text from the first bytes of a PDF that was cut short
///
/// The cross-reference table of a truncated file is gone, so the complete
/// objects of the prefix are re-indexed before loading.
pub fn extract_prefix_text(data: &[u8], max_chars: usize) -> Result<ExtractedDocument, ExtractError> {
    let doc = match Document::load_mem(data) {
        Ok(doc) => doc,
        Err(e) => {
            let rebuilt = rebuild_prefix(data).ok_or_else(|| ExtractError::Parse(e.to_string()))?;
            let doc = Document::load_mem(&rebuilt).map_err(|e| ExtractError::Parse(e.to_string()))?;
            info!(
                "Recovered {} objects from a {} byte document prefix",
                doc.objects.len(),
                data.len()
            );
            doc
        }
    };
    Ok(read_pages(&doc, max_chars))
}

fn read_pages(doc: &Document, max_chars: usize) -> ExtractedDocument {
    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let page_count = page_numbers.len();

    let pages = page_numbers.into_iter().map(|page_number| {
        doc.extract_text(&[page_number]).unwrap_or_else(|e| {
            warn!("Skipping text of page {}: {}", page_number, e);
            String::new()
        })
    });

    let (text, pages_read) = accumulate_pages(pages, max_chars);

    debug!(
        "Extracted {} chars from {}/{} pages",
        char_count(&text),
        pages_read,
        page_count
    );

    ExtractedDocument {
        text,
        page_count,
        pages_read,
    }
}

/// Join page texts with a trailing newline each, stopping after the page
/// that pushes the total past `max_chars`; the result is then cut to the cap.
///
/// Pages are pulled lazily, so pages past the cap are never extracted.
pub fn accumulate_pages<I>(pages: I, max_chars: usize) -> (String, usize)
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    let mut chars = 0usize;
    let mut pages_read = 0usize;

    for page in pages {
        pages_read += 1;
        chars += char_count(&page) + 1;
        text.push_str(&page);
        text.push('\n');
        if chars > max_chars {
            break;
        }
    }

    if chars > max_chars {
        let keep = truncate_chars(&text, max_chars).len();
        text.truncate(keep);
    }

    (text, pages_read)
}
