// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Character-based string helpers
//!
//! Limits in this crate are counted in characters, not bytes, so slicing
//! must respect UTF-8 boundaries.

/// Return the prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Number of characters (not bytes) in `text`
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
