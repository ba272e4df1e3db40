// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod text;

pub use text::{char_count, truncate_chars};
