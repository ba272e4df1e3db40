// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Document question-answering endpoint
//!
//! Provides the `/hackrx/run` HTTP endpoint.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::run_handler;
pub use request::RunRequest;
pub use response::RunResponse;
