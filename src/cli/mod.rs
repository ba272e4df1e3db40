// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;

use crate::config::ServiceConfig;

/// Document QA node
#[derive(Parser, Debug, Default)]
#[command(name = "docqa-node")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Answer questions about remote PDF documents", long_about = None)]
pub struct Cli {
    /// Interface to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Skip TLS certificate verification when fetching documents
    #[arg(long)]
    pub allow_insecure_tls: bool,
}

impl Cli {
    /// Overlay command-line values onto environment configuration
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.allow_insecure_tls {
            config.document.accept_invalid_certs = true;
        }
    }
}
