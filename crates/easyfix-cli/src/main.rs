// SPDX-License-Identifier: Apache-2.0

//! Easyfix - collect beginner-friendly tickets from GitHub repositories.
//!
//! A CLI tool that sweeps configured repositories for open issues carrying
//! an easyfix-style label and reports them per repository.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod reporter;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    // Load config early so every command starts from a validated state
    let mut config = easyfix_core::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded and validated");

    // --api-root wins over the configured value
    if let Some(api_root) = &cli.api_root {
        config.github.api_root.clone_from(api_root);
        debug!("Overriding GitHub API root to: {api_root}");
    }

    match commands::run(cli.command, output_ctx, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}
