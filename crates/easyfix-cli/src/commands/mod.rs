// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the Easyfix CLI.

pub mod auth;
pub mod collect;
pub mod completion;
pub mod repos;
pub mod types;

use std::time::Duration;

use anyhow::Result;
use easyfix_core::AppConfig;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{AuthCommand, Commands, OutputContext};
use crate::output;

/// Spinner for long-running steps, suppressed when not on a terminal.
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if !ctx.is_interactive() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Routes a parsed command to its handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        // No spinner here: the collector streams its own status lines.
        Commands::Collect { repositories } => {
            let result = collect::run(&ctx, config, repositories).await?;
            output::render(&result, &ctx)
        }

        Commands::Repos => {
            let result = repos::run(config);
            output::render(&result, &ctx)
        }

        Commands::Auth(auth_cmd) => match auth_cmd {
            AuthCommand::Login => auth::run_login(config).await,
            AuthCommand::Logout => auth::run_logout(),
            AuthCommand::Status => {
                let spinner = maybe_spinner(&ctx, "Checking authentication...");
                let result = auth::run_status(config).await;
                if let Some(s) = spinner {
                    s.finish_and_clear();
                }
                output::render(&result, &ctx)
            }
        },

        Commands::Completion { shell } => completion::run_generate(shell),
    }
}
