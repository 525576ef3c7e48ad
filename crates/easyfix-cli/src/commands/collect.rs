// SPDX-License-Identifier: Apache-2.0

//! The collect command: sweep configured repositories for labeled tickets.

use anyhow::{Context, Result};
use easyfix_core::github::auth::{create_client, resolve_api_key};
use easyfix_core::{
    AppConfig, EasyfixError, NullReporter, RepositoryConfig, StatusReporter, TicketCollector,
};
use tracing::debug;

use crate::cli::OutputContext;
use crate::commands::types::CollectResult;
use crate::reporter::ConsoleReporter;

/// Run the collect command.
///
/// With explicit `repositories`, every requested name must be configured;
/// the sweep then covers just those, still in configuration order. With
/// none, all configured repositories are collected.
pub async fn run(
    ctx: &OutputContext,
    config: &AppConfig,
    repositories: Vec<String>,
) -> Result<CollectResult> {
    let (api_key, source) =
        resolve_api_key(&config.github).ok_or(EasyfixError::NotAuthenticated)?;
    debug!(%source, "Resolved GitHub credentials");
    let client = create_client(&config.github, &api_key)?;

    let selection = select_repositories(config, &repositories)?;
    debug!(repositories = selection.len(), "Starting collection run");

    // Status lines go to stderr; suppress them entirely under --quiet.
    let reporter: Box<dyn StatusReporter> = if ctx.quiet {
        Box::new(NullReporter)
    } else {
        Box::new(ConsoleReporter)
    };

    let collector = TicketCollector::new(client, selection, reporter);
    let outcome = collector.collect().await?;

    Ok(CollectResult {
        passed: outcome.passed,
        failed: outcome.failed,
        total: outcome.total(),
        repositories: outcome.repositories,
    })
}

/// Narrows the configured repositories to the requested names.
///
/// Order follows the configuration, not the arguments, so status lines
/// always come out in the same order for the same config.
fn select_repositories(
    config: &AppConfig,
    requested: &[String],
) -> Result<Vec<RepositoryConfig>> {
    if requested.is_empty() {
        return Ok(config.repositories.clone());
    }

    for name in requested {
        if config.repository(name).is_none() {
            return Err(EasyfixError::UnknownRepository { name: name.clone() })
                .context("Cannot collect an unconfigured repository");
        }
    }

    Ok(config
        .repositories
        .iter()
        .filter(|repo| requested.iter().any(|name| name == &repo.name))
        .cloned()
        .collect())
}
