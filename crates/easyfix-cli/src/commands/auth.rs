// SPDX-License-Identifier: Apache-2.0

//! GitHub authentication commands backed by the system keyring.

use anyhow::{Context, Result};
use console::style;
use dialoguer::Password;
use easyfix_core::AppConfig;
use easyfix_core::github::auth;
use secrecy::SecretString;
use tracing::info;

use crate::commands::types::AuthStatusResult;

/// Run the login command - store an API key in the system keyring.
pub async fn run_login(config: &AppConfig) -> Result<()> {
    // Check if already authenticated via any source
    if let Some((_, source)) = auth::resolve_api_key(&config.github) {
        println!(
            "{} An API key is already available (via {}).",
            style("!").yellow().bold(),
            source
        );
        println!(
            "Run {} to remove the stored key and re-authenticate.",
            style("easyfix auth logout").cyan()
        );
        return Ok(());
    }

    let api_key = Password::new()
        .with_prompt("GitHub API key")
        .interact()
        .context("Failed to read API key")?;
    let api_key = SecretString::from(api_key);

    // Verify the key against the API before storing it.
    let client = auth::create_client(&config.github, &api_key)?;
    let user = client.current().user().await.context(
        "GitHub rejected the API key. Check the key and `github.username` in your config",
    )?;

    auth::store_api_key(&api_key)?;

    println!();
    println!(
        "{} Authenticated with GitHub as {}. Key stored in the system keyring.",
        style("*").green().bold(),
        style(&user.login).cyan()
    );

    Ok(())
}

/// Run the logout command - remove the stored API key.
pub fn run_logout() -> Result<()> {
    if !auth::has_keyring_credential() {
        println!(
            "{} No API key stored in the keyring.",
            style("!").yellow().bold()
        );
        return Ok(());
    }

    auth::delete_api_key()?;

    info!("Removed stored GitHub API key");
    println!(
        "{} Logged out. API key removed from the system keyring.",
        style("*").green().bold()
    );

    Ok(())
}

/// Run the status command - show current authentication state.
pub async fn run_status(config: &AppConfig) -> AuthStatusResult {
    match auth::resolve_api_key(&config.github) {
        Some((api_key, source)) => {
            let username = match auth::create_client(&config.github, &api_key) {
                Ok(client) => match client.current().user().await {
                    Ok(user) => Some(user.login),
                    Err(_) => None,
                },
                Err(_) => None,
            };

            AuthStatusResult {
                authenticated: true,
                source: Some(source),
                username,
            }
        }
        None => AuthStatusResult {
            authenticated: false,
            source: None,
            username: None,
        },
    }
}
