// SPDX-License-Identifier: Apache-2.0

//! GitHub API key resolution and client construction.
//!
//! easyfix authenticates with HTTP Basic auth: the configured username plus
//! an API key, combined into an `Authorization` header once when the client
//! is built. The key comes from a priority chain:
//! 1. `EASYFIX_API_KEY` environment variable
//! 2. `GITHUB_TOKEN` environment variable
//! 3. `github.api_key` in the config file
//! 4. System keyring (stored by `easyfix auth login`)

use anyhow::{Context, Result, bail};
#[cfg(feature = "keyring")]
use keyring::Entry;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, instrument};
#[cfg(feature = "keyring")]
use tracing::info;

#[cfg(feature = "keyring")]
use super::{KEYRING_SERVICE, KEYRING_USER};
use crate::config::GithubConfig;

/// Source of the GitHub API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// Key from `EASYFIX_API_KEY` or `GITHUB_TOKEN`.
    Environment,
    /// Key from `github.api_key` in the config file.
    ConfigFile,
    /// Key from the system keyring (stored by `easyfix auth login`).
    Keyring,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment variable"),
            CredentialSource::ConfigFile => write!(f, "config file"),
            CredentialSource::Keyring => write!(f, "system keyring"),
        }
    }
}

/// Creates a keyring entry for the GitHub API key.
#[cfg(feature = "keyring")]
fn keyring_entry() -> Result<Entry> {
    Entry::new(KEYRING_SERVICE, KEYRING_USER).context("Failed to create keyring entry")
}

/// Checks if an API key is stored in the keyring specifically.
///
/// Returns `true` only if a key exists in the system keyring, ignoring
/// environment variables and the config file.
#[cfg(feature = "keyring")]
#[instrument]
#[must_use]
pub fn has_keyring_credential() -> bool {
    match keyring_entry() {
        Ok(entry) => entry.get_password().is_ok(),
        Err(_) => false,
    }
}

/// Retrieves the stored API key from the keyring.
///
/// Returns `None` if no key is stored or if keyring access fails.
#[cfg(feature = "keyring")]
#[instrument]
pub fn get_stored_api_key() -> Option<SecretString> {
    let entry = keyring_entry().ok()?;
    let password = entry.get_password().ok()?;
    debug!("Retrieved API key from keyring");
    Some(SecretString::from(password))
}

/// Resolves the GitHub API key using the priority chain.
///
/// Checks sources in order:
/// 1. `EASYFIX_API_KEY` environment variable
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `github.api_key` from the config file
/// 4. System keyring (when built with the `keyring` feature)
///
/// Returns the key and its source, or `None` if no key is found.
#[instrument(skip(github))]
pub fn resolve_api_key(github: &GithubConfig) -> Option<(SecretString, CredentialSource)> {
    // Priority 1: EASYFIX_API_KEY environment variable
    if let Ok(key) = std::env::var("EASYFIX_API_KEY")
        && !key.is_empty()
    {
        debug!("Using API key from EASYFIX_API_KEY environment variable");
        return Some((SecretString::from(key), CredentialSource::Environment));
    }

    // Priority 2: GITHUB_TOKEN environment variable
    if let Ok(key) = std::env::var("GITHUB_TOKEN")
        && !key.is_empty()
    {
        debug!("Using API key from GITHUB_TOKEN environment variable");
        return Some((SecretString::from(key), CredentialSource::Environment));
    }

    // Priority 3: config file
    if let Some(key) = &github.api_key
        && !key.is_empty()
    {
        debug!("Using API key from config file");
        return Some((SecretString::from(key.clone()), CredentialSource::ConfigFile));
    }

    // Priority 4: system keyring
    #[cfg(feature = "keyring")]
    if let Some(key) = get_stored_api_key() {
        debug!("Using API key from system keyring");
        return Some((key, CredentialSource::Keyring));
    }

    debug!("No API key found in any source");
    None
}

/// Stores an API key in the system keyring.
#[cfg(feature = "keyring")]
#[instrument(skip(api_key))]
pub fn store_api_key(api_key: &SecretString) -> Result<()> {
    let entry = keyring_entry()?;
    entry
        .set_password(api_key.expose_secret())
        .context("Failed to store API key in keyring")?;
    info!("API key stored in system keyring");
    Ok(())
}

/// Deletes the stored API key from the keyring.
#[cfg(feature = "keyring")]
#[instrument]
pub fn delete_api_key() -> Result<()> {
    let entry = keyring_entry()?;
    entry
        .delete_credential()
        .context("Failed to delete API key from keyring")?;
    info!("API key deleted from keyring");
    Ok(())
}

/// Creates a GitHub client authenticated with Basic auth.
///
/// The Authorization header is built once here; the configured `api_root`
/// becomes the client's base URI so Enterprise deployments and tests can
/// redirect every request.
///
/// # Errors
///
/// Returns an error if `github.username` is empty, the API root is not a
/// valid URI, or the client cannot be built.
#[instrument(skip(github, api_key))]
pub fn create_client(github: &GithubConfig, api_key: &SecretString) -> Result<Octocrab> {
    if github.username.is_empty() {
        bail!("No GitHub username configured - set github.username in the config file");
    }

    let client = Octocrab::builder()
        .base_uri(github.api_root.as_str())
        .context("Failed to set API base URI")?
        .basic_auth(
            github.username.clone(),
            api_key.expose_secret().to_string(),
        )
        // backon (retry.rs) is the sole retry authority; octocrab's default
        // internal retry layer would multiply every attempt by four.
        .add_retry_config(octocrab::service::middleware::retry::RetryConfig::None)
        .build()
        .context("Failed to build GitHub client")?;

    debug!(api_root = %github.api_root, "Created authenticated GitHub client");
    Ok(client)
}
