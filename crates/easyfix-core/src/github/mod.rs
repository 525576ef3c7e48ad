// SPDX-License-Identifier: Apache-2.0

//! GitHub integration: authentication and the ticket collector.

use anyhow::{Result, bail};

pub mod auth;
pub mod collector;

/// Service name for keyring storage.
#[cfg(feature = "keyring")]
pub const KEYRING_SERVICE: &str = "easyfix";

/// Username for keyring entries.
#[cfg(feature = "keyring")]
pub const KEYRING_USER: &str = "github_api_key";

/// Parses an `owner/repo` string into its parts.
///
/// # Errors
///
/// Returns an error when the input is not exactly `owner/repo` with both
/// parts non-empty.
pub fn parse_owner_repo(repo: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = repo.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        bail!(
            "Invalid owner/repo format.\n  Expected: owner/repo\n  Got: {repo}"
        );
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
