// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! These types allow command handlers to return data instead of printing
//! directly, improving testability and separation of concerns.

use std::collections::BTreeMap;

use easyfix_core::github::auth::CredentialSource;
use easyfix_core::{RepositoryConfig, RepositoryReport};
use serde::Serialize;

/// Result from the collect command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CollectResult {
    /// Number of repositories collected successfully.
    pub passed: usize,
    /// Number of repositories that failed.
    pub failed: usize,
    /// Total number of repositories visited.
    pub total: usize,
    /// Reports keyed by `owner/repo` name (failed repositories are absent).
    pub repositories: BTreeMap<String, RepositoryReport>,
}

/// Result from the repos command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReposResult {
    /// Configured repositories, in configuration order.
    pub repositories: Vec<RepositoryConfig>,
}

/// Result from the auth status command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthStatusResult {
    /// Whether a usable API key was found.
    pub authenticated: bool,
    /// Where the key came from (if authenticated).
    pub source: Option<CredentialSource>,
    /// GitHub username the key belongs to (if it could be verified).
    pub username: Option<String>,
}
