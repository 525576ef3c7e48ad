// SPDX-License-Identifier: Apache-2.0

//! Configuration management for easyfix.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `EASYFIX_`)
//! 2. Config file: `~/.config/easyfix/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point the collector at a GitHub Enterprise deployment
//! EASYFIX_GITHUB__API_ROOT=https://github.example.com/api/v3 easyfix collect
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::EasyfixError;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GithubConfig,
    /// Repositories to sweep for beginner-friendly tickets.
    pub repositories: Vec<RepositoryConfig>,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// REST API origin. Override for GitHub Enterprise or tests.
    pub api_root: String,
    /// Username for Basic authentication.
    pub username: String,
    /// API key for Basic authentication. Prefer `EASYFIX_API_KEY` or the
    /// system keyring over storing the key in the config file.
    pub api_key: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_root: "https://api.github.com".to_string(),
            username: String::new(),
            api_key: None,
        }
    }
}

/// One repository to collect tickets from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Repository in `owner/repo` form.
    pub name: String,
    /// Issue label that marks beginner-friendly tickets.
    pub label: String,
    /// Fedora contact handle; reports publish it as `{contact}@fedoraproject.org`.
    pub contact: String,
}

impl AppConfig {
    /// Checks every configured repository entry.
    ///
    /// Rejects names that are not `owner/repo`, empty labels or contacts,
    /// and duplicate names. Runs as part of [`load_config`] so a bad entry
    /// surfaces before any network traffic.
    pub fn validate(&self) -> Result<(), EasyfixError> {
        let mut seen = BTreeSet::new();
        for entry in &self.repositories {
            crate::github::parse_owner_repo(&entry.name).map_err(|e| EasyfixError::Config {
                message: format!("repository `{}`: {e}", entry.name),
            })?;
            if entry.label.trim().is_empty() {
                return Err(EasyfixError::Config {
                    message: format!("repository `{}` has an empty label", entry.name),
                });
            }
            if entry.contact.trim().is_empty() {
                return Err(EasyfixError::Config {
                    message: format!("repository `{}` has an empty contact", entry.name),
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(EasyfixError::Config {
                    message: format!("repository `{}` is configured twice", entry.name),
                });
            }
        }
        Ok(())
    }

    /// Looks up a configured repository by its `owner/repo` name.
    #[must_use]
    pub fn repository(&self, name: &str) -> Option<&RepositoryConfig> {
        self.repositories.iter().find(|r| r.name == name)
    }
}

/// Returns the easyfix configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/easyfix`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("easyfix");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("easyfix")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables, then
/// validates the repository list. Environment variables use the prefix
/// `EASYFIX_` and double underscore for nested keys (e.g.,
/// `EASYFIX_GITHUB__USERNAME`).
///
/// # Errors
///
/// Returns `EasyfixError::Config` if the config file exists but is invalid,
/// or if validation rejects a repository entry.
pub fn load_config() -> Result<AppConfig, EasyfixError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Config file is optional; defaults plus env vars can stand alone
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("EASYFIX")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}
