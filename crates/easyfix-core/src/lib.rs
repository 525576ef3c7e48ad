// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Easyfix Core
//!
//! Core library for the Easyfix CLI - collecting beginner-friendly tickets
//! from configured GitHub repositories.
//!
//! This crate provides reusable components for:
//! - Ticket collection (labeled issue listings plus repository metadata)
//! - GitHub API integration (credential resolution, client construction)
//! - Configuration management
//! - Status reporting during collection runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anyhow::{Context, Result};
//! use easyfix_core::github::auth::{create_client, resolve_api_key};
//! use easyfix_core::{NullReporter, TicketCollector, load_config};
//!
//! # async fn example() -> Result<()> {
//! // Load configuration
//! let config = load_config()?;
//!
//! // Resolve credentials and build the API client
//! let (api_key, _source) =
//!     resolve_api_key(&config.github).context("No GitHub credentials found")?;
//! let client = create_client(&config.github, &api_key)?;
//!
//! // Collect tickets from every configured repository
//! let collector = TicketCollector::new(
//!     client,
//!     config.repositories.clone(),
//!     Box::new(NullReporter),
//! );
//! let result = collector.collect().await?;
//! println!("{} passed, {} failed", result.passed, result.failed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`github`] - GitHub API (auth, ticket collection)
//! - [`report`] - Collected report data model
//! - [`reporter`] - Status reporting during collection
//! - [`retry`] - Retry classification and backoff policy
//! - [`utils`] - Formatting helpers

// ============================================================================
// Error Handling
// ============================================================================

pub use error::EasyfixError;

/// Convenience Result type for Easyfix operations.
///
/// This is equivalent to `std::result::Result<T, EasyfixError>`.
pub type Result<T> = std::result::Result<T, EasyfixError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, GithubConfig, RepositoryConfig, config_dir, config_file_path, load_config,
};

// ============================================================================
// Ticket Collection
// ============================================================================

pub use github::collector::TicketCollector;

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::auth::{CredentialSource, create_client, resolve_api_key};
pub use github::parse_owner_repo;

// ============================================================================
// Reports
// ============================================================================

pub use report::{CollectionResult, Contributor, RepositoryReport, Ticket};

// ============================================================================
// Status Reporting
// ============================================================================

pub use reporter::{NullReporter, StatusReporter, TracingReporter};

// ============================================================================
// Retry Logic
// ============================================================================

pub use retry::{is_connection_error, is_retryable, is_retryable_http, retry_backoff};

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{format_relative_time, truncate};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod github;
pub mod report;
pub mod reporter;
pub mod retry;
pub mod utils;
