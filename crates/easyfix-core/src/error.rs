// SPDX-License-Identifier: Apache-2.0

//! Error types for easyfix.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! The collection engine returns these typed errors so callers can tell
//! contained failures apart from fatal ones; application code at the
//! edges should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during easyfix operations.
///
/// [`crate::github::collector::TicketCollector::collect`] contains
/// [`Connection`](EasyfixError::Connection) and
/// [`RetriesExhausted`](EasyfixError::RetriesExhausted) per repository;
/// every other variant aborts a collection run.
#[derive(Error, Debug)]
pub enum EasyfixError {
    /// The TCP/TLS connection to the API host could not be established.
    #[error("Could not establish connection: {message}")]
    Connection {
        /// Transport error message.
        message: String,
    },

    /// A transient API failure persisted through the whole retry budget.
    #[error("Reached max number of retries: {message}")]
    RetriesExhausted {
        /// Message from the last failed attempt.
        message: String,
    },

    /// A 2xx response body did not match the GitHub schema we expect.
    #[error("Malformed API response: {message}")]
    MalformedResponse {
        /// Deserialization error message.
        message: String,
    },

    /// Any other GitHub API error (404, 401, 422, ...).
    #[error("GitHub API error: {message}")]
    Api {
        /// Error message from the API.
        message: String,
        /// HTTP status code, when the API produced one.
        status: Option<u16>,
    },

    /// The requested repository is not in the configured list.
    #[error("Repository `{name}` is not configured")]
    UnknownRepository {
        /// The `owner/repo` name that was requested.
        name: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// No API key found - needs `easyfix auth login` or an environment variable.
    #[error(
        "Authentication required - run `easyfix auth login` first, or set EASYFIX_API_KEY environment variable"
    )]
    NotAuthenticated,

    /// Keyring/credential storage error.
    #[cfg(feature = "keyring")]
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

impl From<config::ConfigError> for EasyfixError {
    fn from(err: config::ConfigError) -> Self {
        EasyfixError::Config {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for EasyfixError {
    fn from(err: serde_json::Error) -> Self {
        EasyfixError::MalformedResponse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_message_matches_status_line_wording() {
        let err = EasyfixError::Connection {
            message: "tcp connect error".to_string(),
        };
        assert!(err.to_string().starts_with("Could not establish connection"));
    }

    #[test]
    fn retries_exhausted_message_matches_status_line_wording() {
        let err = EasyfixError::RetriesExhausted {
            message: "HTTP 500".to_string(),
        };
        assert!(err.to_string().starts_with("Reached max number of retries"));
    }

    #[test]
    fn config_error_converts() {
        let source = config::ConfigError::Message("bad value".to_string());
        let err = EasyfixError::from(source);
        assert!(matches!(err, EasyfixError::Config { .. }));
        assert!(err.to_string().contains("bad value"));
    }

    #[test]
    fn serde_error_converts_to_malformed_response() {
        let source = serde_json::from_str::<u64>("\"not a number\"").unwrap_err();
        let err = EasyfixError::from(source);
        assert!(matches!(err, EasyfixError::MalformedResponse { .. }));
    }
}
