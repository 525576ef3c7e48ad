// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! This module provides a formatting layer that downcasts `anyhow::Error`
//! to `EasyfixError` and adds hints for each error type. This separates
//! structured error data (library) from user-friendly presentation (CLI).

use std::fmt::Write;

use anyhow::Error;
use easyfix_core::EasyfixError;

/// Formats an error for CLI display with helpful hints.
///
/// Downcasts `anyhow::Error` to `EasyfixError` and appends a tip matching
/// the error type. If the error is not an `EasyfixError`, returns the
/// original error message.
pub fn format_error(error: &Error) -> String {
    if let Some(easyfix_err) = error.downcast_ref::<EasyfixError>() {
        match easyfix_err {
            EasyfixError::NotAuthenticated => easyfix_err.to_string(),
            EasyfixError::Config { message: _ } => {
                format!(
                    "{easyfix_err}\n\nTip: Check your config file at {}",
                    easyfix_core::config_file_path().display()
                )
            }
            EasyfixError::Connection { message: _ } => {
                format!(
                    "{easyfix_err}\n\nTip: Check your internet connection and the configured API root, then try again."
                )
            }
            EasyfixError::RetriesExhausted { message: _ } => {
                format!(
                    "{easyfix_err}\n\nTip: GitHub looks unavailable right now. Try again in a few minutes."
                )
            }
            EasyfixError::MalformedResponse { message: _ } => {
                format!(
                    "{easyfix_err}\n\nTip: The configured API root did not answer like the GitHub REST API. Check `github.api_root` in your config."
                )
            }
            EasyfixError::Api { message: _, status } => {
                let mut msg = easyfix_err.to_string();
                if let Some(code) = status {
                    let _ = write!(msg, " (HTTP {code})");
                }
                let _ = write!(
                    msg,
                    "\n\nTip: Check your GitHub credentials with `easyfix auth status`."
                );
                msg
            }
            EasyfixError::UnknownRepository { name: _ } => {
                format!(
                    "{easyfix_err}\n\nTip: Run `easyfix repos` to list the configured repositories."
                )
            }
            EasyfixError::Keyring(_) => {
                format!(
                    "{easyfix_err}\n\nTip: Your system keyring may be locked. Try unlocking it and try again."
                )
            }
        }
    } else {
        // Not an EasyfixError, return the original error chain
        error.to_string()
    }
}
