// SPDX-License-Identifier: Apache-2.0

//! The repos command: list configured repositories.

use easyfix_core::AppConfig;

use crate::commands::types::ReposResult;

/// Run the repos command.
pub fn run(config: &AppConfig) -> ReposResult {
    ReposResult {
        repositories: config.repositories.clone(),
    }
}
