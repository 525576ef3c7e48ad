// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Easyfix CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to
//! stderr. Log level can be controlled via the `RUST_LOG` environment
//! variable; the `-v` flag raises the default filter to debug.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! easyfix collect
//!
//! # Debug output for troubleshooting
//! easyfix -v collect
//!
//! # Full control over filtering
//! RUST_LOG=easyfix_core=trace,octocrab=debug easyfix collect
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence over the defaults when set. All tracing
/// output goes to stderr so stdout stays clean for rendered results.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "easyfix_core=debug,easyfix_cli=debug,octocrab=warn"
    } else {
        "easyfix_core=warn,easyfix_cli=warn,octocrab=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
