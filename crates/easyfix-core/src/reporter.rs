// SPDX-License-Identifier: Apache-2.0

//! Status reporting for collection runs.
//!
//! The collector formats its own per-repository PASS/FAIL lines and the
//! run summary; a [`StatusReporter`] only decides where those lines go.
//! Frontends inject their own implementation (the CLI styles them on
//! stderr), library consumers can discard them or route them to `tracing`.

/// Sink for collection progress lines.
pub trait StatusReporter: Send + Sync {
    /// Receives a per-repository status line (`[PASS] ...` / `[FAIL] ...`).
    fn general(&self, message: &str);

    /// Receives the end-of-run summary line.
    fn success(&self, message: &str);
}

/// Discards all status output.
///
/// For consumers that only want the returned
/// [`CollectionResult`](crate::report::CollectionResult).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl StatusReporter for NullReporter {
    fn general(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
}

/// Forwards status lines to `tracing` at info level.
///
/// For services that run collections in the background and want progress
/// in their logs rather than on a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn general(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!("{message}");
    }
}
