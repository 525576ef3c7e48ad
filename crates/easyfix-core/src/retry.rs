// SPDX-License-Identifier: Apache-2.0

//! Retry logic with exponential backoff for transient failures.
//!
//! Provides helpers to classify GitHub request errors (retryable, fatal, or
//! connection-establishment failures) and to configure exponential backoff
//! with jitter. Connection failures are deliberately not retryable: an
//! unreachable host should fail fast instead of burning the whole backoff
//! budget.

use backon::ExponentialBuilder;

/// Determines if an HTTP status code is retryable.
///
/// Retryable status codes are:
/// - 429 (Too Many Requests)
/// - 500 (Internal Server Error)
/// - 502 (Bad Gateway)
/// - 503 (Service Unavailable)
/// - 504 (Gateway Timeout)
#[must_use]
pub fn is_retryable_http(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Determines if an octocrab error is retryable.
///
/// Retryable errors are GitHub API errors with a retryable status code and
/// transport-level failures (timeouts, dropped connections mid-flight),
/// except those where the connection could not be established at all.
#[must_use]
pub fn is_retryable(e: &octocrab::Error) -> bool {
    match e {
        octocrab::Error::GitHub { source, .. } => is_retryable_http(source.status_code.as_u16()),
        octocrab::Error::Service { .. } | octocrab::Error::Hyper { .. } => !is_connection_error(e),
        _ => false,
    }
}

/// Determines if an octocrab error means the connection could not be
/// established (refused, reset, aborted, host or network unreachable).
///
/// Hyper reports these as an `std::io::Error` buried in the error source
/// chain, so this walks the chain looking for a connection-class kind.
#[must_use]
pub fn is_connection_error(e: &octocrab::Error) -> bool {
    chain_has_connection_io(e)
}

fn chain_has_connection_io(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = err.source();
    while let Some(inner) = source {
        if let Some(io_err) = inner.downcast_ref::<std::io::Error>() {
            return is_connection_io_kind(io_err.kind());
        }
        source = inner.source();
    }
    false
}

fn is_connection_io_kind(kind: std::io::ErrorKind) -> bool {
    matches!(
        kind,
        std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::NotConnected
            | std::io::ErrorKind::HostUnreachable
            | std::io::ErrorKind::NetworkUnreachable
    )
}

/// Creates a configured exponential backoff builder for retries.
///
/// Factor 2, minimum delay 1 second, 3 retries, jitter enabled. This is the
/// standard transient-failure budget for every GitHub request; tests inject
/// a faster builder through the collector.
#[must_use]
pub fn retry_backoff() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_factor(2.0)
        .with_min_delay(std::time::Duration::from_secs(1))
        .with_max_times(3)
        .with_jitter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("transport failure")]
    struct Transport(#[source] io::Error);

    #[derive(Debug, thiserror::Error)]
    #[error("request dispatch failed")]
    struct Dispatch(#[source] Transport);

    #[test]
    fn test_is_retryable_http_retryable_codes() {
        assert!(is_retryable_http(429));
        assert!(is_retryable_http(500));
        assert!(is_retryable_http(502));
        assert!(is_retryable_http(503));
        assert!(is_retryable_http(504));
    }

    #[test]
    fn test_is_retryable_http_non_retryable_codes() {
        assert!(!is_retryable_http(400));
        assert!(!is_retryable_http(401));
        assert!(!is_retryable_http(403));
        assert!(!is_retryable_http(404));
        assert!(!is_retryable_http(200));
        assert!(!is_retryable_http(201));
    }

    #[test]
    fn test_connection_io_found_one_level_deep() {
        let err = Transport(io::Error::from(io::ErrorKind::ConnectionRefused));
        assert!(chain_has_connection_io(&err));
    }

    #[test]
    fn test_connection_io_found_through_nested_wrappers() {
        let err = Dispatch(Transport(io::Error::from(io::ErrorKind::HostUnreachable)));
        assert!(chain_has_connection_io(&err));
    }

    #[test]
    fn test_timeout_is_not_a_connection_failure() {
        // Timeouts go through the retry budget instead of failing fast.
        let err = Transport(io::Error::from(io::ErrorKind::TimedOut));
        assert!(!chain_has_connection_io(&err));
    }

    #[derive(Debug, thiserror::Error)]
    #[error("no transport involved")]
    struct Plain;

    #[test]
    fn test_no_io_error_in_chain() {
        assert!(!chain_has_connection_io(&Plain));
    }

    #[test]
    fn test_other_io_kind_is_not_a_connection_failure() {
        let err = Transport(io::Error::other("backend gone"));
        assert!(!chain_has_connection_io(&err));
    }

    #[test]
    fn test_connection_io_kinds() {
        assert!(is_connection_io_kind(io::ErrorKind::ConnectionRefused));
        assert!(is_connection_io_kind(io::ErrorKind::ConnectionReset));
        assert!(is_connection_io_kind(io::ErrorKind::ConnectionAborted));
        assert!(is_connection_io_kind(io::ErrorKind::NotConnected));
        assert!(is_connection_io_kind(io::ErrorKind::NetworkUnreachable));
        assert!(!is_connection_io_kind(io::ErrorKind::TimedOut));
        assert!(!is_connection_io_kind(io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_retry_backoff_is_copy() {
        // The collector hands a copy of the policy to every request
        let backoff = retry_backoff();
        let _first: ExponentialBuilder = backoff;
        let _second: ExponentialBuilder = backoff;
    }
}
