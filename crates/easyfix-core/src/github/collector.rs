// SPDX-License-Identifier: Apache-2.0

//! The ticket collector.
//!
//! Sweeps the configured repositories for open issues carrying their target
//! label and assembles per-repository reports. Each repository takes two
//! GETs, strictly in order: the filtered issue listing, then the repository
//! metadata. Repositories are processed sequentially in configuration
//! order, so status lines and retries never interleave.
//!
//! Transport failures (connection refused, exhausted retry budget) are
//! contained: the repository is counted as failed and the run moves on.
//! Schema failures abort the whole run - a payload that does not look like
//! the GitHub API means the collector is pointed at the wrong place, and
//! publishing a partial result would hide that.

use std::collections::BTreeMap;

use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::config::RepositoryConfig;
use crate::error::EasyfixError;
use crate::report::{CollectionResult, Contributor, RepositoryReport, Ticket};
use crate::reporter::StatusReporter;
use crate::retry::{is_connection_error, is_retryable, retry_backoff};

/// Domain suffix appended to every configured contact handle.
const CONTACT_DOMAIN: &str = "fedoraproject.org";

/// Issues per page; only the first page is ever requested.
const TICKETS_PER_PAGE: u8 = 100;

/// Query string for the issue listing endpoint.
#[derive(Debug, Serialize)]
struct TicketQuery<'a> {
    per_page: u8,
    labels: &'a str,
    state: &'a str,
}

/// Wire shape of a GitHub issue, reduced to the fields reports need.
#[derive(Debug, Deserialize)]
struct IssueRecord {
    number: u64,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user: ActorRecord,
    html_url: String,
    labels: Vec<LabelRecord>,
}

#[derive(Debug, Deserialize)]
struct ActorRecord {
    html_url: String,
    login: String,
}

#[derive(Debug, Deserialize)]
struct LabelRecord {
    name: String,
}

/// Wire shape of the repository metadata endpoint.
#[derive(Debug, Deserialize)]
struct RepoRecord {
    html_url: String,
    description: Option<String>,
    id: u64,
    owner: ActorRecord,
    created_at: DateTime<Utc>,
}

impl From<IssueRecord> for Ticket {
    fn from(record: IssueRecord) -> Self {
        Ticket {
            number: record.number,
            title: record.title,
            date_created: record.created_at,
            last_updated: record.updated_at,
            creator: Contributor {
                full_url: record.user.html_url,
                name: record.user.login,
            },
            url: record.html_url,
            labels: record.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

/// Builds the ticket map from the listing payload.
///
/// Keyed by issue number; when the API hands back the same number twice
/// within a page, the later record wins.
fn build_ticket_list(records: Vec<IssueRecord>) -> BTreeMap<u64, Ticket> {
    let mut ticket_list = BTreeMap::new();
    for record in records {
        ticket_list.insert(record.number, Ticket::from(record));
    }
    ticket_list
}

/// Maps a failed request into the collection error taxonomy.
///
/// Runs after the retry budget, so an error that is still retryable here
/// means the budget is exhausted.
fn classify_request_error(err: octocrab::Error) -> EasyfixError {
    if is_connection_error(&err) {
        return EasyfixError::Connection {
            message: err.to_string(),
        };
    }
    if is_retryable(&err) {
        return EasyfixError::RetriesExhausted {
            message: err.to_string(),
        };
    }
    match err {
        octocrab::Error::GitHub { source, .. } => EasyfixError::Api {
            message: source.message,
            status: Some(source.status_code.as_u16()),
        },
        // octocrab raises these while deserializing a 2xx body, so a
        // non-JSON payload lands here rather than in our record parsing.
        octocrab::Error::Json { source, .. } => EasyfixError::MalformedResponse {
            message: source.to_string(),
        },
        octocrab::Error::Serde { source, .. } => EasyfixError::MalformedResponse {
            message: source.to_string(),
        },
        other => EasyfixError::Api {
            message: other.to_string(),
            status: None,
        },
    }
}

/// Collects labeled tickets across the configured repositories.
///
/// Everything the collector touches is injected: the authenticated client
/// (with its base URI already pointing at the API root), the repository
/// list, the status reporter, and optionally the backoff policy. Nothing
/// here reads global state, so a stub HTTP server exercises the full
/// pipeline.
pub struct TicketCollector {
    client: Octocrab,
    repositories: Vec<RepositoryConfig>,
    reporter: Box<dyn StatusReporter>,
    backoff: ExponentialBuilder,
}

impl TicketCollector {
    /// Creates a collector from its injected capabilities.
    #[must_use]
    pub fn new(
        client: Octocrab,
        repositories: Vec<RepositoryConfig>,
        reporter: Box<dyn StatusReporter>,
    ) -> Self {
        Self {
            client,
            repositories,
            reporter,
            backoff: retry_backoff(),
        }
    }

    /// Replaces the retry backoff policy.
    ///
    /// Tests use this to trade the 1-second production delays for
    /// milliseconds.
    #[must_use]
    pub fn with_backoff(mut self, backoff: ExponentialBuilder) -> Self {
        self.backoff = backoff;
        self
    }

    /// Collects reports for every configured repository.
    ///
    /// Repositories are visited exactly once, sequentially, in
    /// configuration order. A repository whose requests fail with
    /// [`EasyfixError::Connection`] or [`EasyfixError::RetriesExhausted`]
    /// is reported as a FAIL line and counted; the run continues. Any
    /// other error aborts immediately with no summary.
    ///
    /// On success the reporter has seen one `[PASS]`/`[FAIL]` line per
    /// repository plus the `{passed} passed, {failed} failed, {total}
    /// total` summary.
    #[instrument(skip(self))]
    pub async fn collect(&self) -> Result<CollectionResult> {
        let mut result = CollectionResult::default();

        for repository in &self.repositories {
            match self.fetch_repository_tickets(&repository.name).await {
                Ok(report) => {
                    self.reporter.general(&format!(
                        "[PASS] {} - Retrieved {} tickets",
                        repository.name, report.ticket_count
                    ));
                    result.repositories.insert(repository.name.clone(), report);
                    result.passed += 1;
                }
                Err(EasyfixError::Connection { message }) => {
                    warn!(repository = %repository.name, error = %message, "Connection failed");
                    self.reporter.general(&format!(
                        "[FAIL] {} - Failed to retrieve tickets - Could not establish connection",
                        repository.name
                    ));
                    result.failed += 1;
                }
                Err(EasyfixError::RetriesExhausted { message }) => {
                    warn!(repository = %repository.name, error = %message, "Retries exhausted");
                    self.reporter.general(&format!(
                        "[FAIL] {} - Failed to retrieve tickets - Reached max number of retries",
                        repository.name
                    ));
                    result.failed += 1;
                }
                Err(other) => return Err(other),
            }
        }

        self.reporter.success(&format!(
            "{} passed, {} failed, {} total",
            result.passed,
            result.failed,
            result.total()
        ));
        info!(
            passed = result.passed,
            failed = result.failed,
            "Collection finished"
        );
        Ok(result)
    }

    /// Fetches the report for one configured repository.
    ///
    /// # Errors
    ///
    /// [`EasyfixError::UnknownRepository`] when the name is not configured;
    /// otherwise the request-error taxonomy (connection, retries exhausted,
    /// API error) plus [`EasyfixError::MalformedResponse`] for payloads
    /// that do not match the GitHub schema.
    #[instrument(skip(self))]
    pub async fn fetch_repository_tickets(
        &self,
        repository_name: &str,
    ) -> Result<RepositoryReport> {
        let repository = self
            .repositories
            .iter()
            .find(|r| r.name == repository_name)
            .ok_or_else(|| EasyfixError::UnknownRepository {
                name: repository_name.to_string(),
            })?;

        debug!(label = %repository.label, "Fetching labeled tickets");
        let query = TicketQuery {
            per_page: TICKETS_PER_PAGE,
            labels: &repository.label,
            state: "open",
        };
        let route = format!("/repos/{repository_name}/issues");
        let payload = self.get_with_retry(&route, Some(&query)).await?;
        let records: Vec<IssueRecord> = serde_json::from_value(payload)?;
        let ticket_list = build_ticket_list(records);

        debug!(tickets = ticket_list.len(), "Fetching repository metadata");
        let route = format!("/repos/{repository_name}");
        let payload = self.get_with_retry::<()>(&route, None).await?;
        let record: RepoRecord = serde_json::from_value(payload)?;

        Ok(RepositoryReport {
            ticket_count: ticket_list.len(),
            ticket_list,
            contact: format!("{}@{CONTACT_DOMAIN}", repository.contact),
            url: record.html_url,
            description: record.description,
            id: record.id,
            target_label: repository.label.clone(),
            maintainer: Contributor {
                full_url: record.owner.html_url,
                name: record.owner.login,
            },
            date_created: record.created_at,
        })
    }

    /// Raw GET with the transient-failure retry budget applied.
    async fn get_with_retry<P: Serialize + ?Sized>(
        &self,
        route: &str,
        parameters: Option<&P>,
    ) -> Result<serde_json::Value> {
        let client = &self.client;
        (|| async { client.get::<serde_json::Value, _, _>(route, parameters).await })
            .retry(self.backoff)
            .when(is_retryable)
            .notify(|err, dur| {
                warn!(error = %err, retry_after = ?dur, "Retrying GitHub request");
            })
            .await
            .map_err(classify_request_error)
    }
}
