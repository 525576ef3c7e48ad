// SPDX-License-Identifier: Apache-2.0

//! Report types produced by a collection run.
//!
//! These are the publishable artifacts: per-repository reports of open
//! beginner-friendly tickets, aggregated into a run-wide result. Everything
//! serializes with `serde` so frontends can emit JSON or YAML directly.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub actor reference: a ticket creator or a repository owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Profile URL (`html_url`).
    pub full_url: String,
    /// Login name.
    pub name: String,
}

/// One open issue carrying the repository's target label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Issue number, unique within its repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// When the issue was opened.
    pub date_created: DateTime<Utc>,
    /// When the issue was last updated.
    pub last_updated: DateTime<Utc>,
    /// Who opened the issue.
    pub creator: Contributor,
    /// Issue web URL.
    pub url: String,
    /// All label names on the issue, not just the target label.
    pub labels: Vec<String>,
}

/// Collected tickets and metadata for one repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryReport {
    /// Number of collected tickets; always equals `ticket_list.len()`.
    pub ticket_count: usize,
    /// Tickets keyed by issue number. If the API hands back the same
    /// number twice within a page, the later object wins.
    pub ticket_list: BTreeMap<u64, Ticket>,
    /// Published contact address, always `{handle}@fedoraproject.org`.
    pub contact: String,
    /// Repository web URL.
    pub url: String,
    /// Repository description, if one is set.
    pub description: Option<String>,
    /// GitHub repository id.
    pub id: u64,
    /// The label this collection targeted.
    pub target_label: String,
    /// Repository owner.
    pub maintainer: Contributor,
    /// When the repository was created.
    pub date_created: DateTime<Utc>,
}

/// Aggregated outcome of one collection run.
///
/// A repository appears in `repositories` exactly when both of its API
/// calls succeeded; contained failures only show up in the `failed` count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionResult {
    /// Reports keyed by configured `owner/repo` name.
    pub repositories: BTreeMap<String, RepositoryReport>,
    /// Repositories whose report was collected.
    pub passed: usize,
    /// Repositories skipped over a contained failure.
    pub failed: usize,
}

impl CollectionResult {
    /// Total number of repositories the run attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}
