use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::Result;

/// A repository as fetched from a platform, flattened out of the API's
/// nested response shape.
///
/// Records are created once per fetched page and never mutated afterwards.
/// They serialize with camelCase field names, which is the shape of the raw
/// JSON dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    /// Web URL of the repository.
    pub url: String,
    /// Whether the repository is archived.
    pub is_archived: bool,
    /// Whether the repository has no commits at all.
    pub is_empty: bool,
    /// Whether the repository is a fork.
    pub is_fork: bool,
    /// Whether the repository has been disabled by the platform.
    pub is_disabled: bool,
    /// Primary language name, empty when the platform reports none.
    pub primary_language: String,
    /// Language names in the order the API returned them.
    pub languages: Vec<String>,
    /// When code was last pushed.
    pub pushed_at: DateTime<Utc>,
    /// Total number of pull requests, in any state.
    pub pull_request_count: u64,
    /// Authored date of the head commit of every fetched ref.
    pub branch_tips: Vec<DateTime<Utc>>,
}

/// One page of repositories for an organization.
#[derive(Debug, Clone, Default)]
pub struct RepoPage {
    /// Repositories on this page, in API order.
    pub records: Vec<RepositoryRecord>,
    /// Cursor to pass back to fetch the following page.
    pub next_cursor: Option<String>,
    /// Whether another page follows this one.
    pub has_more: bool,
}

/// Source of paginated organization repository listings.
///
/// Implementations execute exactly one request per call and must not retry:
/// any failure is reported to the caller as-is.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page of an organization's repositories.
    ///
    /// `cursor` is `None` for the first page and the previous page's
    /// `next_cursor` afterwards.
    async fn fetch_page(&self, organization: &str, cursor: Option<&str>) -> Result<RepoPage>;
}
