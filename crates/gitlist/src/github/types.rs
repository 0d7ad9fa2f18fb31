//! GitHub GraphQL query text and response shapes.
//!
//! These types mirror the nested response of the organization repositories
//! query. They never leave the `github` module; [`super::convert`] flattens
//! them into [`crate::platform::RepositoryRecord`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Default number of repositories per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Default number of languages fetched per repository.
pub const DEFAULT_LANGUAGES_LIMIT: u32 = 10;
/// Default number of refs fetched per repository.
pub const DEFAULT_REFS_LIMIT: u32 = 100;

/// Size limits applied to the organization repositories query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Repositories per page (GitHub caps this at 100).
    pub page_size: u32,
    /// Languages per repository.
    pub languages_limit: u32,
    /// Refs per repository.
    pub refs_limit: u32,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            languages_limit: DEFAULT_LANGUAGES_LIMIT,
            refs_limit: DEFAULT_REFS_LIMIT,
        }
    }
}

pub(crate) const ORGANIZATION_REPOSITORIES_QUERY: &str = r#"
query OrganizationRepositories($login: String!, $cursor: String, $pageSize: Int!, $languagesLimit: Int!, $refsLimit: Int!) {
  organization(login: $login) {
    repositories(first: $pageSize, after: $cursor) {
      totalCount
      nodes {
        url
        isArchived
        isEmpty
        isFork
        isDisabled
        primaryLanguage { name }
        languages(first: $languagesLimit) { nodes { name } }
        pushedAt
        pullRequests { totalCount }
        refs(refPrefix: "refs/", first: $refsLimit) {
          edges { node { target { ... on Commit { authoredDate } } } }
        }
      }
      pageInfo { endCursor hasNextPage }
    }
  }
}
"#;

/// Top-level GraphQL envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrganizationData {
    pub organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Organization {
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryConnection {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub nodes: Option<Vec<Option<RepositoryNode>>>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryNode {
    pub url: String,
    pub is_archived: bool,
    pub is_empty: bool,
    pub is_fork: bool,
    pub is_disabled: bool,
    pub primary_language: Option<Language>,
    pub languages: Option<LanguageConnection>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub pull_requests: TotalCount,
    pub refs: Option<RefConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Language {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageConnection {
    #[serde(default)]
    pub nodes: Option<Vec<Option<Language>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefConnection {
    #[serde(default)]
    pub edges: Option<Vec<Option<RefEdge>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefEdge {
    pub node: Option<RefNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefNode {
    pub target: Option<RefTarget>,
}

/// Target of a ref. Only commits carry an authored date; tags and other
/// objects decode as an empty target.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefTarget {
    #[serde(default)]
    pub authored_date: Option<DateTime<Utc>>,
}
