//! Conversion from GitHub GraphQL response shapes to platform records.

use chrono::{DateTime, Utc};

use super::types::{RepositoryConnection, RepositoryNode};
use crate::platform::{RepoPage, RepositoryRecord};

/// Convert one repository node to a flat record.
///
/// A repository that was never pushed to has no `pushedAt`; it is recorded
/// as the Unix epoch. Refs pointing at anything other than a commit
/// contribute no branch tip.
pub(crate) fn to_repository_record(node: RepositoryNode) -> RepositoryRecord {
    let primary_language = node
        .primary_language
        .map(|language| language.name)
        .unwrap_or_default();

    let languages = node
        .languages
        .and_then(|connection| connection.nodes)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(|language| language.name)
        .collect();

    // A tag target has no authoredDate and adds no tip. A repository whose
    // refs are all annotated tags therefore resolves to `pushedAt`, not to a
    // zero timestamp that would classify it as long inactive.
    let branch_tips = node
        .refs
        .and_then(|connection| connection.edges)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(|edge| edge.node)
        .filter_map(|ref_node| ref_node.target)
        .filter_map(|target| target.authored_date)
        .collect();

    RepositoryRecord {
        url: node.url,
        is_archived: node.is_archived,
        is_empty: node.is_empty,
        is_fork: node.is_fork,
        is_disabled: node.is_disabled,
        primary_language,
        languages,
        pushed_at: node.pushed_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        pull_request_count: node.pull_requests.total_count,
        branch_tips,
    }
}

/// Convert a repository connection to a page.
pub(crate) fn to_repo_page(connection: RepositoryConnection) -> RepoPage {
    let records = connection
        .nodes
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(to_repository_record)
        .collect();

    RepoPage {
        records,
        next_cursor: connection.page_info.end_cursor,
        has_more: connection.page_info.has_next_page,
    }
}
