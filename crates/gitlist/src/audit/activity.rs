use chrono::{DateTime, Utc};

use crate::platform::RepositoryRecord;

/// Resolve the instant a repository was last worked on.
///
/// The newest authored date across all ref tips wins. `pushed_at` is only
/// used when no ref was fetched, since a push can also come from tag pushes
/// or force-pushes of old history.
pub fn last_activity(repo: &RepositoryRecord) -> DateTime<Utc> {
    repo.branch_tips
        .iter()
        .max()
        .copied()
        .unwrap_or(repo.pushed_at)
}
