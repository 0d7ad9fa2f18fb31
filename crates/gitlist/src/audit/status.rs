//! Lifecycle status classification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::activity::last_activity;
use crate::platform::RepositoryRecord;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const DAYS_PER_YEAR: f64 = 365.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Pull request counts below this are considered "few".
const FEW_PULL_REQUESTS: u64 = 5;

/// Lifecycle status of a repository.
///
/// The labels are part of the report format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum RepoStatus {
    AlreadyArchived,
    DeleteEmpty,
    Disabled,
    ArchiveInactive,
    ArchiveTentativeFork,
    ArchiveTentative,
    ArchiveForkNoPullRequests,
    ArchiveNoPullRequests,
    StaleFewPullRequests,
    ActiveNoPullRequests,
    ActiveFewPullRequests,
    Ok,
}

impl RepoStatus {
    /// Every status, in rule order.
    pub const ALL: [RepoStatus; 12] = [
        Self::AlreadyArchived,
        Self::DeleteEmpty,
        Self::Disabled,
        Self::ArchiveInactive,
        Self::ArchiveTentativeFork,
        Self::ArchiveTentative,
        Self::ArchiveForkNoPullRequests,
        Self::ArchiveNoPullRequests,
        Self::StaleFewPullRequests,
        Self::ActiveNoPullRequests,
        Self::ActiveFewPullRequests,
        Self::Ok,
    ];

    /// The report label for this status.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AlreadyArchived => "Already archived",
            Self::DeleteEmpty => "Delete - empty repo",
            Self::Disabled => "Disabled repo",
            Self::ArchiveInactive => "Archive - inactive for more than 2 years",
            Self::ArchiveTentativeFork => {
                "Archive - tentative forked repo - inactive more than 1 year but with some PRs"
            }
            Self::ArchiveTentative => {
                "Archive - tentative - inactive more than 1 year and with few PRs"
            }
            Self::ArchiveForkNoPullRequests => {
                "Archive - forked and inactive more than 1 year and no PRs at all"
            }
            Self::ArchiveNoPullRequests => "Archive - inactive more than 1 year and no PRs at all",
            Self::StaleFewPullRequests => {
                "OK - WARNING - there was no activity in last 6 months and very few PRs"
            }
            Self::ActiveNoPullRequests => {
                "OK - WARNING - there was activity in last 6 months but no PRs(trunk based development?)"
            }
            Self::ActiveFewPullRequests => {
                "OK - WARNING - there was activity in last 6 months and very few PRs"
            }
            Self::Ok => "OK",
        }
    }
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<RepoStatus> for &'static str {
    fn from(status: RepoStatus) -> Self {
        status.label()
    }
}

/// Time elapsed since last activity, in fractional 365-day years and
/// 30-day months.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Inactivity {
    years: f64,
    months: f64,
}

impl Inactivity {
    fn between(last_activity: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let hours = (now - last_activity).num_milliseconds() as f64 / MILLIS_PER_HOUR;
        let days = hours / 24.0;
        Self {
            years: days / DAYS_PER_YEAR,
            months: days / DAYS_PER_MONTH,
        }
    }
}

/// Classify a repository given its resolved last activity.
///
/// Rules are evaluated in order and the first match wins. All comparisons
/// are strict, so a repository inactive for exactly one year, two years or
/// six months falls through to the next rule.
pub fn classify(
    repo: &RepositoryRecord,
    last_activity: DateTime<Utc>,
    now: DateTime<Utc>,
) -> RepoStatus {
    if repo.is_archived {
        return RepoStatus::AlreadyArchived;
    }
    if repo.is_empty {
        return RepoStatus::DeleteEmpty;
    }
    if repo.is_disabled {
        return RepoStatus::Disabled;
    }

    let Inactivity { years, months } = Inactivity::between(last_activity, now);
    let pull_requests = repo.pull_request_count;

    if years > 2.0 {
        return RepoStatus::ArchiveInactive;
    }

    let inactive_second_year = years > 1.0 && years < 2.0;

    if inactive_second_year && pull_requests < FEW_PULL_REQUESTS {
        return if repo.is_fork {
            RepoStatus::ArchiveTentativeFork
        } else {
            RepoStatus::ArchiveTentative
        };
    }

    // Never matches: zero pull requests is already caught above. The report
    // format keeps it in place.
    if inactive_second_year && pull_requests == 0 {
        return if repo.is_fork {
            RepoStatus::ArchiveForkNoPullRequests
        } else {
            RepoStatus::ArchiveNoPullRequests
        };
    }

    if months > 6.0 && pull_requests < FEW_PULL_REQUESTS {
        return RepoStatus::StaleFewPullRequests;
    }
    if months < 6.0 && pull_requests == 0 {
        return RepoStatus::ActiveNoPullRequests;
    }
    if months < 6.0 && pull_requests < FEW_PULL_REQUESTS {
        return RepoStatus::ActiveFewPullRequests;
    }

    RepoStatus::Ok
}

/// A repository together with its resolved activity and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedRepository<'a> {
    /// The underlying record.
    pub record: &'a RepositoryRecord,
    /// Resolved last activity.
    pub last_activity: DateTime<Utc>,
    /// Computed status.
    pub status: RepoStatus,
}

impl<'a> ClassifiedRepository<'a> {
    /// Resolve activity for `record` and classify it against `now`.
    pub fn new(record: &'a RepositoryRecord, now: DateTime<Utc>) -> Self {
        let last_activity = last_activity(record);
        Self {
            record,
            last_activity,
            status: classify(record, last_activity, now),
        }
    }
}

/// Classify every record against the same `now`, preserving order.
pub fn classify_all(records: &[RepositoryRecord], now: DateTime<Utc>) -> Vec<ClassifiedRepository<'_>> {
    records
        .iter()
        .map(|record| ClassifiedRepository::new(record, now))
        .collect()
}
