//! Progress reporting types for audit runs.
//!
//! The aggregator emits these events as it walks organizations and pages so
//! that a front end can render progress. Events never influence results.

/// Progress events emitted while aggregating repositories.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum AuditProgress {
    /// Starting an audit over a list of organizations.
    FetchingOrganizations {
        /// Number of organizations to fetch.
        count: usize,
    },

    /// Starting to fetch an organization's repositories.
    FetchingOrganization {
        /// Organization login.
        organization: String,
    },

    /// Fetched one page of an organization's repositories.
    FetchedPage {
        /// Organization login.
        organization: String,
        /// Page number (1-indexed).
        page: u32,
        /// Number of repositories on this page.
        count: usize,
        /// Running total for this organization.
        total_so_far: usize,
        /// Whether another page follows.
        has_more: bool,
    },

    /// Finished an organization.
    OrganizationComplete {
        /// Organization login.
        organization: String,
        /// Repositories fetched for this organization.
        total: usize,
    },

    /// Finished all organizations.
    AggregationComplete {
        /// Repositories fetched across all organizations.
        total: usize,
    },
}

/// Callback for progress updates during an audit.
pub type ProgressCallback = Box<dyn Fn(AuditProgress) + Send + Sync>;

/// Emit a progress event if a callback is provided.
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: AuditProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}
