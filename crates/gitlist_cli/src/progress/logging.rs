use gitlist::audit::AuditProgress;

/// Logging reporter using tracing for structured output.
pub struct LoggingReporter;

impl LoggingReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, event: AuditProgress) {
        match event {
            AuditProgress::FetchingOrganizations { count } => {
                tracing::info!(count, "Auditing organizations");
            }

            AuditProgress::FetchingOrganization { organization } => {
                tracing::info!(organization = %organization, "Fetching repositories");
            }

            AuditProgress::FetchedPage {
                organization,
                page,
                count,
                total_so_far,
                has_more,
            } => {
                tracing::debug!(organization = %organization, page, count, total_so_far, has_more, "Fetched page");
            }

            AuditProgress::OrganizationComplete {
                organization,
                total,
            } => {
                tracing::info!(organization = %organization, total, "Fetch complete");
            }

            AuditProgress::AggregationComplete { total } => {
                tracing::info!(total, "Audit fetch complete");
            }

            _ => {}
        }
    }
}

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}
