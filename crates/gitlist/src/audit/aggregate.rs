//! Aggregation of paginated organization listings into one record set.

use super::error::AuditError;
use super::progress::{AuditProgress, ProgressCallback, emit};
use crate::platform::{PageFetcher, PlatformError, RepositoryRecord};

/// Fetch every repository of every organization.
///
/// Organizations are fetched in the given order and each one is paged
/// through until the fetcher reports no more pages. The result keeps fetch
/// order (organization, then page, then position within the page). A
/// repository visible under two organizations appears twice.
///
/// The first failing page aborts the whole run; nothing fetched so far is
/// returned.
#[tracing::instrument(skip_all, fields(organization_count = organizations.len()))]
pub async fn fetch_all<F, S>(
    fetcher: &F,
    organizations: &[S],
    on_progress: Option<&ProgressCallback>,
) -> Result<Vec<RepositoryRecord>, AuditError>
where
    F: PageFetcher + ?Sized,
    S: AsRef<str>,
{
    emit(
        on_progress,
        AuditProgress::FetchingOrganizations {
            count: organizations.len(),
        },
    );

    let mut records = Vec::new();
    for organization in organizations {
        fetch_organization(fetcher, organization.as_ref(), &mut records, on_progress).await?;
    }

    tracing::info!(total = records.len(), "Fetched all organizations");
    emit(
        on_progress,
        AuditProgress::AggregationComplete {
            total: records.len(),
        },
    );

    Ok(records)
}

/// Page through one organization, appending to `records`.
///
/// Returns the number of records appended.
#[tracing::instrument(skip(fetcher, records, on_progress))]
async fn fetch_organization<F>(
    fetcher: &F,
    organization: &str,
    records: &mut Vec<RepositoryRecord>,
    on_progress: Option<&ProgressCallback>,
) -> Result<usize, AuditError>
where
    F: PageFetcher + ?Sized,
{
    emit(
        on_progress,
        AuditProgress::FetchingOrganization {
            organization: organization.to_string(),
        },
    );

    let start = records.len();
    let mut cursor: Option<String> = None;
    let mut page_number = 1u32;

    loop {
        let page = fetcher
            .fetch_page(organization, cursor.as_deref())
            .await
            .map_err(|source| AuditError::FetchFailure {
                organization: organization.to_string(),
                cursor: cursor.clone(),
                source,
            })?;

        let count = page.records.len();
        records.extend(page.records);

        tracing::debug!(
            page = page_number,
            count,
            has_more = page.has_more,
            "Fetched page"
        );
        emit(
            on_progress,
            AuditProgress::FetchedPage {
                organization: organization.to_string(),
                page: page_number,
                count,
                total_so_far: records.len() - start,
                has_more: page.has_more,
            },
        );

        if !page.has_more {
            break;
        }

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => {
                return Err(AuditError::FetchFailure {
                    organization: organization.to_string(),
                    cursor,
                    source: PlatformError::api(
                        "page reported more results but returned no continuation cursor",
                    ),
                });
            }
        }
        page_number += 1;
    }

    let total = records.len() - start;
    tracing::info!(total, "Fetched organization");
    emit(
        on_progress,
        AuditProgress::OrganizationComplete {
            organization: organization.to_string(),
            total,
        },
    );

    Ok(total)
}
