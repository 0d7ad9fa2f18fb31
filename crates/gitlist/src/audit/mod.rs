//! The activity audit: aggregation, activity resolution and classification.
//!
//! ```ignore
//! use gitlist::audit::{classify_all, fetch_all, read_organizations};
//!
//! let organizations = read_organizations(Path::new("orgs.txt"))?;
//! let records = fetch_all(&client, &organizations, None).await?;
//! for repo in classify_all(&records, Utc::now()) {
//!     println!("{} {}", repo.record.url, repo.status);
//! }
//! ```

mod activity;
mod aggregate;
mod error;
mod organizations;
mod progress;
mod status;

pub use activity::last_activity;
pub use aggregate::fetch_all;
pub use error::AuditError;
pub use organizations::{parse_organizations, read_organizations};
pub use progress::{AuditProgress, ProgressCallback, emit};
pub use status::{ClassifiedRepository, RepoStatus, classify, classify_all};
