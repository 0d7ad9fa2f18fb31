//! Gitlist - a GitHub organization repository auditor.
//!
//! This library fetches every repository of a list of GitHub organizations,
//! resolves each repository's last activity, and classifies it with a
//! maintenance status (archive, delete, keep). Results are written either as
//! a semicolon separated CSV report or as a raw JSON dump.
//!
//! # Features
//!
//! - `github` (default) - The GitHub GraphQL client. Without it the library
//!   still classifies and reports records produced by any
//!   [`platform::PageFetcher`].
//!
//! # Example
//!
//! ```ignore
//! use gitlist::{GitHubClient, OutputMode, fetch_all, write_report};
//!
//! let client = GitHubClient::new(&token)?;
//! let records = fetch_all(&client, &["acme"], None).await?;
//! write_report(&OutputMode::RawJson, &records, chrono::Utc::now(), std::io::stdout())?;
//! ```

pub mod audit;
pub mod platform;
pub mod report;

#[cfg(feature = "github")]
pub mod github;

pub use audit::{
    AuditError, AuditProgress, ClassifiedRepository, ProgressCallback, RepoStatus, classify,
    classify_all, fetch_all, last_activity, read_organizations,
};
#[cfg(feature = "github")]
pub use github::{GitHubClient, GitHubError, QueryLimits};
pub use platform::{PageFetcher, PlatformError, RepoPage, RepositoryRecord};
pub use report::{OutputMode, write_report};
