//! GitHub GraphQL client for organization repository listings.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - `types` - Query text, size limits and response shapes
//! - `client` - Client creation and page fetching
//! - `convert` - Response flattening into platform records
//!
//! # Example
//!
//! ```ignore
//! use gitlist::audit::fetch_all;
//! use gitlist::github::GitHubClient;
//!
//! let client = GitHubClient::new(&token)?;
//! let records = fetch_all(&client, &["org-name"], None).await?;
//! ```

mod client;
mod convert;
pub mod error;
mod types;

pub use error::GitHubError;

pub use types::{DEFAULT_LANGUAGES_LIMIT, DEFAULT_PAGE_SIZE, DEFAULT_REFS_LIMIT, QueryLimits};

pub use client::{GitHubClient, create_client};
