//! Audit error types.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::platform::PlatformError;

/// Fatal errors of an audit run.
///
/// None of these are recovered from: the run stops and no report is written.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A page fetch failed.
    #[error(
        "Failed to fetch repositories for organization '{organization}' (cursor: {}): {source}",
        cursor.as_deref().unwrap_or("<first page>")
    )]
    FetchFailure {
        organization: String,
        cursor: Option<String>,
        #[source]
        source: PlatformError,
    },

    /// Reading the organization list or writing the report failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The CSV report could not be rendered.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The JSON dump could not be rendered.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    /// Create an I/O error for an operation on `path`.
    pub fn io(action: &str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            context: format!("Failed to {} {}", action, path.display()),
            source,
        }
    }

    /// Whether this error came from the remote API.
    #[inline]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure { .. })
    }
}
