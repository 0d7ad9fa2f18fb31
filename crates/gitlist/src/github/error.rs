//! GitHub API error types.

use thiserror::Error;

use crate::platform::{PlatformError, short_error_message};

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    #[error("GraphQL query failed: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Authentication required")]
    AuthRequired,

    #[error("Organization not found: {0}")]
    OrgNotFound(String),
}

/// HTTP status of an API error, if the server answered at all.
fn status_code(e: &octocrab::Error) -> Option<u16> {
    match e {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

impl From<GitHubError> for PlatformError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::Api(api) => match status_code(&api) {
                Some(401) => PlatformError::AuthRequired,
                Some(404) => PlatformError::not_found(short_error_message(&api)),
                Some(_) => PlatformError::api(short_error_message(&api)),
                None => match api {
                    octocrab::Error::Json { .. } | octocrab::Error::Serde { .. } => {
                        PlatformError::decode(short_error_message(&api))
                    }
                    octocrab::Error::Hyper { .. } | octocrab::Error::Service { .. } => {
                        PlatformError::network(short_error_message(&api))
                    }
                    other => PlatformError::api(short_error_message(&other)),
                },
            },
            GitHubError::GraphQl(messages) => PlatformError::api(messages.join("; ")),
            GitHubError::AuthRequired => PlatformError::AuthRequired,
            GitHubError::OrgNotFound(org) => PlatformError::not_found(format!("organization {org}")),
        }
    }
}
