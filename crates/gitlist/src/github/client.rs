//! GitHub GraphQL client.

use std::sync::Arc;

use async_trait::async_trait;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use super::convert::to_repo_page;
use super::error::GitHubError;
use super::types::{
    GraphQlResponse, ORGANIZATION_REPOSITORIES_QUERY, OrganizationData, QueryLimits,
};
use crate::platform::{self, PageFetcher, PlatformError, RepoPage};

const NOT_FOUND: &str = "NOT_FOUND";

/// Create an authenticated Octocrab instance from a GitHub token.
///
/// `base_uri` points the client at a GitHub Enterprise API root or a test
/// server; `None` uses api.github.com. Octocrab's built-in retries are
/// turned off: a failed request fails the audit.
pub fn create_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, GitHubError> {
    if token.trim().is_empty() {
        return Err(GitHubError::AuthRequired);
    }

    let mut builder = Octocrab::builder()
        .personal_token(token.to_string())
        .add_retry_config(RetryConfig::None);
    if let Some(uri) = base_uri {
        builder = builder.base_uri(uri).map_err(GitHubError::Api)?;
    }
    builder.build().map_err(GitHubError::Api)
}

/// GitHub client fetching organization repositories over GraphQL.
#[derive(Clone)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    limits: QueryLimits,
}

impl GitHubClient {
    /// Create a client for api.github.com.
    pub fn new(token: &str) -> Result<Self, GitHubError> {
        Self::with_base_uri(token, None)
    }

    /// Create a client for a specific API root.
    pub fn with_base_uri(token: &str, base_uri: Option<&str>) -> Result<Self, GitHubError> {
        let client = create_client(token, base_uri)?;
        Ok(Self::from_octocrab(client))
    }

    /// Create a client from an existing Octocrab instance.
    pub fn from_octocrab(client: Octocrab) -> Self {
        Self {
            inner: Arc::new(client),
            limits: QueryLimits::default(),
        }
    }

    /// Override the query size limits.
    pub fn with_limits(mut self, limits: QueryLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The query size limits in use.
    pub fn limits(&self) -> QueryLimits {
        self.limits
    }

    /// Fetch one page of an organization's repositories.
    pub async fn fetch_organization_page(
        &self,
        organization: &str,
        cursor: Option<&str>,
    ) -> Result<RepoPage, GitHubError> {
        let payload = serde_json::json!({
            "query": ORGANIZATION_REPOSITORIES_QUERY,
            "variables": {
                "login": organization,
                "cursor": cursor,
                "pageSize": self.limits.page_size,
                "languagesLimit": self.limits.languages_limit,
                "refsLimit": self.limits.refs_limit,
            },
        });

        let response: GraphQlResponse<OrganizationData> = self.inner.graphql(&payload).await?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            if errors
                .iter()
                .any(|error| error.kind.as_deref() == Some(NOT_FOUND))
            {
                return Err(GitHubError::OrgNotFound(organization.to_string()));
            }
            return Err(GitHubError::GraphQl(
                errors.into_iter().map(|error| error.message).collect(),
            ));
        }

        let organization_data = response
            .data
            .and_then(|data| data.organization)
            .ok_or_else(|| GitHubError::OrgNotFound(organization.to_string()))?;

        let page = to_repo_page(organization_data.repositories);
        tracing::debug!(
            organization,
            count = page.records.len(),
            has_more = page.has_more,
            "Decoded repositories page"
        );
        Ok(page)
    }
}

#[async_trait]
impl PageFetcher for GitHubClient {
    async fn fetch_page(
        &self,
        organization: &str,
        cursor: Option<&str>,
    ) -> platform::Result<RepoPage> {
        self.fetch_organization_page(organization, cursor)
            .await
            .map_err(PlatformError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_rejects_empty_token() {
        let result = create_client("   ", None);
        assert!(matches!(result, Err(GitHubError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_with_limits() {
        let limits = QueryLimits {
            page_size: 50,
            languages_limit: 5,
            refs_limit: 20,
        };

        let client = GitHubClient::new("ghp_test").unwrap().with_limits(limits);

        assert_eq!(client.limits(), limits);
    }
}
