//! GitHub API client for repository and webhook queries.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::models::{Hook, RateLimitResponse, RateLimits, Repository};

const GITHUB_API_URL: &str = "https://api.github.com";

/// Errors that can occur while talking to the GitHub API.
#[derive(Error, Debug)]
pub enum GitHubError {
    /// HTTP request failed before a response was produced.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Missing or unusable access token.
    #[error("Authentication error: {0}")]
    Auth(String),
}

/// GitHub API client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the HTTP client cannot be
    /// created.
    pub fn new(token: &str) -> Result<Self, GitHubError> {
        Self::with_base_url(token, GITHUB_API_URL)
    }

    /// Create a client against a non-default API base URL.
    ///
    /// Tests point this at a local mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the HTTP client cannot be
    /// created.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self, GitHubError> {
        if token.is_empty() {
            return Err(GitHubError::Auth(
                "GitHub access token is required".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("hook-audit/0.1"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Make an authenticated GET request and check the status.
    async fn get_raw(&self, path_and_query: &str) -> Result<reqwest::Response, GitHubError> {
        let url = format!("{}{path_and_query}", self.base_url);
        debug!(url = %url, "GitHub API request");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Make an authenticated GET request and decode the JSON body.
    async fn get<T>(&self, path_and_query: &str) -> Result<T, GitHubError>
    where
        T: DeserializeOwned,
    {
        Ok(self.get_raw(path_and_query).await?.json().await?)
    }

    /// One page of the organization's repositories, plus whether a next page
    /// exists according to the response's `Link` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports an error.
    pub async fn list_org_repos_page(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<Repository>, bool), GitHubError> {
        let response = self
            .get_raw(&format!("/orgs/{org}/repos?per_page={per_page}&page={page}"))
            .await?;

        let has_next = has_next_page(response.headers());
        let repos = response.json().await?;
        Ok((repos, has_next))
    }

    /// List the webhooks configured on a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports an error.
    pub async fn list_webhooks(&self, org: &str, repo: &str) -> Result<Vec<Hook>, GitHubError> {
        self.get(&format!("/repos/{org}/{repo}/hooks")).await
    }

    /// Current rate-limit quotas. Diagnostic only.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports an error.
    pub async fn rate_limits(&self) -> Result<RateLimits, GitHubError> {
        let response: RateLimitResponse = self.get("/rate_limit").await?;
        Ok(response.resources)
    }
}

/// True if the RFC 5988 `Link` header advertises a `rel="next"` page.
fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|link| link.split(',').any(|part| part.contains("rel=\"next\"")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_requires_token() {
        let result = GitHubClient::new("");
        assert!(matches!(result, Err(GitHubError::Auth(_))));
    }

    #[test]
    fn test_new_client_with_token() {
        assert!(GitHubClient::new("ghp_test").is_ok());
    }

    #[test]
    fn test_has_next_page() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://api.github.com/orgs/acme/repos?page=2>; rel=\"next\", \
                 <https://api.github.com/orgs/acme/repos?page=5>; rel=\"last\"",
            ),
        );
        assert!(has_next_page(&headers));
    }

    #[test]
    fn test_has_next_page_last_page() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://api.github.com/orgs/acme/repos?page=4>; rel=\"prev\", \
                 <https://api.github.com/orgs/acme/repos?page=1>; rel=\"first\"",
            ),
        );
        assert!(!has_next_page(&headers));
    }

    #[test]
    fn test_has_next_page_no_link_header() {
        assert!(!has_next_page(&HeaderMap::new()));
    }
}
