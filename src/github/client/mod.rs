//! GitHub API client wrapper
//!
//! Keeps Octocrab out of the public surface. Every fetch used by the metrics
//! collector is exposed as a method returning an [`AsyncTask`](crate::runtime::AsyncTask).
//!
//! ```rust,no_run
//! use kodegen_repo_insight::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::from_env()?;
//!     let repo = gh.get_repository("rust-lang", "cargo").await??;
//!     println!("{} stars", repo.stargazers_count);
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use octocrab::Octocrab;
use std::sync::Arc;

mod repositories;

/// Environment variable holding an optional personal access token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Authenticated when `GITHUB_TOKEN` is set, anonymous otherwise.
    pub fn from_env() -> GitHubResult<Self> {
        let mut builder = Self::builder();
        if let Ok(token) = std::env::var(GITHUB_TOKEN_ENV)
            && !token.trim().is_empty()
        {
            builder = builder.personal_token(token);
        }
        builder.build()
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }
}

/// Builder for creating `GitHubClient`
#[derive(Default)]
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set personal access token for authentication
    #[must_use]
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (GitHub Enterprise or a local mock server)
    #[must_use]
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}
