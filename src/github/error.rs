//! GitHub API error types

use thiserror::Error;

/// Error types for metrics collection against the GitHub API
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Generic GitHub API error
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Background fetch task was dropped before completing
    #[error("Fetch task failed: {0}")]
    Task(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// True when GitHub answered with 404 for the requested resource
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            GitHubError::NotFound(_) => true,
            GitHubError::Octocrab(octocrab::Error::GitHub { source, .. }) => {
                source.status_code.as_u16() == 404
            }
            _ => false,
        }
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for GitHubError {
    fn from(e: tokio::sync::oneshot::error::RecvError) -> Self {
        GitHubError::Task(e.to_string())
    }
}
