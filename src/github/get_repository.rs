//! GitHub repository metadata retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// Owner block of the repository payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerInfo {
    pub login: String,
}

/// Subset of `GET /repos/{owner}/{repo}` the collector reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepositoryInfo {
    pub id: u64,
    pub name: String,
    pub owner: OwnerInfo,
    pub description: Option<String>,
    pub html_url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub size: u32,
    pub default_branch: String,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub watchers_count: u32,
    pub open_issues_count: u32,
    pub has_wiki: bool,
    pub has_issues: bool,
    pub has_discussions: bool,
    pub has_pages: bool,
    pub archived: bool,
    pub disabled: bool,
    pub private: bool,
    pub topics: Vec<String>,
}

/// Get repository metadata. A missing repository maps to [`GitHubError::NotFound`].
pub(crate) fn get_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<RepositoryInfo, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}");
        match inner.get::<RepositoryInfo, _, ()>(route, None::<&()>).await {
            Ok(info) => Ok(info),
            Err(e) => {
                let err = GitHubError::from(e);
                if err.is_not_found() {
                    Err(GitHubError::NotFound(format!("{owner}/{repo}")))
                } else {
                    Err(err)
                }
            }
        }
    })
}
