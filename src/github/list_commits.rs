//! GitHub repository commits listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use std::sync::Arc;

/// The parts of a commit the activity metrics need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub authored_at: Option<DateTime<Utc>>,
    pub message: String,
}

/// Newest-first commits authored after `since`, first page only (up to 100).
pub(crate) fn list_commits_since(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    since: DateTime<Utc>,
) -> AsyncTask<Result<Vec<CommitInfo>, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let commits = inner
            .repos(&owner, &repo)
            .list_commits()
            .since(since)
            .per_page(100)
            .send()
            .await
            .map_err(GitHubError::from)?
            .items;

        Ok(commits
            .into_iter()
            .map(|c| CommitInfo {
                authored_at: c.commit.author.as_ref().and_then(|a| a.date),
                message: c.commit.message,
                sha: c.sha,
            })
            .collect())
    })
}

/// Latest commit plus the total commit count of the default branch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitHistory {
    pub latest: Option<CommitInfo>,
    pub total: u32,
}

/// Most recent commit and total commit count.
///
/// Requests a single-item page, so the page number of the `last` link in the
/// response is the number of commits. Without a `last` link every commit fit
/// on the one page.
pub(crate) fn commit_history(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<CommitHistory, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let page = inner
            .repos(&owner, &repo)
            .list_commits()
            .per_page(1)
            .send()
            .await
            .map_err(GitHubError::from)?;

        let total = page
            .number_of_pages()
            .unwrap_or(page.items.len() as u32);

        Ok(CommitHistory {
            latest: page.items.into_iter().next().map(|c| CommitInfo {
                authored_at: c.commit.author.as_ref().and_then(|a| a.date),
                message: c.commit.message,
                sha: c.sha,
            }),
            total,
        })
    })
}
