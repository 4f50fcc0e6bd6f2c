//! GitHub closed pull request listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use chrono::{DateTime, Utc};
use octocrab::{Octocrab, params};
use std::sync::Arc;

/// Open and merge timestamps of one pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullTiming {
    pub created_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
}

/// Most recently updated closed pull requests, first page only (up to 100).
pub(crate) fn list_closed_pulls(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<PullTiming>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(async move {
        let pulls = inner
            .pulls(&owner, &repo)
            .list()
            .state(params::State::Closed)
            .sort(params::pulls::Sort::Updated)
            .per_page(100)
            .send()
            .await
            .map_err(GitHubError::from)?
            .items;

        Ok(pulls
            .into_iter()
            .map(|pr| PullTiming {
                created_at: pr.created_at,
                merged_at: pr.merged_at,
            })
            .collect())
    })
}
