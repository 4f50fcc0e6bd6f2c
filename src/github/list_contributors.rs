//! GitHub repository contributors operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Number of contributors on the first page (up to 100).
pub(crate) fn count_contributors(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<u32, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(async move {
        let page = inner
            .repos(&owner, &repo)
            .list_contributors()
            .per_page(100)
            .send()
            .await
            .map_err(GitHubError::from)?;
        Ok(page.items.len() as u32)
    })
}
