//! GitHub repository branches listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Branch names on the first page (up to 100).
pub(crate) fn list_branch_names(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<String>, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let branches = inner
            .repos(&owner, &repo)
            .list_branches()
            .per_page(100)
            .send()
            .await
            .map_err(GitHubError::from)?
            .items;

        Ok(branches.into_iter().map(|b| b.name).collect())
    })
}
