//! GitHub repository language breakdown operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Bytes of code per language.
pub(crate) fn get_languages(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<BTreeMap<String, u64>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/languages");
        let languages: BTreeMap<String, u64> = inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)?;
        Ok(languages)
    })
}
