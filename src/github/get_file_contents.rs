//! GitHub file contents retrieval operations.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Whether `path` exists on the default branch.
///
/// Any failure, not only a 404, counts as absent.
pub(crate) fn path_exists(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
) -> AsyncTask<bool> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    spawn_task(async move {
        inner
            .repos(&owner, &repo)
            .get_content()
            .path(&path)
            .send()
            .await
            .is_ok()
    })
}

/// Decoded text of a single file, `None` when it does not exist.
///
/// A directory or binary file at `path` is an [`GitHubError::Api`] error.
pub(crate) fn read_text_file(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
) -> AsyncTask<Result<Option<String>, GitHubError>> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    spawn_task(async move {
        let result = inner
            .repos(&owner, &repo)
            .get_content()
            .path(&path)
            .send()
            .await;

        match result {
            Ok(items) => match items.items.into_iter().next() {
                None => Ok(None),
                Some(item) => item.decoded_content().map(Some).ok_or_else(|| {
                    GitHubError::Api(format!("{path} in {owner}/{repo} is not a text file"))
                }),
            },
            Err(e) => {
                let err = GitHubError::from(e);
                if err.is_not_found() { Ok(None) } else { Err(err) }
            }
        }
    })
}
