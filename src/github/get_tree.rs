//! GitHub recursive git tree retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// One entry of a git tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    /// `blob`, `tree` or `commit` (submodule)
    #[serde(rename = "type")]
    pub kind: String,
}

impl TreeEntry {
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == "blob"
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == "tree"
    }
}

/// Recursive tree listing; `truncated` is set when GitHub cut it short
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepositoryTree {
    pub tree: Vec<TreeEntry>,
    pub truncated: bool,
}

/// Get the full tree of `reference` (a branch name or sha).
pub(crate) fn get_tree(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    reference: impl Into<String>,
) -> AsyncTask<Result<RepositoryTree, GitHubError>> {
    let (owner, repo, reference) = (owner.into(), repo.into(), reference.into());

    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/git/trees/{reference}?recursive=1");
        let tree: RepositoryTree = inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)?;
        Ok(tree)
    })
}
