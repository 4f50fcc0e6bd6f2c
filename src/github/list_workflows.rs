//! GitHub Actions workflow listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// One configured workflow
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkflowInfo {
    pub name: String,
    pub path: String,
    pub state: String,
}

#[derive(Deserialize)]
struct WorkflowList {
    #[serde(default)]
    workflows: Vec<WorkflowInfo>,
}

/// List configured workflows.
pub(crate) fn list_workflows(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<WorkflowInfo>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/actions/workflows");
        let list: WorkflowList = inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)?;
        Ok(list.workflows)
    })
}
