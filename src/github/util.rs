//! GitHub API utilities

use crate::github::error::GitHubResult;
use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn an async task for GitHub API operations.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Awaits a fetch task, flattening the channel error into [`GitHubError`](crate::github::GitHubError).
pub async fn join_task<T>(task: AsyncTask<GitHubResult<T>>) -> GitHubResult<T>
where
    T: Send + 'static,
{
    task.await?
}
