//! Repository read methods used by metrics collection

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::get_repository::RepositoryInfo;
use crate::github::get_tree::RepositoryTree;
use crate::github::list_commits::{CommitHistory, CommitInfo};
use crate::github::list_pull_requests::PullTiming;
use crate::github::list_workflows::WorkflowInfo;
use crate::runtime::AsyncTask;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

impl GitHubClient {
    /// Get repository metadata
    pub fn get_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<RepositoryInfo, GitHubError>> {
        crate::github::get_repository::get_repository(self.inner.clone(), owner, repo)
    }

    /// Get bytes of code per language
    pub fn get_languages(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<BTreeMap<String, u64>, GitHubError>> {
        crate::github::get_languages::get_languages(self.inner.clone(), owner, repo)
    }

    /// Count contributors (first page)
    pub fn count_contributors(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<u32, GitHubError>> {
        crate::github::list_contributors::count_contributors(self.inner.clone(), owner, repo)
    }

    /// List GitHub Actions workflows
    pub fn list_workflows(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<WorkflowInfo>, GitHubError>> {
        crate::github::list_workflows::list_workflows(self.inner.clone(), owner, repo)
    }

    /// List branch names (first page)
    pub fn list_branch_names(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<String>, GitHubError>> {
        crate::github::list_branches::list_branch_names(self.inner.clone(), owner, repo)
    }

    /// Get the recursive tree of a branch or sha
    pub fn get_tree(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        reference: impl Into<String>,
    ) -> AsyncTask<Result<RepositoryTree, GitHubError>> {
        crate::github::get_tree::get_tree(self.inner.clone(), owner, repo, reference)
    }

    /// List closed pull request timings (first page)
    pub fn list_closed_pulls(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<PullTiming>, GitHubError>> {
        crate::github::list_pull_requests::list_closed_pulls(self.inner.clone(), owner, repo)
    }

    /// List commits since a point in time (first page)
    pub fn list_commits_since(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        since: DateTime<Utc>,
    ) -> AsyncTask<Result<Vec<CommitInfo>, GitHubError>> {
        crate::github::list_commits::list_commits_since(self.inner.clone(), owner, repo, since)
    }

    /// Most recent commit and total commit count of the default branch
    pub fn commit_history(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<CommitHistory, GitHubError>> {
        crate::github::list_commits::commit_history(self.inner.clone(), owner, repo)
    }

    /// Whether a path exists on the default branch
    pub fn path_exists(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> AsyncTask<bool> {
        crate::github::get_file_contents::path_exists(self.inner.clone(), owner, repo, path)
    }

    /// Decoded text of a file, `None` when missing
    pub fn read_text_file(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> AsyncTask<Result<Option<String>, GitHubError>> {
        crate::github::get_file_contents::read_text_file(self.inner.clone(), owner, repo, path)
    }
}
