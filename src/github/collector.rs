//! Complete metrics collection for one repository

use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use log::{debug, warn};
use std::future::Future;

use crate::analysis::MetricsSnapshot;
use crate::github::client::GitHubClient;
use crate::github::error::GitHubResult;
use crate::github::get_repository::RepositoryInfo;
use crate::github::get_tree::RepositoryTree;
use crate::github::metrics::{
    analyze_package_json, analyze_tree, commit_count, count_commit_windows,
    detect_test_frameworks, pull_request_stats,
};
use crate::github::util::join_task;
use crate::runtime::AsyncTask;

/// Files probed on the default branch: README, LICENSE, CHANGELOG, CONTRIBUTING, tests
const PROBED_PATHS: [&str; 5] = ["README.md", "LICENSE", "CHANGELOG.md", "CONTRIBUTING.md", "test"];

/// Produces a [`MetricsSnapshot`] for a repository
pub trait MetricsSource: Send + Sync {
    fn get_complete_metrics(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = GitHubResult<MetricsSnapshot>> + Send;
}

/// Collects metrics from the GitHub REST API.
///
/// Only the repository metadata request is required. Every other sub-fetch
/// degrades to an empty value and a warning.
#[derive(Clone, Debug)]
pub struct GitHubMetricsCollector {
    client: GitHubClient,
}

async fn or_default<T>(task: AsyncTask<GitHubResult<T>>, what: &str, full_name: &str) -> T
where
    T: Default + Send + 'static,
{
    match join_task(task).await {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to fetch {what} for {full_name}: {e}");
            T::default()
        }
    }
}

impl GitHubMetricsCollector {
    #[must_use]
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    /// Fans out every sub-fetch concurrently and assembles the snapshot,
    /// with activity windows measured from `now`.
    pub async fn get_complete_metrics_at(
        &self,
        owner: &str,
        name: &str,
        now: DateTime<Utc>,
    ) -> GitHubResult<MetricsSnapshot> {
        let gh = &self.client;
        let full_name = format!("{owner}/{name}");
        debug!("Collecting metrics for {full_name}");

        // Spawning starts the requests; they run while metadata is awaited.
        let repository = gh.get_repository(owner, name);
        let languages = gh.get_languages(owner, name);
        let contributors = gh.count_contributors(owner, name);
        let workflows = gh.list_workflows(owner, name);
        let branches = gh.list_branch_names(owner, name);
        let pulls = gh.list_closed_pulls(owner, name);
        let package_json = gh.read_text_file(owner, name, "package.json");
        let readme = gh.read_text_file(owner, name, "README.md");
        let commits = gh.list_commits_since(owner, name, now - Duration::days(365));
        let history = gh.commit_history(owner, name);
        let probes: Vec<AsyncTask<bool>> = PROBED_PATHS
            .iter()
            .map(|path| gh.path_exists(owner, name, *path))
            .collect();

        let info: RepositoryInfo = join_task(repository).await?;
        // An empty repository has no default branch and therefore no tree.
        let tree = if info.default_branch.is_empty() {
            AsyncTask::ready(Ok(RepositoryTree::default()))
        } else {
            gh.get_tree(owner, name, info.default_branch.clone())
        };

        let languages = or_default(languages, "languages", &full_name).await;
        let contributors = or_default(contributors, "contributors", &full_name).await;
        let workflows = or_default(workflows, "workflows", &full_name).await;
        let branches = or_default(branches, "branches", &full_name).await;
        let pulls = or_default(pulls, "pull requests", &full_name).await;
        let package_json = or_default(package_json, "package.json", &full_name).await;
        let readme = or_default(readme, "README", &full_name).await;
        let commits = or_default(commits, "commit activity", &full_name).await;
        let history = or_default(history, "commit history", &full_name).await;
        let tree = or_default(tree, "file tree", &full_name).await;

        let mut present = [false; PROBED_PATHS.len()];
        for (slot, found) in present.iter_mut().zip(join_all(probes).await) {
            *slot = found.unwrap_or(false);
        }
        let [has_readme, has_license, has_changelog, has_contributing, has_tests] = present;

        if tree.truncated {
            warn!("File tree for {full_name} was truncated by GitHub; counts are partial");
        }
        let tree = analyze_tree(&tree.tree);
        let windows = count_commit_windows(commits.iter().filter_map(|c| c.authored_at), now);
        let pr_stats = pull_request_stats(&pulls);
        let dependencies = package_json
            .as_deref()
            .map(analyze_package_json)
            .unwrap_or_default();

        let created_at = info.created_at.unwrap_or(now);
        let updated_at = info.updated_at.unwrap_or(created_at);
        // Imported repositories can report a push older than their creation.
        let pushed_at = info.pushed_at.unwrap_or(created_at).max(created_at);

        let snapshot = MetricsSnapshot {
            id: info.id,
            owner: if info.owner.login.is_empty() {
                owner.to_string()
            } else {
                info.owner.login
            },
            name: if info.name.is_empty() {
                name.to_string()
            } else {
                info.name
            },
            description: info.description.unwrap_or_default(),
            url: info.html_url,
            created_at,
            updated_at,
            pushed_at,
            language: info.language,
            size_kb: info.size,
            default_branch: info.default_branch,

            stars: info.stargazers_count,
            forks: info.forks_count,
            watchers: info.watchers_count,
            issues_open: info.open_issues_count,

            has_wiki: info.has_wiki,
            has_issues: info.has_issues,
            has_discussions: info.has_discussions,
            has_pages: info.has_pages,

            file_count: tree.file_count,
            directory_count: tree.directory_count,
            branches: branches.len() as u32,
            contributors,
            test_frameworks: detect_test_frameworks(&tree.files_by_type),
            files_by_type: tree.files_by_type,
            languages,
            config_files: tree.config_files,

            has_readme,
            readme_length: readme.map_or(0, |text| text.chars().count() as u32),
            has_license,
            has_changelog,
            has_contributing,
            topics: info.topics,

            has_tests,
            test_files: tree.test_files,
            has_github_actions: !workflows.is_empty(),
            workflow_count: workflows.len() as u32,

            prs_merged: pr_stats.merged,
            pr_average_review_hours: pr_stats.average_review_hours,

            dependencies_total: dependencies.total,
            dependencies_outdated: dependencies.outdated,
            frameworks: dependencies.frameworks,

            commit_count: commit_count(history.total, &windows, history.latest.is_some()),
            latest_commit_date: history.latest.as_ref().and_then(|c| c.authored_at),
            latest_commit_message: history.latest.map(|c| c.message).unwrap_or_default(),
            commits_last_week: windows.last_week,
            commits_last_month: windows.last_month,

            archived: info.archived,
            disabled: info.disabled,
            private: info.private,
        };

        debug!(
            "Collected {full_name}: {} files, {} contributors, {} commits in the last year",
            snapshot.file_count, snapshot.contributors, windows.last_year
        );
        Ok(snapshot)
    }
}

impl MetricsSource for GitHubMetricsCollector {
    async fn get_complete_metrics(&self, owner: &str, name: &str) -> GitHubResult<MetricsSnapshot> {
        self.get_complete_metrics_at(owner, name, Utc::now()).await
    }
}
