//! GitHub metrics collection
//!
//! Thin fetch operations over octocrab, pure metric helpers, and the
//! collector that assembles a [`MetricsSnapshot`](crate::analysis::MetricsSnapshot).

pub mod client;
pub mod error;
pub mod metrics;
pub mod util;

mod collector;
mod url;

pub use client::{GITHUB_TOKEN_ENV, GitHubClient, GitHubClientBuilder};
pub use collector::{GitHubMetricsCollector, MetricsSource};
pub use error::{GitHubError, GitHubResult};
pub use url::parse_repository_url;
pub use util::spawn_task;

pub use get_repository::{OwnerInfo, RepositoryInfo};
pub use get_tree::{RepositoryTree, TreeEntry};
pub use list_commits::{CommitHistory, CommitInfo};
pub use list_pull_requests::PullTiming;
pub use list_workflows::WorkflowInfo;

// GitHub API operations - Repositories (internal)
pub(crate) mod get_file_contents;
pub(crate) mod get_languages;
pub(crate) mod get_repository;
pub(crate) mod get_tree;
pub(crate) mod list_branches;
pub(crate) mod list_commits;
pub(crate) mod list_contributors;
pub(crate) mod list_pull_requests;
pub(crate) mod list_workflows;
