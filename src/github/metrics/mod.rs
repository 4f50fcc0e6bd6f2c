//! Pure analysis of fetched GitHub data
//!
//! Nothing in here performs I/O; the collector feeds it API payloads.

mod activity;
mod dependencies;
mod tree;

pub use activity::{
    CommitWindows, PullRequestStats, commit_count, count_commit_windows, pull_request_stats,
};
pub use dependencies::{DependencySummary, analyze_package_json, detect_frameworks};
pub use tree::{TreeSummary, analyze_tree, detect_test_frameworks};
