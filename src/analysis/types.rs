//! Type definitions for repository analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::github::GitHubError;

/// Errors surfaced by the analysis engine
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid metrics snapshot: {details}")]
    InvalidSnapshot { details: String },

    #[error("Could not fetch repository: {0}")]
    Collection(#[from] GitHubError),
}

pub type EngineResult<T> = Result<T, AnalysisError>;

/// Immutable record of repository facts produced by the collection layer
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsSnapshot {
    // Identity
    pub id: u64,
    pub owner: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    pub language: Option<String>,
    pub size_kb: u32,
    pub default_branch: String,

    // Popularity
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
    pub issues_open: u32,

    // Repository features
    pub has_wiki: bool,
    pub has_issues: bool,
    pub has_discussions: bool,
    pub has_pages: bool,

    // Structure
    pub file_count: u32,
    pub directory_count: u32,
    pub branches: u32,
    pub contributors: u32,
    pub files_by_type: BTreeMap<String, u32>,
    pub languages: BTreeMap<String, u64>,
    pub config_files: Vec<String>,

    // Documentation
    pub has_readme: bool,
    /// Characters in `README.md`, 0 when absent or unreadable
    pub readme_length: u32,
    pub has_license: bool,
    pub has_changelog: bool,
    pub has_contributing: bool,
    pub topics: Vec<String>,

    // Testing and CI
    pub has_tests: bool,
    pub test_files: u32,
    pub test_frameworks: Vec<String>,
    pub has_github_actions: bool,
    pub workflow_count: u32,

    // Collaboration
    pub prs_merged: u32,
    pub pr_average_review_hours: f64,

    // Dependencies
    pub dependencies_total: u32,
    pub dependencies_outdated: u32,
    pub frameworks: Vec<String>,

    // Activity
    pub commit_count: u32,
    pub latest_commit_date: Option<DateTime<Utc>>,
    pub latest_commit_message: String,
    pub commits_last_week: u32,
    pub commits_last_month: u32,

    // Lifecycle
    pub archived: bool,
    pub disabled: bool,
    pub private: bool,
}

impl MetricsSnapshot {
    /// `owner/name`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Number of markdown files in the tree
    #[must_use]
    pub fn markdown_files(&self) -> u32 {
        self.files_by_type.get("md").copied().unwrap_or(0)
    }

    /// Test files per file, with an empty tree counted as one file
    #[must_use]
    pub fn test_ratio(&self) -> f64 {
        f64::from(self.test_files) / f64::from(self.file_count.max(1))
    }

    /// Fractional days elapsed since `updated_at`, relative to `now`
    #[must_use]
    pub fn days_since_update(&self, now: DateTime<Utc>) -> f64 {
        days_between(self.updated_at, now)
    }

    /// Fractional days elapsed since `pushed_at`, relative to `now`
    #[must_use]
    pub fn days_since_push(&self, now: DateTime<Utc>) -> f64 {
        days_between(self.pushed_at, now)
    }

    /// Checks the invariants the collection layer is expected to uphold.
    pub fn validate(&self) -> EngineResult<()> {
        if self.owner.trim().is_empty() || self.name.trim().is_empty() {
            return Err(AnalysisError::InvalidSnapshot {
                details: "owner and name must not be empty".to_string(),
            });
        }
        if self.pushed_at < self.created_at {
            return Err(AnalysisError::InvalidSnapshot {
                details: format!(
                    "pushedAt ({}) precedes createdAt ({}) for {}",
                    self.pushed_at,
                    self.created_at,
                    self.full_name()
                ),
            });
        }
        Ok(())
    }
}

fn days_between(from: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - from).num_milliseconds() as f64 / 86_400_000.0
}

/// Ordered quality labels derived from the overall score
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Lower score bound of each tier, highest first.
pub const TIER_THRESHOLDS: [(u8, Tier); 3] = [
    (85, Tier::Expert),
    (70, Tier::Advanced),
    (50, Tier::Intermediate),
];

impl Tier {
    /// Maps an overall score onto its tier.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map_or(Tier::Beginner, |(_, tier)| *tier)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
            Tier::Expert => "Expert",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five independently scored quality axes, in display order
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    #[serde(rename = "Code Quality")]
    CodeQuality,
    Documentation,
    Testing,
    #[serde(rename = "Git Practices")]
    GitPractices,
    Community,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::CodeQuality,
        Dimension::Documentation,
        Dimension::Testing,
        Dimension::GitPractices,
        Dimension::Community,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::CodeQuality => "Code Quality",
            Dimension::Documentation => "Documentation",
            Dimension::Testing => "Testing",
            Dimension::GitPractices => "Git Practices",
            Dimension::Community => "Community",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Dimension::CodeQuality => "Organization, structure, and consistency",
            Dimension::Documentation => "README, guides, and inline documentation",
            Dimension::Testing => "Test coverage and automation",
            Dimension::GitPractices => "Branching, commits, and PR patterns",
            Dimension::Community => "Engagement and contributor growth",
        }
    }

    /// Display color used by dashboards
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Dimension::CodeQuality => "#00f0ff",
            Dimension::Documentation => "#b537f2",
            Dimension::Testing => "#00ff88",
            Dimension::GitPractices => "#ff6b35",
            Dimension::Community => "#f7b801",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score for a single dimension
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct DimensionScore {
    pub name: Dimension,
    pub score: u8,
    pub description: String,
    pub color: String,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum RoadmapCategory {
    Documentation,
    Testing,
    #[serde(rename = "Code Quality")]
    CodeQuality,
    DevOps,
    Performance,
}

/// One actionable improvement step
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub priority: Priority,
    pub time_estimate: String,
    pub category: RoadmapCategory,
    pub impact: String,
}

/// Strengths and weaknesses pair produced by the narrative layer
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Assessment {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

/// Complete output of one analysis request
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct AnalysisResult {
    pub score: u8,
    pub tier: Tier,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub dimensions: Vec<DimensionScore>,
    pub metrics: MetricsSnapshot,
    pub roadmap: Vec<RoadmapItem>,
}
