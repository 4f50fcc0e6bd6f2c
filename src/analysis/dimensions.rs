//! Per-dimension scores
//!
//! Each dimension has its own baseline and weight table and never looks at
//! another dimension's result, so the five scores can disagree with the
//! overall score's weighting.

use chrono::{DateTime, Utc};

use crate::analysis::score::{Scaled, clamp_score, first_above, first_below, flag};
use crate::analysis::types::{Dimension, DimensionScore, MetricsSnapshot};

#[derive(Debug, Clone)]
pub struct CodeQualityWeights {
    pub baseline: f64,
    pub per_language: f64,
    pub language_cap: f64,
    pub issues_enabled: f64,
    pub frameworks: f64,
    pub directories: [(u32, f64); 3],
    pub small_repo_files: u32,
    pub small_repo_bonus: f64,
    pub huge_repo_files: u32,
    pub huge_repo_penalty: f64,
}

pub const CODE_QUALITY_WEIGHTS: CodeQualityWeights = CodeQualityWeights {
    baseline: 60.0,
    per_language: 3.0,
    language_cap: 10.0,
    issues_enabled: 5.0,
    frameworks: 8.0,
    directories: [(10, 8.0), (5, 5.0), (2, 2.0)],
    small_repo_files: 100,
    small_repo_bonus: 5.0,
    huge_repo_files: 1000,
    huge_repo_penalty: 5.0,
};

#[derive(Debug, Clone)]
pub struct DocumentationWeights {
    pub baseline: f64,
    pub readme: f64,
    pub changelog: f64,
    pub contributing: f64,
    pub wiki: f64,
    pub markdown_files: [(u32, f64); 2],
}

pub const DOCUMENTATION_WEIGHTS: DocumentationWeights = DocumentationWeights {
    baseline: 30.0,
    readme: 30.0,
    changelog: 20.0,
    contributing: 15.0,
    wiki: 10.0,
    markdown_files: [(5, 10.0), (2, 5.0)],
};

#[derive(Debug, Clone)]
pub struct TestingWeights {
    pub baseline: f64,
    pub tests: f64,
    /// Only awarded when tests are present
    pub test_ratio: [(f64, f64); 3],
    pub ci: f64,
}

pub const TESTING_WEIGHTS: TestingWeights = TestingWeights {
    baseline: 40.0,
    tests: 35.0,
    test_ratio: [(0.2, 15.0), (0.1, 10.0), (0.05, 5.0)],
    ci: 20.0,
};

#[derive(Debug, Clone)]
pub struct GitPracticesWeights {
    pub baseline: f64,
    pub commits: [(u32, f64); 3],
    pub push_recency_days: [(f64, f64); 3],
    pub branches: [(u32, f64); 2],
    pub merged_prs: [(u32, f64); 2],
}

pub const GIT_PRACTICES_WEIGHTS: GitPracticesWeights = GitPracticesWeights {
    baseline: 50.0,
    commits: [(500, 20.0), (100, 15.0), (20, 8.0)],
    push_recency_days: [(7.0, 15.0), (30.0, 10.0), (90.0, 5.0)],
    branches: [(8, 10.0), (3, 5.0)],
    merged_prs: [(20, 10.0), (5, 5.0)],
};

#[derive(Debug, Clone)]
pub struct CommunityWeights {
    pub baseline: f64,
    pub stars: Scaled,
    pub contributors: Scaled,
    pub forks: Scaled,
}

pub const COMMUNITY_WEIGHTS: CommunityWeights = CommunityWeights {
    baseline: 40.0,
    stars: Scaled {
        divisor: 500.0,
        weight: 30.0,
    },
    contributors: Scaled {
        divisor: 50.0,
        weight: 20.0,
    },
    forks: Scaled {
        divisor: 200.0,
        weight: 20.0,
    },
};

pub(crate) fn code_quality(s: &MetricsSnapshot) -> u8 {
    let w = &CODE_QUALITY_WEIGHTS;
    let mut score = w.baseline;
    score += (s.languages.len() as f64 * w.per_language).min(w.language_cap);
    score += flag(s.has_issues, w.issues_enabled);
    score += flag(!s.frameworks.is_empty(), w.frameworks);
    score += first_above(s.directory_count, &w.directories);
    if s.file_count < w.small_repo_files {
        score += w.small_repo_bonus;
    } else if s.file_count > w.huge_repo_files {
        score -= w.huge_repo_penalty;
    }
    clamp_score(score)
}

pub(crate) fn documentation(s: &MetricsSnapshot) -> u8 {
    let w = &DOCUMENTATION_WEIGHTS;
    let score = w.baseline
        + flag(s.has_readme, w.readme)
        + flag(s.has_changelog, w.changelog)
        + flag(s.has_contributing, w.contributing)
        + flag(s.has_wiki, w.wiki)
        + first_above(s.markdown_files(), &w.markdown_files);
    clamp_score(score)
}

pub(crate) fn testing(s: &MetricsSnapshot) -> u8 {
    let w = &TESTING_WEIGHTS;
    let mut score = w.baseline;
    if s.has_tests {
        score += w.tests + first_above(s.test_ratio(), &w.test_ratio);
    }
    score += flag(s.has_github_actions, w.ci);
    clamp_score(score)
}

pub(crate) fn git_practices(s: &MetricsSnapshot, now: DateTime<Utc>) -> u8 {
    let w = &GIT_PRACTICES_WEIGHTS;
    let score = w.baseline
        + first_above(s.commit_count, &w.commits)
        + first_below(s.days_since_push(now), &w.push_recency_days)
        + first_above(s.branches, &w.branches)
        + first_above(s.prs_merged, &w.merged_prs);
    clamp_score(score)
}

pub(crate) fn community(s: &MetricsSnapshot) -> u8 {
    let w = &COMMUNITY_WEIGHTS;
    let score = w.baseline
        + w.stars.points(s.stars)
        + w.contributors.points(s.contributors)
        + w.forks.points(s.forks);
    clamp_score(score)
}

fn dimension_score(name: Dimension, score: u8) -> DimensionScore {
    DimensionScore {
        name,
        score,
        description: name.description().to_string(),
        color: name.color().to_string(),
    }
}

/// The five dimension scores in fixed order, evaluated at `now`.
#[must_use]
pub fn compute_dimensions_at(snapshot: &MetricsSnapshot, now: DateTime<Utc>) -> Vec<DimensionScore> {
    Dimension::ALL
        .iter()
        .map(|&dimension| {
            let score = match dimension {
                Dimension::CodeQuality => code_quality(snapshot),
                Dimension::Documentation => documentation(snapshot),
                Dimension::Testing => testing(snapshot),
                Dimension::GitPractices => git_practices(snapshot, now),
                Dimension::Community => community(snapshot),
            };
            dimension_score(dimension, score)
        })
        .collect()
}

/// The five dimension scores in fixed order, evaluated at the current time.
#[must_use]
pub fn compute_dimensions(snapshot: &MetricsSnapshot) -> Vec<DimensionScore> {
    compute_dimensions_at(snapshot, Utc::now())
}
