//! Overall quality score
//!
//! The score starts from a fixed baseline and accumulates five independently
//! capped groups of points, then subtracts lifecycle penalties. Every weight
//! lives in [`SCORE_WEIGHTS`] so each term can be checked on its own.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::types::{MetricsSnapshot, Tier};

/// Linear contribution that saturates at `weight`
#[derive(Debug, Clone, Copy)]
pub struct Scaled {
    pub divisor: f64,
    pub weight: f64,
}

impl Scaled {
    #[must_use]
    pub fn points(&self, count: u32) -> f64 {
        (f64::from(count) / self.divisor * self.weight).min(self.weight)
    }
}

/// Points of the first step whose threshold `value` strictly exceeds.
pub(crate) fn first_above<T: PartialOrd + Copy>(value: T, steps: &[(T, f64)]) -> f64 {
    steps
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(0.0, |(_, points)| *points)
}

/// Points of the first step whose threshold `value` is strictly below.
pub(crate) fn first_below(value: f64, steps: &[(f64, f64)]) -> f64 {
    steps
        .iter()
        .find(|(threshold, _)| value < *threshold)
        .map_or(0.0, |(_, points)| *points)
}

pub(crate) fn flag(set: bool, points: f64) -> f64 {
    if set { points } else { 0.0 }
}

/// Clamp to `[0, 100]` and round half away from zero.
pub(crate) fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Weight table for the overall score
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub baseline: f64,

    // Organization & structure
    pub readme: f64,
    pub license: f64,
    pub contributing: f64,
    pub file_count: Scaled,
    pub directory_threshold: u32,
    pub directory_bonus: f64,

    // Documentation quality
    pub readme_docs: f64,
    pub changelog: f64,
    pub markdown_threshold: u32,
    pub markdown_bonus: f64,
    pub wiki: f64,

    // Testing & automation
    pub tests: f64,
    pub test_ratio_threshold: f64,
    pub test_ratio_bonus: f64,
    pub ci: f64,

    // Community engagement
    pub stars: Scaled,
    pub contributors: Scaled,
    pub forks: Scaled,

    // Maintenance & activity
    pub recency_days: [(f64, f64); 4],
    pub monthly_commit_threshold: u32,
    pub monthly_commit_bonus: f64,
    pub weekly_commit_bonus: f64,
    pub per_language: f64,
    pub language_cap: f64,
    pub frameworks: f64,
    pub branches: [(u32, f64); 2],

    // Penalties
    pub archived: f64,
    pub disabled: f64,
    pub private: f64,
    pub no_commits: f64,
    pub large_repo_files: u32,
    pub large_repo_without_readme: f64,
}

pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    baseline: 50.0,

    readme: 8.0,
    license: 5.0,
    contributing: 4.0,
    file_count: Scaled {
        divisor: 500.0,
        weight: 8.0,
    },
    directory_threshold: 5,
    directory_bonus: 2.0,

    readme_docs: 5.0,
    changelog: 5.0,
    markdown_threshold: 2,
    markdown_bonus: 5.0,
    wiki: 5.0,

    tests: 12.0,
    test_ratio_threshold: 0.1,
    test_ratio_bonus: 8.0,
    ci: 10.0,

    stars: Scaled {
        divisor: 200.0,
        weight: 8.0,
    },
    contributors: Scaled {
        divisor: 30.0,
        weight: 7.0,
    },
    forks: Scaled {
        divisor: 100.0,
        weight: 5.0,
    },

    recency_days: [(7.0, 8.0), (30.0, 6.0), (90.0, 4.0), (180.0, 2.0)],
    monthly_commit_threshold: 5,
    monthly_commit_bonus: 5.0,
    weekly_commit_bonus: 2.0,
    per_language: 2.0,
    language_cap: 5.0,
    frameworks: 3.0,
    branches: [(5, 3.0), (2, 1.0)],

    archived: 40.0,
    disabled: 35.0,
    private: 15.0,
    no_commits: 20.0,
    large_repo_files: 50,
    large_repo_without_readme: 10.0,
};

/// Per-group contributions to the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub baseline: f64,
    pub organization: f64,
    pub documentation: f64,
    pub testing: f64,
    pub community: f64,
    pub maintenance: f64,
    /// Total subtracted, as a non-negative number
    pub penalties: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn raw_total(&self) -> f64 {
        self.baseline
            + self.organization
            + self.documentation
            + self.testing
            + self.community
            + self.maintenance
            - self.penalties
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        clamp_score(self.raw_total())
    }
}

pub(crate) fn organization_points(s: &MetricsSnapshot, w: &ScoreWeights) -> f64 {
    flag(s.has_readme, w.readme)
        + flag(s.has_license, w.license)
        + flag(s.has_contributing, w.contributing)
        + w.file_count.points(s.file_count)
        + flag(s.directory_count > w.directory_threshold, w.directory_bonus)
}

pub(crate) fn documentation_points(s: &MetricsSnapshot, w: &ScoreWeights) -> f64 {
    flag(s.has_readme, w.readme_docs)
        + flag(s.has_changelog, w.changelog)
        + flag(s.markdown_files() > w.markdown_threshold, w.markdown_bonus)
        + flag(s.has_wiki, w.wiki)
}

pub(crate) fn testing_points(s: &MetricsSnapshot, w: &ScoreWeights) -> f64 {
    flag(s.has_tests, w.tests)
        + flag(s.test_ratio() > w.test_ratio_threshold, w.test_ratio_bonus)
        + flag(s.has_github_actions, w.ci)
}

pub(crate) fn community_points(s: &MetricsSnapshot, w: &ScoreWeights) -> f64 {
    w.stars.points(s.stars) + w.contributors.points(s.contributors) + w.forks.points(s.forks)
}

pub(crate) fn maintenance_points(s: &MetricsSnapshot, w: &ScoreWeights, now: DateTime<Utc>) -> f64 {
    let recency = first_below(s.days_since_update(now), &w.recency_days);
    let velocity = flag(
        s.commits_last_month > w.monthly_commit_threshold,
        w.monthly_commit_bonus,
    ) + flag(s.commits_last_week > 0, w.weekly_commit_bonus);
    let languages = (s.languages.len() as f64 * w.per_language).min(w.language_cap);
    let frameworks = flag(!s.frameworks.is_empty(), w.frameworks);
    let branches = first_above(s.branches, &w.branches);

    recency + velocity + languages + frameworks + branches
}

pub(crate) fn penalty_points(s: &MetricsSnapshot, w: &ScoreWeights) -> f64 {
    flag(s.archived, w.archived)
        + flag(s.disabled, w.disabled)
        + flag(s.private, w.private)
        + flag(s.commit_count == 0, w.no_commits)
        + flag(
            !s.has_readme && s.file_count > w.large_repo_files,
            w.large_repo_without_readme,
        )
}

/// Computes every group of the overall score relative to `now`.
#[must_use]
pub fn score_breakdown(snapshot: &MetricsSnapshot, now: DateTime<Utc>) -> ScoreBreakdown {
    let w = &SCORE_WEIGHTS;
    ScoreBreakdown {
        baseline: w.baseline,
        organization: organization_points(snapshot, w),
        documentation: documentation_points(snapshot, w),
        testing: testing_points(snapshot, w),
        community: community_points(snapshot, w),
        maintenance: maintenance_points(snapshot, w, now),
        penalties: penalty_points(snapshot, w),
    }
}

/// Overall score in `[0, 100]`, evaluated at `now`.
#[must_use]
pub fn compute_score_at(snapshot: &MetricsSnapshot, now: DateTime<Utc>) -> u8 {
    score_breakdown(snapshot, now).score()
}

/// Overall score in `[0, 100]`, evaluated at the current time.
#[must_use]
pub fn compute_score(snapshot: &MetricsSnapshot) -> u8 {
    compute_score_at(snapshot, Utc::now())
}

/// Tier for a score, using the shared threshold table.
#[must_use]
pub fn tier_for(score: u8) -> Tier {
    Tier::from_score(score)
}
