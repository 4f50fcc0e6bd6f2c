//! Deterministic substitutes used when text generation is unavailable

use crate::analysis::{
    Assessment, Difficulty, MetricsSnapshot, Priority, RoadmapCategory, RoadmapItem, Tier,
};

/// Below this overall score the roadmap also suggests a structural refactor.
const REFACTOR_SCORE_THRESHOLD: u8 = 70;

/// Summary paragraph chosen by repository condition.
#[must_use]
pub fn fallback_summary(snapshot: &MetricsSnapshot, score: u8) -> String {
    if snapshot.archived {
        return "This repository is archived. It's no longer actively maintained. Consider \
                exploring actively maintained alternatives if you need an updated version for \
                production use."
            .to_string();
    }

    if snapshot.file_count == 0 {
        return "This repository appears to be empty or has no accessible files. Check if it's \
                properly initialized and contains project files."
            .to_string();
    }

    let tier = Tier::from_score(score);
    if snapshot.has_readme && snapshot.has_tests && snapshot.has_github_actions {
        format!(
            "{tier}-tier repository with solid engineering practices. Has documentation, test \
             coverage, and automated workflows. Consider adding more comprehensive tests and \
             detailed contribution guidelines to reach Expert level."
        )
    } else {
        format!(
            "{tier}-tier repository with potential for improvement. Prioritize adding \
             comprehensive documentation (README), setting up tests, and establishing CI/CD \
             workflows to increase code reliability and attract contributors."
        )
    }
}

/// Generic strengths and weaknesses. Intentionally not derived from the snapshot.
#[must_use]
pub fn fallback_assessment() -> Assessment {
    Assessment {
        strengths: vec![
            "Well-maintained repository structure".to_string(),
            "Active development pattern".to_string(),
            "Proper open source setup".to_string(),
        ],
        weaknesses: vec![
            "Consider expanding test coverage".to_string(),
            "Documentation could be improved".to_string(),
            "Review dependency management".to_string(),
        ],
    }
}

fn item(
    title: &str,
    description: &str,
    difficulty: Difficulty,
    priority: Priority,
    time_estimate: &str,
    category: RoadmapCategory,
    impact: &str,
) -> RoadmapItem {
    RoadmapItem {
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
        priority,
        time_estimate: time_estimate.to_string(),
        category,
        impact: impact.to_string(),
    }
}

/// Rule-based roadmap: README, tests, CI, docs, then an optional refactor.
#[must_use]
pub fn fallback_roadmap(snapshot: &MetricsSnapshot, score: u8) -> Vec<RoadmapItem> {
    let mut roadmap = Vec::with_capacity(5);

    if !snapshot.has_readme {
        roadmap.push(item(
            "Create Comprehensive README",
            "Add a detailed README with project overview, installation instructions, and usage examples",
            Difficulty::Easy,
            Priority::Critical,
            "1-2 hours",
            RoadmapCategory::Documentation,
            "+15 points - Improves project discoverability",
        ));
    }

    if !snapshot.has_tests {
        roadmap.push(item(
            "Add Unit Tests",
            "Write test cases for core functionality with at least 50% coverage",
            Difficulty::Medium,
            Priority::Critical,
            "4-6 hours",
            RoadmapCategory::Testing,
            "+20 points - Increases code reliability",
        ));
    }

    if !snapshot.has_github_actions {
        roadmap.push(item(
            "Setup CI/CD Pipeline",
            "Configure GitHub Actions for automated testing and deployment",
            Difficulty::Medium,
            Priority::High,
            "2-3 hours",
            RoadmapCategory::DevOps,
            "+12 points - Ensures code quality",
        ));
    }

    roadmap.push(item(
        "Improve Code Documentation",
        "Add inline comments and docstrings to complex functions",
        Difficulty::Easy,
        Priority::High,
        "2-3 hours",
        RoadmapCategory::Documentation,
        "+8 points - Better maintainability",
    ));

    if score < REFACTOR_SCORE_THRESHOLD {
        roadmap.push(item(
            "Refactor Code Structure",
            "Organize code into logical modules and improve naming conventions",
            Difficulty::Hard,
            Priority::High,
            "6-8 hours",
            RoadmapCategory::CodeQuality,
            "+15 points - Better organization",
        ));
    }

    roadmap
}
