//! Properties of the pure score and dimension calculators.

use super::support::{bare_snapshot, flagship_snapshot, snapshot, t0};
use kodegen_repo_insight::analysis::Dimension;
use kodegen_repo_insight::{MetricsSnapshot, Tier, compute_dimensions_at, compute_score_at};

fn variety() -> Vec<MetricsSnapshot> {
    let mut hostile = snapshot("octo", "hostile");
    hostile.archived = true;
    hostile.disabled = true;
    hostile.private = true;
    hostile.commit_count = 0;
    hostile.file_count = 5_000;

    let mut huge = flagship_snapshot();
    huge.stars = u32::MAX;
    huge.contributors = u32::MAX;
    huge.forks = u32::MAX;
    huge.file_count = u32::MAX;
    huge.test_files = u32::MAX;
    huge.branches = 500;
    huge.frameworks = vec!["React".into()];
    for lang in ["Rust", "Go", "C", "Python"] {
        huge.languages.insert(lang.into(), 1);
    }

    vec![
        MetricsSnapshot::default(),
        snapshot("octo", "plain"),
        bare_snapshot(),
        flagship_snapshot(),
        hostile,
        huge,
    ]
}

#[test]
fn scores_and_dimensions_stay_in_range() {
    for s in variety() {
        let score = compute_score_at(&s, t0());
        assert!(score <= 100, "{} scored {score}", s.name);

        let dims = compute_dimensions_at(&s, t0());
        let names: Vec<Dimension> = dims.iter().map(|d| d.name).collect();
        assert_eq!(names, Dimension::ALL.to_vec());
        assert!(dims.iter().all(|d| d.score <= 100));
    }
}

#[test]
fn calculators_are_idempotent() {
    for s in variety() {
        assert_eq!(compute_score_at(&s, t0()), compute_score_at(&s, t0()));
        assert_eq!(compute_dimensions_at(&s, t0()), compute_dimensions_at(&s, t0()));
    }
}

#[test]
fn adding_a_readme_never_hurts_large_repositories() {
    for mut s in variety() {
        if s.file_count <= 50 {
            continue;
        }
        s.has_readme = false;
        let without = compute_score_at(&s, t0());
        let docs_without = compute_dimensions_at(&s, t0())[1].score;

        s.has_readme = true;
        assert!(compute_score_at(&s, t0()) >= without);
        assert!(compute_dimensions_at(&s, t0())[1].score >= docs_without);
    }
}

#[test]
fn stacked_penalties_clamp_to_zero() {
    let s = MetricsSnapshot {
        archived: true,
        disabled: true,
        private: true,
        commit_count: 0,
        ..snapshot("octo", "doomed")
    };
    assert_eq!(compute_score_at(&s, t0()), 0);
    assert_eq!(Tier::from_score(0), Tier::Beginner);
}

#[test]
fn bare_repository_sits_below_intermediate() {
    // 50 baseline + 8 size + 0.63 community - 10 missing README
    let score = compute_score_at(&bare_snapshot(), t0());
    assert_eq!(score, 49);
    assert_eq!(Tier::from_score(score), Tier::Beginner);
}

#[test]
fn flagship_repository_is_expert() {
    let score = compute_score_at(&flagship_snapshot(), t0());
    assert!(score >= 85, "scored {score}");
    assert_eq!(Tier::from_score(score), Tier::Expert);
}
