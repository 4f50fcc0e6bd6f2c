//! End-to-end behaviour of `AnalysisEngine`.

use super::support::{
    ROADMAP_JSON, ScriptedGenerator, SUMMARY_TEXT, bare_snapshot, flagship_snapshot, orchestrator,
    snapshot, t0,
};
use kodegen_repo_insight::github::GitHubResult;
use kodegen_repo_insight::narrative::{fallback_roadmap, fallback_summary};
use kodegen_repo_insight::{
    AnalysisEngine, AnalysisError, ConfiguredGenerator, GitHubError, ManualClock, MetricsSnapshot,
    MetricsSource, NarrativeConfig, NarrativeOrchestrator, RoadmapItem, Tier,
};
use std::sync::Arc;

struct FixedSource(Option<MetricsSnapshot>);

impl MetricsSource for FixedSource {
    async fn get_complete_metrics(&self, owner: &str, name: &str) -> GitHubResult<MetricsSnapshot> {
        self.0
            .clone()
            .ok_or_else(|| GitHubError::NotFound(format!("{owner}/{name}")))
    }
}

#[tokio::test]
async fn analysis_combines_scores_and_generated_narrative() {
    let (narrative, _clock) = orchestrator(ScriptedGenerator::well_behaved());
    let engine = AnalysisEngine::new(narrative);
    let s = flagship_snapshot();

    let result = engine.analyze(&s).await.unwrap();

    assert_eq!(result.tier, Tier::Expert);
    assert_eq!(result.summary, SUMMARY_TEXT);
    assert_eq!(result.weaknesses, vec!["Few contributors"]);
    let expected: Vec<RoadmapItem> = serde_json::from_str(ROADMAP_JSON).unwrap();
    assert_eq!(result.roadmap, expected);
    assert_eq!(result.dimensions.len(), 5);
    assert_eq!(result.metrics, s);
    assert_eq!(engine.narrative().generator().calls(), 3);

    // Same repository again: everything from cache.
    let again = engine.analyze(&s).await.unwrap();
    assert_eq!(again, result);
    assert_eq!(engine.narrative().generator().calls(), 3);
}

#[tokio::test]
async fn analysis_is_complete_when_generation_always_fails() {
    let (narrative, _clock) = orchestrator(ScriptedGenerator::always_failing());
    let engine = AnalysisEngine::new(narrative);

    let result = engine.analyze(&bare_snapshot()).await.unwrap();

    assert_eq!(result.score, 49);
    assert_eq!(result.tier, Tier::Beginner);
    assert!(!result.summary.is_empty());
    assert!(result.summary.starts_with("Beginner-tier"));
    assert!(!result.strengths.is_empty());
    assert!(!result.weaknesses.is_empty());
    assert_eq!(result.roadmap[0].title, "Create Comprehensive README");
    assert_eq!(result.roadmap[1].title, "Add Unit Tests");
    assert_eq!(result.roadmap[2].title, "Setup CI/CD Pipeline");
}

#[tokio::test]
async fn invalid_snapshot_is_rejected_before_generation() {
    let (narrative, _clock) = orchestrator(ScriptedGenerator::well_behaved());
    let engine = AnalysisEngine::new(narrative);
    let nameless = snapshot("octo", "");

    let err = engine.analyze(&nameless).await.unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidSnapshot { .. }));
    assert_eq!(engine.narrative().generator().calls(), 0);
}

#[tokio::test]
async fn collection_failures_propagate() {
    let (narrative, _clock) = orchestrator(ScriptedGenerator::well_behaved());
    let engine = AnalysisEngine::new(narrative);

    let err = engine
        .analyze_repository(&FixedSource(None), "octo", "missing")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Collection(GitHubError::NotFound(_))
    ));

    let ok = engine
        .analyze_repository(&FixedSource(Some(bare_snapshot())), "octo", "bare")
        .await
        .unwrap();
    assert_eq!(ok.metrics.name, "bare");
}

#[tokio::test]
async fn analysis_without_api_key_uses_fallbacks() {
    let generator = ConfiguredGenerator::Unavailable {
        env_var: "GEMINI_API_KEY".to_string(),
    };
    let engine = AnalysisEngine::new(NarrativeOrchestrator::with_clock(
        generator,
        NarrativeConfig::default(),
        Arc::new(ManualClock::new(t0())),
    ));
    let s = bare_snapshot();

    let result = engine
        .analyze_repository(&FixedSource(Some(s.clone())), "octo", "bare")
        .await
        .unwrap();

    assert_eq!(result.score, 49);
    assert_eq!(result.summary, fallback_summary(&s, 49));
    assert_eq!(result.roadmap, fallback_roadmap(&s, 49));
    assert!(!result.strengths.is_empty());
}
