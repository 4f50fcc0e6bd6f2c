//! Repository analysis
//!
//! Pure scoring lives in [`score`] and [`dimensions`]; [`AnalysisEngine`]
//! combines them with the narrative layer into one [`AnalysisResult`].
//! [`advanced`] holds the snapshot-only security, complexity, performance and
//! code review heuristics.

mod advanced;
mod dimensions;
mod score;
mod types;

pub use advanced::{
    ADVANCED_THRESHOLDS, AdvancedAnalysis, AdvancedThresholds, COMPLEXITY_WEIGHTS, CodeComplexity,
    CodeReviewSuggestion, ComplexityLevel, ComplexityMetrics, ComplexityWeights,
    PERFORMANCE_WEIGHTS, PerformanceAnalysis, PerformanceMetrics, PerformanceWeights,
    SecurityVulnerability, SuggestionSeverity, VulnerabilitySeverity, advanced_analysis,
    analyze_complexity, analyze_performance, analyze_security, code_review_suggestions,
};
pub use dimensions::{
    CODE_QUALITY_WEIGHTS, COMMUNITY_WEIGHTS, CodeQualityWeights, CommunityWeights,
    DOCUMENTATION_WEIGHTS, DocumentationWeights, GIT_PRACTICES_WEIGHTS, GitPracticesWeights,
    TESTING_WEIGHTS, TestingWeights, compute_dimensions, compute_dimensions_at,
};
pub use score::{
    SCORE_WEIGHTS, ScoreBreakdown, ScoreWeights, Scaled, compute_score, compute_score_at,
    score_breakdown, tier_for,
};
pub use types::{
    AnalysisError, AnalysisResult, Assessment, Difficulty, Dimension, DimensionScore,
    EngineResult, MetricsSnapshot, Priority, RoadmapCategory, RoadmapItem, TIER_THRESHOLDS, Tier,
};

use log::info;

use crate::generator::TextGenerator;
use crate::github::MetricsSource;
use crate::narrative::NarrativeOrchestrator;

/// Composition root for a full analysis
pub struct AnalysisEngine<G> {
    narrative: NarrativeOrchestrator<G>,
}

impl<G: TextGenerator> AnalysisEngine<G> {
    pub fn new(narrative: NarrativeOrchestrator<G>) -> Self {
        Self { narrative }
    }

    #[must_use]
    pub fn narrative(&self) -> &NarrativeOrchestrator<G> {
        &self.narrative
    }

    /// Scores the snapshot and gathers the three narrative artifacts.
    ///
    /// Narrative failures never surface here; they are replaced by fallbacks.
    /// The only error is a snapshot that fails validation.
    pub async fn analyze(&self, snapshot: &MetricsSnapshot) -> EngineResult<AnalysisResult> {
        snapshot.validate()?;

        let now = self.narrative.clock().now();
        let score = compute_score_at(snapshot, now);
        let tier = Tier::from_score(score);
        let dimensions = compute_dimensions_at(snapshot, now);

        let (summary, assessment, roadmap) = tokio::join!(
            self.narrative.summary(snapshot, score),
            self.narrative.strengths_and_weaknesses(snapshot),
            self.narrative.roadmap(snapshot, score),
        );

        info!(
            "Analyzed {}: score {score} ({tier}), {} roadmap items",
            snapshot.full_name(),
            roadmap.len()
        );

        Ok(AnalysisResult {
            score,
            tier,
            summary,
            strengths: assessment.strengths,
            weaknesses: assessment.weaknesses,
            dimensions,
            metrics: snapshot.clone(),
            roadmap,
        })
    }

    /// Collects metrics from `source` and analyzes them.
    pub async fn analyze_repository<S>(
        &self,
        source: &S,
        owner: &str,
        name: &str,
    ) -> EngineResult<AnalysisResult>
    where
        S: MetricsSource,
    {
        let snapshot = source.get_complete_metrics(owner, name).await?;
        self.analyze(&snapshot).await
    }
}
