//! `kodegen_repo_insight` - repository quality scoring with AI narratives
//!
//! Collects metrics for a GitHub repository, scores it on a 0-100 scale with
//! five dimension sub-scores, and asks a text generator for a summary,
//! strengths/weaknesses and an improvement roadmap. Generated artifacts are
//! cached and rate-limited; any generation failure degrades to a
//! deterministic fallback.

// Module declarations
pub mod analysis;
pub mod config;
pub mod generator;
pub mod github;
pub mod narrative;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export analysis entry points
pub use analysis::{
    AdvancedAnalysis, AnalysisEngine, AnalysisError, AnalysisResult, Assessment, Dimension,
    DimensionScore, EngineResult, MetricsSnapshot, RoadmapItem, ScoreBreakdown, Tier,
    advanced_analysis, compute_dimensions, compute_dimensions_at, compute_score, compute_score_at,
    score_breakdown,
};

// Re-export narrative types
pub use narrative::{
    ArtifactCache, ArtifactKind, Clock, ManualClock, NarrativeConfig, NarrativeOrchestrator,
    RateLimiter, SystemClock,
};

// Re-export generator types
pub use generator::{
    ConfiguredGenerator, GeminiConfig, GeminiGenerator, GenerationError, TextGenerator,
};

// Re-export GitHub client types
pub use github::{
    GitHubClient, GitHubClientBuilder, GitHubError, GitHubMetricsCollector, GitHubResult,
    MetricsSource, parse_repository_url,
};

pub use config::{AppConfig, ConfigError};
