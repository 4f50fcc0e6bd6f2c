//! Type definitions for the narrative layer

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::analysis::{Assessment, MetricsSnapshot, RoadmapItem};
use crate::generator::GenerationError;

/// Failures inside one artifact request. None of these leave the orchestrator.
#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Rate limit exceeded. Please wait {wait_secs} seconds before trying again.")]
    RateLimited { wait_secs: u64 },

    #[error("Text generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Unusable {kind} response: {details}")]
    MalformedResponse { kind: ArtifactKind, details: String },
}

pub type NarrativeResult<T> = Result<T, NarrativeError>;

/// The three AI-derived outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Summary,
    StrengthsWeaknesses,
    Roadmap,
}

impl ArtifactKind {
    /// Prefix used in cache keys
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            ArtifactKind::Summary => "summary",
            ArtifactKind::StrengthsWeaknesses => "strengths",
            ArtifactKind::Roadmap => "roadmap",
        }
    }

    /// `<prefix>:<owner>/<name>`
    #[must_use]
    pub fn cache_key(&self, snapshot: &MetricsSnapshot) -> String {
        format!("{}:{}/{}", self.prefix(), snapshot.owner, snapshot.name)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Cached payload of one artifact request
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Summary(String),
    Assessment(Assessment),
    Roadmap(Vec<RoadmapItem>),
}

/// Cache entry with creation timestamp
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    pub payload: Artifact,
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.created_at >= chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX)
    }
}
