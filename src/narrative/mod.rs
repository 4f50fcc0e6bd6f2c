//! Narrative generation: summary, strengths/weaknesses and roadmap
//!
//! Every artifact goes through the same protocol: cache lookup, rate-limit
//! check, external generation, parsing, caching. Any failure after the cache
//! lookup is absorbed into a deterministic fallback which is cached under the
//! same key, so callers always receive a value.
//!
//! Cache and rate limiter are shared by every request on one orchestrator.
//! Two concurrent requests for the same key that both miss the cache will
//! both call the generator; the later write wins.

mod cache;
mod clock;
mod config;
mod fallback;
mod parse;
mod prompts;
mod rate_limiter;
mod types;

pub use cache::ArtifactCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::NarrativeConfig;
pub use fallback::{fallback_assessment, fallback_roadmap, fallback_summary};
pub use rate_limiter::RateLimiter;
pub use types::{Artifact, ArtifactKind, NarrativeError, NarrativeResult};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::analysis::{Assessment, MetricsSnapshot, RoadmapItem};
use crate::generator::TextGenerator;

/// Coordinates calls to a [`TextGenerator`] behind a cache and a rate limiter
pub struct NarrativeOrchestrator<G> {
    generator: Arc<G>,
    cache: Arc<Mutex<ArtifactCache>>,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    clock: Arc<dyn Clock>,
}

impl<G> Clone for NarrativeOrchestrator<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            cache: Arc::clone(&self.cache),
            rate_limiter: Arc::clone(&self.rate_limiter),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<G: TextGenerator> NarrativeOrchestrator<G> {
    pub fn new(generator: G, config: NarrativeConfig) -> Self {
        Self::with_clock(generator, config, Arc::new(SystemClock))
    }

    pub fn with_clock(generator: G, config: NarrativeConfig, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        let cache = ArtifactCache::new(config.cache_capacity, config.cache_ttl);
        let rate_limiter =
            RateLimiter::new(config.max_calls_per_window, config.rate_limit_window, now);
        Self::from_parts(generator, cache, rate_limiter, clock)
    }

    /// Builds an orchestrator around a caller-provided cache and rate limiter.
    pub fn from_parts(
        generator: G,
        cache: ArtifactCache,
        rate_limiter: RateLimiter,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            generator: Arc::new(generator),
            cache: Arc::new(Mutex::new(cache)),
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
            clock,
        }
    }

    /// Short prose assessment of the repository
    pub async fn summary(&self, snapshot: &MetricsSnapshot, score: u8) -> String {
        let artifact = self
            .resolve(
                ArtifactKind::Summary,
                snapshot,
                |now| prompts::summary_prompt(snapshot, score, now),
                |text| parse::parse_summary(text).map(Artifact::Summary),
                || Artifact::Summary(fallback_summary(snapshot, score)),
            )
            .await;

        match artifact {
            Artifact::Summary(text) => text,
            _ => fallback_summary(snapshot, score),
        }
    }

    /// Strengths and weaknesses lists
    pub async fn strengths_and_weaknesses(&self, snapshot: &MetricsSnapshot) -> Assessment {
        let artifact = self
            .resolve(
                ArtifactKind::StrengthsWeaknesses,
                snapshot,
                |now| prompts::assessment_prompt(snapshot, now),
                |text| parse::parse_assessment(text).map(Artifact::Assessment),
                || Artifact::Assessment(fallback_assessment()),
            )
            .await;

        match artifact {
            Artifact::Assessment(assessment) => assessment,
            _ => fallback_assessment(),
        }
    }

    /// Ordered improvement roadmap
    pub async fn roadmap(&self, snapshot: &MetricsSnapshot, score: u8) -> Vec<RoadmapItem> {
        let artifact = self
            .resolve(
                ArtifactKind::Roadmap,
                snapshot,
                |_| prompts::roadmap_prompt(snapshot, score),
                |text| parse::parse_roadmap(text).map(Artifact::Roadmap),
                || Artifact::Roadmap(fallback_roadmap(snapshot, score)),
            )
            .await;

        match artifact {
            Artifact::Roadmap(items) => items,
            _ => fallback_roadmap(snapshot, score),
        }
    }

    /// The prompt is only built on a cache miss.
    async fn resolve<B, P, F>(
        &self,
        kind: ArtifactKind,
        snapshot: &MetricsSnapshot,
        build_prompt: B,
        parse: P,
        fallback: F,
    ) -> Artifact
    where
        B: FnOnce(DateTime<Utc>) -> String,
        P: FnOnce(&str) -> NarrativeResult<Artifact>,
        F: FnOnce() -> Artifact,
    {
        let key = kind.cache_key(snapshot);

        {
            let mut cache = self.cache.lock().await;
            if let Some(hit) = cache.get(&key, self.clock.now()) {
                debug!("Cache hit for {key}");
                return hit;
            }
        }

        let prompt = build_prompt(self.clock.now());
        let artifact = match self.generate(&prompt).await.and_then(|text| parse(&text)) {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!("Narrative generation for {key} failed: {e}");
                info!("Using fallback {kind} for {}", snapshot.full_name());
                fallback()
            }
        };

        let mut cache = self.cache.lock().await;
        cache.set(key, artifact.clone(), self.clock.now());
        artifact
    }

    async fn generate(&self, prompt: &str) -> NarrativeResult<String> {
        {
            let mut limiter = self.rate_limiter.lock().await;
            limiter.try_acquire(self.clock.now())?;
            debug!("{} generation calls left in this window", limiter.remaining());
        }
        Ok(self.generator.generate(prompt).await?)
    }

    /// `(hits, misses)` of the artifact cache
    pub async fn cache_stats(&self) -> (u64, u64) {
        self.cache.lock().await.stats()
    }

    /// Removes expired cache entries, returning how many were dropped
    pub async fn prune_cache(&self) -> usize {
        let removed = self.cache.lock().await.prune(self.clock.now());
        if removed > 0 {
            debug!("Pruned {removed} expired narrative cache entries");
        }
        removed
    }

    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Time source shared with the cache and rate limiter
    #[must_use]
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
