//! Shared fixtures: snapshots, a scripted generator and a fixed clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use kodegen_repo_insight::generator::GenerationResult;
use kodegen_repo_insight::{
    GenerationError, ManualClock, MetricsSnapshot, NarrativeConfig, NarrativeOrchestrator,
    TextGenerator,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SUMMARY_TEXT: &str = "Well organised project with steady activity.";

pub const ASSESSMENT_JSON: &str = "```json\n{\"strengths\":[\"Clear README\",\"CI on every push\"],\
                                   \"weaknesses\":[\"Few contributors\"]}\n```";

pub const ROADMAP_JSON: &str = r#"[
  {"title":"Add property tests","description":"Cover the parser","difficulty":"Medium",
   "priority":"High","timeEstimate":"3-4 hours","category":"Testing","impact":"+5 points"},
  {"title":"Publish docs","description":"Host API docs","difficulty":"Easy",
   "priority":"Low","timeEstimate":"1 hour","category":"Documentation","impact":"+3 points"}
]"#;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

type Responder = dyn Fn(&str, usize) -> GenerationResult<String> + Send + Sync;

/// Generator answering from a closure, counting every call.
pub struct ScriptedGenerator {
    calls: AtomicUsize,
    yield_first: bool,
    responder: Box<Responder>,
}

impl ScriptedGenerator {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str, usize) -> GenerationResult<String> + Send + Sync + 'static,
    {
        Self {
            calls: AtomicUsize::new(0),
            yield_first: false,
            responder: Box::new(responder),
        }
    }

    /// Valid answers for each of the three prompts.
    pub fn well_behaved() -> Self {
        Self::new(|prompt, _| {
            if prompt.contains("improvement roadmap") {
                Ok(ROADMAP_JSON.to_string())
            } else if prompt.contains("strengths and weaknesses") {
                Ok(ASSESSMENT_JSON.to_string())
            } else {
                Ok(SUMMARY_TEXT.to_string())
            }
        })
    }

    pub fn always_failing() -> Self {
        Self::new(|_, _| Err(GenerationError::Other("upstream unavailable".to_string())))
    }

    /// Suspend once before answering, so concurrent callers interleave.
    pub fn yielding(mut self) -> Self {
        self.yield_first = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.yield_first {
            tokio::task::yield_now().await;
        }
        (self.responder)(prompt, n)
    }
}

pub fn orchestrator(
    generator: ScriptedGenerator,
) -> (NarrativeOrchestrator<ScriptedGenerator>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(t0()));
    let orchestrator =
        NarrativeOrchestrator::with_clock(generator, NarrativeConfig::default(), clock.clone());
    (orchestrator, clock)
}

pub fn snapshot(owner: &str, name: &str) -> MetricsSnapshot {
    MetricsSnapshot {
        owner: owner.to_string(),
        name: name.to_string(),
        created_at: t0() - Duration::days(900),
        updated_at: t0() - Duration::days(400),
        pushed_at: t0() - Duration::days(400),
        file_count: 40,
        commit_count: 12,
        ..Default::default()
    }
}

/// No README, tests or CI; 600 files and a little community interest.
pub fn bare_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        has_readme: false,
        has_tests: false,
        has_github_actions: false,
        file_count: 600,
        stars: 10,
        contributors: 1,
        commit_count: 3,
        archived: false,
        ..snapshot("octo", "bare")
    }
}

/// Everything switched on, popular and recently updated.
pub fn flagship_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        has_readme: true,
        has_license: true,
        has_contributing: true,
        has_changelog: true,
        has_wiki: true,
        has_tests: true,
        test_files: 40,
        has_github_actions: true,
        file_count: 220,
        directory_count: 30,
        stars: 1000,
        forks: 150,
        contributors: 60,
        commits_last_month: 20,
        commits_last_week: 4,
        updated_at: t0() - Duration::hours(6),
        pushed_at: t0() - Duration::hours(6),
        ..snapshot("octo", "flagship")
    }
}
