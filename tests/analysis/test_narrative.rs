//! Cache, rate-limit and fallback behaviour of the narrative orchestrator.

use super::support::{
    ASSESSMENT_JSON, ScriptedGenerator, SUMMARY_TEXT, bare_snapshot, orchestrator, snapshot,
};
use chrono::Duration;
use kodegen_repo_insight::narrative::{fallback_assessment, fallback_roadmap, fallback_summary};

#[tokio::test]
async fn second_request_within_ttl_is_served_from_cache() {
    let (orchestrator, clock) = orchestrator(ScriptedGenerator::well_behaved());
    let s = snapshot("octo", "cached");

    let first = orchestrator.summary(&s, 55).await;
    clock.advance(Duration::hours(23));
    let second = orchestrator.summary(&s, 55).await;

    assert_eq!(first, SUMMARY_TEXT);
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(orchestrator.generator().calls(), 1);
}

#[tokio::test]
async fn artifacts_are_cached_under_separate_keys() {
    let (orchestrator, _clock) = orchestrator(ScriptedGenerator::well_behaved());
    let s = snapshot("octo", "keys");

    orchestrator.summary(&s, 55).await;
    let assessment = orchestrator.strengths_and_weaknesses(&s).await;
    let roadmap = orchestrator.roadmap(&s, 55).await;

    assert_eq!(orchestrator.generator().calls(), 3);
    assert_eq!(assessment.strengths, vec!["Clear README", "CI on every push"]);
    assert_eq!(roadmap.len(), 2);
    assert_eq!(roadmap[0].title, "Add property tests");
}

#[tokio::test]
async fn quota_overflow_resolves_to_fallback() {
    let (orchestrator, clock) = orchestrator(ScriptedGenerator::well_behaved());

    for name in ["a", "b", "c"] {
        let text = orchestrator.summary(&snapshot("octo", name), 60).await;
        assert_eq!(text, SUMMARY_TEXT);
    }

    let fourth = snapshot("octo", "d");
    let text = orchestrator.summary(&fourth, 60).await;
    assert_eq!(text, fallback_summary(&fourth, 60));
    assert_eq!(orchestrator.generator().calls(), 3);

    // The rate-limited fallback is cached like any other value.
    clock.advance(Duration::seconds(61));
    assert_eq!(orchestrator.summary(&fourth, 60).await, text);
    assert_eq!(orchestrator.generator().calls(), 3);

    // Once the window has passed, new keys reach the generator again.
    let fifth = orchestrator.summary(&snapshot("octo", "e"), 60).await;
    assert_eq!(fifth, SUMMARY_TEXT);
    assert_eq!(orchestrator.generator().calls(), 4);
}

#[tokio::test]
async fn malformed_structured_output_uses_fallbacks() {
    let generator = ScriptedGenerator::new(|_, _| Ok("I'd rather chat than emit JSON".to_string()));
    let (orchestrator, _clock) = orchestrator(generator);
    let s = bare_snapshot();

    assert_eq!(orchestrator.strengths_and_weaknesses(&s).await, fallback_assessment());
    assert_eq!(orchestrator.roadmap(&s, 49).await, fallback_roadmap(&s, 49));
    // Free text is still a valid summary.
    assert_eq!(orchestrator.summary(&s, 49).await, "I'd rather chat than emit JSON");
}

#[tokio::test]
async fn failing_generator_roadmap_follows_missing_practices() {
    let (orchestrator, _clock) = orchestrator(ScriptedGenerator::always_failing());
    let roadmap = orchestrator.roadmap(&bare_snapshot(), 49).await;

    let titles: Vec<&str> = roadmap.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        &titles[..3],
        ["Create Comprehensive README", "Add Unit Tests", "Setup CI/CD Pipeline"]
    );
}

#[tokio::test]
async fn concurrent_identical_requests_race_and_last_write_wins() {
    let generator = ScriptedGenerator::new(|_, n| {
        if n == 0 {
            Ok(ASSESSMENT_JSON.to_string())
        } else {
            Ok(r#"{"strengths":["second writer"],"weaknesses":[]}"#.to_string())
        }
    })
    .yielding();
    let (orchestrator, _clock) = orchestrator(generator);
    let s = snapshot("octo", "raced");

    let (a, b) = tokio::join!(
        orchestrator.strengths_and_weaknesses(&s),
        orchestrator.strengths_and_weaknesses(&s),
    );

    // Both missed the cache and both reached the generator.
    assert_eq!(orchestrator.generator().calls(), 2);
    assert_ne!(a, b);

    let cached = orchestrator.strengths_and_weaknesses(&s).await;
    assert!(cached == a || cached == b);
    assert_eq!(orchestrator.generator().calls(), 2);
}

#[tokio::test]
async fn expired_entries_are_regenerated_and_prunable() {
    let (orchestrator, clock) = orchestrator(ScriptedGenerator::well_behaved());
    let s = snapshot("octo", "stale");

    orchestrator.summary(&s, 50).await;
    clock.advance(Duration::hours(24));
    assert_eq!(orchestrator.prune_cache().await, 1);

    orchestrator.summary(&s, 50).await;
    assert_eq!(orchestrator.generator().calls(), 2);
    assert_eq!(orchestrator.cache_stats().await, (0, 2));
}
