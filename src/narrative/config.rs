//! Configuration for narrative generation

use std::time::Duration;

/// Bounds on the external text-generation dependency
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    pub cache_capacity: usize,
    pub cache_ttl: Duration,
    pub max_calls_per_window: u32,
    pub rate_limit_window: Duration,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            cache_ttl: Duration::from_secs(60 * 60 * 24), // 24 hours
            max_calls_per_window: 3,
            rate_limit_window: Duration::from_secs(60),
        }
    }
}
