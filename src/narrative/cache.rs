//! LRU artifact cache with TTL support

use chrono::{DateTime, Utc};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::narrative::types::{Artifact, CacheEntry};

/// Artifact cache keyed by `<kind>:<owner>/<name>`.
///
/// Expired entries stay in place until they are overwritten or pruned.
pub struct ArtifactCache {
    lru: LruCache<String, CacheEntry>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ArtifactCache {
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let non_zero_capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            lru: LruCache::new(non_zero_capacity),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the payload if an entry exists and is younger than the TTL.
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Option<Artifact> {
        if let Some(entry) = self.lru.get(key)
            && !entry.is_expired(self.ttl, now)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Some(entry.payload.clone());
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Stores `payload` under `key`, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<String>, payload: Artifact, now: DateTime<Utc>) {
        let entry = CacheEntry {
            payload,
            created_at: now,
        };
        self.lru.put(key.into(), entry);
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let expired_keys: Vec<String> = self
            .lru
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl, now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.lru.pop(key);
        }
        expired_keys.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// `(hits, misses)` since construction
    #[must_use]
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
