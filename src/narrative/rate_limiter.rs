//! Rate limiting for text-generation calls

use chrono::{DateTime, Utc};
use log::warn;
use std::time::Duration;

use crate::narrative::types::{NarrativeError, NarrativeResult};

/// Fixed quota per rolling window.
///
/// The window resets lazily: the first `try_acquire` after the window has
/// elapsed starts a new one. There is no background timer and no queueing.
pub struct RateLimiter {
    max_calls: u32,
    window: Duration,
    calls: u32,
    window_start: DateTime<Utc>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(max_calls: u32, window: Duration, now: DateTime<Utc>) -> Self {
        Self {
            max_calls,
            window,
            calls: 0,
            window_start: now,
        }
    }

    fn window_len(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.window).unwrap_or(chrono::Duration::MAX)
    }

    /// Takes one call from the quota or reports how long to wait.
    pub fn try_acquire(&mut self, now: DateTime<Utc>) -> NarrativeResult<()> {
        let elapsed = now - self.window_start;
        if elapsed > self.window_len() {
            self.calls = 0;
            self.window_start = now;
        }

        if self.calls >= self.max_calls {
            let remaining = self.window_len() - (now - self.window_start);
            let wait_secs = (remaining.num_milliseconds().max(0) as u64).div_ceil(1000);
            warn!("Rate limit exceeded, {wait_secs}s until the window resets");
            return Err(NarrativeError::RateLimited { wait_secs });
        }

        self.calls += 1;
        Ok(())
    }

    /// Calls left in the current window, ignoring a pending lazy reset
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.max_calls.saturating_sub(self.calls)
    }
}
