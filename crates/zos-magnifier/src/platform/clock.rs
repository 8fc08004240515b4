//! Clock implementations

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use super::Clock;

/// Clock backed by `std::time::Instant`
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Create a clock whose origin is now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_nsec(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Manually driven clock for deterministic tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    /// Create a clock reading `now_nsec`
    pub fn new(now_nsec: u64) -> Self {
        Self {
            now: AtomicU64::new(now_nsec),
        }
    }

    /// Set the current reading
    pub fn set(&self, now_nsec: u64) {
        self.now.store(now_nsec, Ordering::Relaxed);
    }

    /// Move the clock forward
    pub fn advance(&self, delta_nsec: u64) {
        self.now.fetch_add(delta_nsec, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_nsec(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}
