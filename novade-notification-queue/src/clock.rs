//! Time sources for the queue engine.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::types::Timestamp;

/// A monotonic time source.
pub trait Clock: Send + Sync {
    /// Current time measured from the clock's origin.
    fn now(&self) -> Timestamp;
}

/// Wall-independent clock backed by [`Instant`], starting at zero on construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Useful for drivers that replay recorded input and for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    micros: AtomicU64,
}

fn saturating_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self { micros: AtomicU64::new(saturating_micros(start)) }
    }

    pub fn set(&self, now: Timestamp) {
        self.micros.store(saturating_micros(now), Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        let by = saturating_micros(by);
        let _ = self
            .micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| Some(current.saturating_add(by)));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Duration::from_micros(self.micros.load(Ordering::SeqCst))
    }
}
