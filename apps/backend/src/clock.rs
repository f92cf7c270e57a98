//! UTC time sources for the round service.

use std::fmt::Debug;
use std::time::Instant;

use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};

/// Source of "now" for round deadlines.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock anchored once at construction and advanced by a monotonic
/// `Instant`, so system clock steps never move round deadlines backwards.
#[derive(Debug)]
pub struct SystemClock {
    anchor_utc: OffsetDateTime,
    anchor_instant: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            anchor_utc: OffsetDateTime::now_utc(),
            anchor_instant: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        self.anchor_utc + self.anchor_instant.elapsed()
    }
}

/// Clock that only moves when told to. Used by tests and demos that need
/// to step across round deadlines deterministically.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<OffsetDateTime>,
}

impl ManualClock {
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, now: OffsetDateTime) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock()
    }
}
