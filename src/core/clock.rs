use std::cell::Cell;

use chrono::Utc;

use crate::core::types::EpochMillis;

/// Source of "now" for placement rules and horizon clamping.
pub trait Clock {
    fn now_ms(&self) -> EpochMillis;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMillis {
        Utc::now().timestamp_millis() as f64
    }
}

/// Manually driven clock for deterministic tests and replays.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    now: Cell<EpochMillis>,
}

impl FixedClock {
    #[must_use]
    pub fn new(now: EpochMillis) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: EpochMillis) {
        self.now.set(now);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> EpochMillis {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> EpochMillis {
        (**self).now_ms()
    }
}
