use serde::{Deserialize, Serialize};

use crate::core::calendar::TimelineTimeZone;
use crate::core::types::{EpochMillis, TimeRange};
use crate::error::{TimelineError, TimelineResult};

pub const DEFAULT_HORIZON_MONTHS: u32 = 6;

/// Keeps the visible window inside `[now - months, now + months]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindowClamp {
    horizon_months: u32,
    time_zone: TimelineTimeZone,
}

impl Default for TimeWindowClamp {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            time_zone: TimelineTimeZone::Utc,
        }
    }
}

impl TimeWindowClamp {
    pub fn new(horizon_months: u32, time_zone: TimelineTimeZone) -> TimelineResult<Self> {
        if horizon_months == 0 || i32::try_from(horizon_months).is_err() {
            return Err(TimelineError::InvalidConfig(
                "horizon must span at least one month".to_owned(),
            ));
        }
        Ok(Self {
            horizon_months,
            time_zone,
        })
    }

    #[must_use]
    pub fn horizon_months(self) -> u32 {
        self.horizon_months
    }

    pub fn horizon(self, now: EpochMillis) -> TimelineResult<TimeRange> {
        let months = i32::try_from(self.horizon_months).map_err(|_| {
            TimelineError::InvalidConfig("horizon month count overflows".to_owned())
        })?;
        let min = self.time_zone.add_months(now, -months)?;
        let max = self.time_zone.add_months(now, months)?;
        TimeRange::new(min, max)
    }

    /// Restricts `proposed` to the rolling horizon around `now`.
    ///
    /// A window at least as wide as the horizon collapses onto it; otherwise
    /// the window is shifted back inside while keeping its span.
    pub fn clamp(self, proposed: TimeRange, now: EpochMillis) -> TimelineResult<TimeRange> {
        let horizon = self.horizon(now)?;
        let (min, max) = (horizon.start(), horizon.end());
        let span = proposed.span();

        if span >= horizon.span() {
            Ok(horizon)
        } else if proposed.start() < min {
            TimeRange::new(min, min + span)
        } else if proposed.end() > max {
            TimeRange::new(max - span, max)
        } else {
            Ok(proposed)
        }
    }
}
