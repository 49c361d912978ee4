use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Absolute time value in milliseconds since the Unix epoch.
pub type EpochMillis = f64;

pub const MINUTE_MS: f64 = 60.0 * 1000.0;
pub const DAY_MS: f64 = 24.0 * 60.0 * MINUTE_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneId(pub u32);

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Half-open schedule window with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: EpochMillis,
    end: EpochMillis,
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: EpochMillis,
    end: EpochMillis,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = TimelineError;

    fn try_from(raw: RawTimeRange) -> TimelineResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeRange {
    pub fn new(start: EpochMillis, end: EpochMillis) -> TimelineResult<Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(TimelineError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> EpochMillis {
        self.start
    }

    #[must_use]
    pub fn end(self) -> EpochMillis {
        self.end
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn contains_range(self, other: TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Translates both boundaries; the span is preserved.
    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }

    pub(crate) fn validate(self) -> TimelineResult<Self> {
        Self::new(self.start, self.end)
    }
}

/// Horizontal row on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub id: LaneId,
    pub order: u32,
    pub title: String,
}

impl Lane {
    #[must_use]
    pub fn new(id: LaneId, order: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            order,
            title: title.into(),
        }
    }
}

/// Presentation tag derived from an item's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StyleTag {
    #[default]
    Default,
    Weekend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub lane_id: LaneId,
    pub range: TimeRange,
    pub title: String,
    pub style: StyleTag,
}

/// Boundary grabbed by a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    Start,
    End,
}
