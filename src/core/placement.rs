use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{EpochMillis, MINUTE_MS, ResizeEdge};
use crate::error::{TimelineError, TimelineResult};

pub const DEFAULT_GRID_SIZE_MS: f64 = 15.0 * MINUTE_MS;

/// Gesture a candidate time belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementAction {
    Create,
    Move,
    Resize(ResizeEdge),
}

/// Corrects candidate times that would land in the past.
///
/// Legal candidates pass through untouched; only past ones are snapped
/// forward onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementValidator {
    grid_size_ms: f64,
}

impl Default for PlacementValidator {
    fn default() -> Self {
        Self {
            grid_size_ms: DEFAULT_GRID_SIZE_MS,
        }
    }
}

impl PlacementValidator {
    pub fn new(grid_size_ms: f64) -> TimelineResult<Self> {
        if !grid_size_ms.is_finite() || grid_size_ms <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "grid size must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { grid_size_ms })
    }

    #[must_use]
    pub fn grid_size_ms(self) -> f64 {
        self.grid_size_ms
    }

    #[must_use]
    pub fn legalize(self, candidate: EpochMillis, now: EpochMillis) -> EpochMillis {
        if candidate < now {
            self.next_grid_boundary(now)
        } else {
            candidate
        }
    }

    /// Same rule for every action; the action is carried for tracing.
    #[must_use]
    pub fn legalize_action(
        self,
        action: PlacementAction,
        candidate: EpochMillis,
        now: EpochMillis,
    ) -> EpochMillis {
        let legal = self.legalize(candidate, now);
        if legal != candidate {
            debug!(?action, candidate, legal, "snapped past placement to grid");
        }
        legal
    }

    /// First grid boundary at or after `time`.
    #[must_use]
    pub fn next_grid_boundary(self, time: EpochMillis) -> EpochMillis {
        (time / self.grid_size_ms).ceil() * self.grid_size_ms
    }
}
