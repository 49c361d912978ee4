use serde::{Deserialize, Serialize};

use crate::core::{
    CANVAS_BUFFER_FACTOR, DAY_MS, DEFAULT_GRID_SIZE_MS, DEFAULT_HORIZON_MONTHS, PlacementValidator,
    TimeWindowClamp, TimelineTimeZone,
};
use crate::error::{TimelineError, TimelineResult};
use crate::store::StorePolicy;

use super::validation::validate_timeline_config;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist their timeline setup. Missing fields
/// fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_grid_size_ms")]
    pub grid_size_ms: f64,
    #[serde(default = "default_item_duration_ms")]
    pub item_duration_ms: f64,
    #[serde(default = "default_canvas_buffer_factor")]
    pub canvas_buffer_factor: f64,
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
    #[serde(default)]
    pub time_zone: TimelineTimeZone,
    #[serde(default = "default_lane_id_offset")]
    pub lane_id_offset: u32,
    /// Snap drops that land in the past, like moves and resizes.
    #[serde(default = "default_legalize_drops")]
    pub legalize_drops: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            grid_size_ms: default_grid_size_ms(),
            item_duration_ms: default_item_duration_ms(),
            canvas_buffer_factor: default_canvas_buffer_factor(),
            horizon_months: default_horizon_months(),
            time_zone: TimelineTimeZone::Utc,
            lane_id_offset: default_lane_id_offset(),
            legalize_drops: default_legalize_drops(),
        }
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn with_grid_size_ms(mut self, grid_size_ms: f64) -> Self {
        self.grid_size_ms = grid_size_ms;
        self
    }

    #[must_use]
    pub fn with_item_duration_ms(mut self, item_duration_ms: f64) -> Self {
        self.item_duration_ms = item_duration_ms;
        self
    }

    #[must_use]
    pub fn with_canvas_buffer_factor(mut self, factor: f64) -> Self {
        self.canvas_buffer_factor = factor;
        self
    }

    #[must_use]
    pub fn with_horizon_months(mut self, months: u32) -> Self {
        self.horizon_months = months;
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: TimelineTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    #[must_use]
    pub fn with_lane_id_offset(mut self, offset: u32) -> Self {
        self.lane_id_offset = offset;
        self
    }

    #[must_use]
    pub fn with_legalize_drops(mut self, enabled: bool) -> Self {
        self.legalize_drops = enabled;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        validate_timeline_config(self)
    }

    pub fn store_policy(self) -> TimelineResult<StorePolicy> {
        Ok(StorePolicy {
            item_duration_ms: self.item_duration_ms,
            lane_id_offset: self.lane_id_offset,
            time_zone: self.time_zone,
            placement: PlacementValidator::new(self.grid_size_ms)?,
        })
    }

    pub fn window_clamp(self) -> TimelineResult<TimeWindowClamp> {
        TimeWindowClamp::new(self.horizon_months, self.time_zone)
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidConfig(format!("failed to parse timeline config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            TimelineError::InvalidConfig(format!("failed to serialize timeline config: {e}"))
        })
    }
}

fn default_grid_size_ms() -> f64 {
    DEFAULT_GRID_SIZE_MS
}

fn default_item_duration_ms() -> f64 {
    DAY_MS
}

fn default_canvas_buffer_factor() -> f64 {
    CANVAS_BUFFER_FACTOR
}

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

fn default_lane_id_offset() -> u32 {
    1
}

fn default_legalize_drops() -> bool {
    true
}
