use crate::error::{TimelineError, TimelineResult};

use super::TimelineConfig;

const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

pub(super) fn validate_timeline_config(config: TimelineConfig) -> TimelineResult<TimelineConfig> {
    for (name, value) in [
        ("grid_size_ms", config.grid_size_ms),
        ("item_duration_ms", config.item_duration_ms),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(TimelineError::InvalidConfig(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    if !config.canvas_buffer_factor.is_finite() || config.canvas_buffer_factor < 1.0 {
        return Err(TimelineError::InvalidConfig(
            "canvas buffer factor must be finite and >= 1".to_owned(),
        ));
    }

    if config.horizon_months == 0 || i32::try_from(config.horizon_months).is_err() {
        return Err(TimelineError::InvalidConfig(
            "horizon must be a positive month count".to_owned(),
        ));
    }

    let offset_minutes = i32::from(config.time_zone.offset_minutes());
    if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&offset_minutes) {
        return Err(TimelineError::InvalidConfig(
            "utc offset must be between -840 and 840 minutes".to_owned(),
        ));
    }

    Ok(config)
}
