use chrono::{DateTime, Datelike, FixedOffset, Months, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::types::{EpochMillis, StyleTag, TimeRange};
use crate::error::{TimelineError, TimelineResult};

/// Zone used for calendar arithmetic (day-of-week, month offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimelineTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl TimelineTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    pub fn fixed_offset(self) -> TimelineResult<FixedOffset> {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).ok_or_else(|| {
            TimelineError::InvalidConfig(format!(
                "utc offset of {} minutes is out of range",
                self.offset_minutes()
            ))
        })
    }

    pub fn local_datetime(self, time: EpochMillis) -> TimelineResult<DateTime<FixedOffset>> {
        let offset = self.fixed_offset()?;
        let utc = DateTime::<Utc>::from_timestamp_millis(whole_millis(time)?).ok_or_else(|| {
            TimelineError::InvalidData(format!("time {time} is outside the calendar range"))
        })?;
        Ok(utc.with_timezone(&offset))
    }

    pub fn weekday(self, time: EpochMillis) -> TimelineResult<Weekday> {
        Ok(self.local_datetime(time)?.weekday())
    }

    /// Shifts `time` by whole calendar months in this zone, keeping the
    /// time of day and the sub-millisecond remainder.
    pub fn add_months(self, time: EpochMillis, months: i32) -> TimelineResult<EpochMillis> {
        let local = self.local_datetime(time)?;
        let magnitude = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            local.checked_add_months(magnitude)
        } else {
            local.checked_sub_months(magnitude)
        };
        let shifted = shifted.ok_or_else(|| {
            TimelineError::InvalidData(format!("cannot shift {time} by {months} months"))
        })?;
        Ok(shifted.timestamp_millis() as f64 + time.fract())
    }
}

fn whole_millis(time: EpochMillis) -> TimelineResult<i64> {
    if !time.is_finite() || time.abs() >= i64::MAX as f64 {
        return Err(TimelineError::InvalidData(format!(
            "time {time} is not representable"
        )));
    }
    Ok(time.trunc() as i64)
}

#[must_use]
pub fn is_weekend_day(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Weekend when either boundary falls on a Saturday or Sunday.
pub fn derive_style(range: TimeRange, zone: TimelineTimeZone) -> TimelineResult<StyleTag> {
    let start_day = zone.weekday(range.start())?;
    let end_day = zone.weekday(range.end())?;
    if is_weekend_day(start_day) || is_weekend_day(end_day) {
        Ok(StyleTag::Weekend)
    } else {
        Ok(StyleTag::Default)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc_ms(y: i32, m: u32, d: u32, h: u32) -> f64 {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .expect("valid date")
            .timestamp_millis() as f64
    }

    #[test]
    fn offset_moves_day_boundary() {
        // 2024-06-08 is a Saturday; 23:00 UTC is already Sunday at +02:00.
        let time = utc_ms(2024, 6, 8, 23);
        assert_eq!(TimelineTimeZone::Utc.weekday(time).expect("weekday"), Weekday::Sat);
        let plus_two = TimelineTimeZone::FixedOffsetMinutes { minutes: 120 };
        assert_eq!(plus_two.weekday(time).expect("weekday"), Weekday::Sun);
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        let time = utc_ms(2024, 8, 31, 12);
        let shifted = TimelineTimeZone::Utc.add_months(time, 6).expect("shift");
        assert_eq!(shifted, utc_ms(2025, 2, 28, 12));
        let back = TimelineTimeZone::Utc.add_months(time, -6).expect("shift");
        assert_eq!(back, utc_ms(2024, 2, 29, 12));
    }
}
