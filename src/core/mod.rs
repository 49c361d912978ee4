pub mod calendar;
pub mod clock;
pub mod lane_table;
pub mod placement;
pub mod scale;
pub mod time_window;
pub mod types;
pub mod viewport;

pub use calendar::{TimelineTimeZone, derive_style, is_weekend_day};
pub use clock::{Clock, FixedClock, SystemClock};
pub use lane_table::{LaneKey, LaneTop, LaneTopTable, lane_at};
pub use placement::{DEFAULT_GRID_SIZE_MS, PlacementAction, PlacementValidator};
pub use scale::LinearScale;
pub use time_window::{DEFAULT_HORIZON_MONTHS, TimeWindowClamp};
pub use types::{
    DAY_MS, EpochMillis, Item, ItemId, Lane, LaneId, MINUTE_MS, ResizeEdge, StyleTag, TimeRange,
};
pub use viewport::{CANVAS_BUFFER_FACTOR, Viewport, pixel_at, time_at};
