use thiserror::Error;

use crate::core::{ItemId, LaneId};

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport: pixel_width={pixel_width}, canvas_span={canvas_span}")]
    InvalidViewport { pixel_width: f64, canvas_span: f64 },

    #[error("invalid time range: start={start}, end={end}")]
    InvalidTimeRange { start: f64, end: f64 },

    #[error("invalid lane table: {0}")]
    InvalidLaneTable(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("item id {0} is already allocated")]
    DuplicateItemId(ItemId),

    #[error("lane id {0} is declared more than once")]
    DuplicateLaneId(LaneId),

    #[error("lane id {0} does not exist")]
    UnknownLane(LaneId),
}
