use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Row key reported by the renderer for each lane, in stacking order
/// (row 0 is topmost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneKey(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneTop {
    pub top: f64,
    pub key: LaneKey,
}

/// Read-only snapshot of lane top offsets, strictly increasing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawLaneTopTable")]
pub struct LaneTopTable {
    rows: Vec<LaneTop>,
}

#[derive(Deserialize)]
struct RawLaneTopTable {
    rows: Vec<LaneTop>,
}

impl TryFrom<RawLaneTopTable> for LaneTopTable {
    type Error = TimelineError;

    fn try_from(raw: RawLaneTopTable) -> TimelineResult<Self> {
        Self::new(raw.rows)
    }
}

impl LaneTopTable {
    pub fn new(rows: Vec<LaneTop>) -> TimelineResult<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if !row.top.is_finite() {
                return Err(TimelineError::InvalidLaneTable(format!(
                    "lane top at row {idx} must be finite"
                )));
            }
            if idx > 0 && row.top <= rows[idx - 1].top {
                return Err(TimelineError::InvalidLaneTable(format!(
                    "lane top offsets must be strictly increasing (row {idx})"
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Builds the table from per-row heights, keyed by row index.
    pub fn from_heights(first_top: f64, heights: &[f64]) -> TimelineResult<Self> {
        let mut rows = Vec::with_capacity(heights.len());
        let mut top = first_top;
        for (idx, height) in heights.iter().copied().enumerate() {
            if !height.is_finite() || height <= 0.0 {
                return Err(TimelineError::InvalidLaneTable(format!(
                    "lane height at row {idx} must be finite and > 0"
                )));
            }
            let key = u32::try_from(idx).map_err(|_| {
                TimelineError::InvalidLaneTable("too many lanes for a lane table".to_owned())
            })?;
            rows.push(LaneTop {
                top,
                key: LaneKey(key),
            });
            top += height;
        }
        Self::new(rows)
    }

    #[must_use]
    pub fn rows(&self) -> &[LaneTop] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolves the lane under a content-relative y coordinate.
///
/// Picks the deepest row whose top lies strictly above `pixel_y`. There is
/// no bottom bound: any point below the last row resolves to the last row.
#[must_use]
pub fn lane_at(pixel_y: f64, table: &LaneTopTable) -> Option<LaneKey> {
    let above = table.rows.partition_point(|row| row.top < pixel_y);
    above.checked_sub(1).map(|idx| table.rows[idx].key)
}
