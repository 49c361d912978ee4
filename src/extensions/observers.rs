use serde::{Deserialize, Serialize};

use crate::core::{EpochMillis, ItemId, LaneId, ResizeEdge, TimeRange};
use crate::interaction::DropMiss;
use crate::store::MutationRejection;

/// Read-only state passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub now: EpochMillis,
    pub item_count: usize,
    pub lane_count: usize,
    pub visible_window: Option<TimeRange>,
}

/// Committed changes and notable misses, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimelineEvent {
    ItemCreated {
        item: ItemId,
        lane: LaneId,
        range: TimeRange,
    },
    ItemMoved {
        item: ItemId,
        lane: LaneId,
        range: TimeRange,
    },
    ItemResized {
        item: ItemId,
        edge: ResizeEdge,
        range: TimeRange,
    },
    DropMissed {
        reason: DropMiss,
    },
    MutationRejected {
        reason: MutationRejection,
    },
    VisibleWindowChanged {
        window: TimeRange,
    },
}

/// Hook for hosts that re-render or audit on state changes.
///
/// Observers see events after the store has committed; they cannot mutate
/// engine state.
pub trait TimelineObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: TimelineEvent, context: ObserverContext);
}
