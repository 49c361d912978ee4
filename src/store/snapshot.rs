use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Item, ItemId, Lane, LaneId};

/// Immutable view of the store at one point in its history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    /// Lanes in stacking order.
    pub lanes: IndexMap<LaneId, Lane>,
    /// Items in insertion order.
    pub items: IndexMap<ItemId, Item>,
    pub next_id: u64,
}

impl TimelineSnapshot {
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    #[must_use]
    pub fn lane(&self, id: LaneId) -> Option<&Lane> {
        self.lanes.get(&id)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
