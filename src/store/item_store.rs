use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    DAY_MS, EpochMillis, Item, ItemId, Lane, LaneId, PlacementAction, PlacementValidator,
    ResizeEdge, TimeRange, TimelineTimeZone, derive_style,
};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::DropResult;

use super::TimelineSnapshot;

/// Rules the store applies when committing changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorePolicy {
    pub item_duration_ms: f64,
    /// Added to a renderer row key to obtain the lane id.
    pub lane_id_offset: u32,
    pub time_zone: TimelineTimeZone,
    pub placement: PlacementValidator,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            item_duration_ms: DAY_MS,
            lane_id_offset: 1,
            time_zone: TimelineTimeZone::Utc,
            placement: PlacementValidator::default(),
        }
    }
}

/// Why a mutation left the store unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MutationRejection {
    UnknownItem(ItemId),
    UnknownLane(LaneId),
    UnknownRow(usize),
    InvertedRange { start: EpochMillis, end: EpochMillis },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Committed(Arc<TimelineSnapshot>),
    Rejected(MutationRejection),
}

impl Mutation {
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

#[derive(Debug, Clone)]
pub struct ItemStore {
    policy: StorePolicy,
    current: Arc<TimelineSnapshot>,
}

impl ItemStore {
    pub fn new(policy: StorePolicy) -> Self {
        Self {
            policy,
            current: Arc::new(TimelineSnapshot::default()),
        }
    }

    /// Builds a store from externally supplied lanes and items.
    ///
    /// Lanes are reordered by `order`; the id counter starts above the
    /// largest seeded item id.
    pub fn seeded(
        policy: StorePolicy,
        mut lanes: Vec<Lane>,
        items: Vec<Item>,
    ) -> TimelineResult<Self> {
        lanes.sort_by_key(|lane| lane.order);
        let mut lane_map = IndexMap::with_capacity(lanes.len());
        for lane in lanes {
            let id = lane.id;
            if lane_map.insert(id, lane).is_some() {
                return Err(TimelineError::DuplicateLaneId(id));
            }
        }

        let mut item_map = IndexMap::with_capacity(items.len());
        let mut next_id = 0_u64;
        for mut item in items {
            if !lane_map.contains_key(&item.lane_id) {
                return Err(TimelineError::UnknownLane(item.lane_id));
            }
            item.range = item.range.validate()?;
            item.style = derive_style(item.range, policy.time_zone)?;
            next_id = next_id.max(item.id.0.saturating_add(1));
            let id = item.id;
            if item_map.insert(id, item).is_some() {
                return Err(TimelineError::DuplicateItemId(id));
            }
        }

        debug!(
            lanes = lane_map.len(),
            items = item_map.len(),
            next_id,
            "seeded item store"
        );
        Ok(Self {
            policy,
            current: Arc::new(TimelineSnapshot {
                lanes: lane_map,
                items: item_map,
                next_id,
            }),
        })
    }

    #[must_use]
    pub fn policy(&self) -> StorePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: StorePolicy) {
        self.policy = policy;
    }

    /// Currently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<TimelineSnapshot> {
        Arc::clone(&self.current)
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.current.item(id)
    }

    /// Lane at a zero-based row of the stacking order.
    #[must_use]
    pub fn lane_at_row(&self, row: usize) -> Option<LaneId> {
        self.current.lanes.get_index(row).map(|(id, _)| *id)
    }

    /// Commits a new item for a resolved drop.
    ///
    /// The drop time is used as given; legalizing it is the caller's choice.
    pub fn create_from_drop(&mut self, drop: &DropResult) -> TimelineResult<Item> {
        let lane_id = LaneId(drop.lane.0.checked_add(self.policy.lane_id_offset).ok_or_else(
            || TimelineError::InvalidData("lane key overflows lane id space".to_owned()),
        )?);
        if !self.current.lanes.contains_key(&lane_id) {
            return Err(TimelineError::UnknownLane(lane_id));
        }

        let id = ItemId(self.current.next_id);
        if self.current.items.contains_key(&id) {
            return Err(TimelineError::DuplicateItemId(id));
        }

        let range = TimeRange::new(drop.time, drop.time + self.policy.item_duration_ms)?;
        let item = Item {
            id,
            lane_id,
            range,
            title: drop.payload.title.clone(),
            style: derive_style(range, self.policy.time_zone)?,
        };

        let mut next = (*self.current).clone();
        next.items.insert(id, item.clone());
        next.next_id = id.0.checked_add(1).ok_or_else(|| {
            TimelineError::InvalidData("item id space exhausted".to_owned())
        })?;
        self.current = Arc::new(next);
        debug!(item = %id, lane = %lane_id, start = range.start(), "item created from drop");
        Ok(item)
    }

    /// Moves an item to `new_start` on `new_lane`, keeping its duration.
    pub fn move_item(
        &mut self,
        id: ItemId,
        new_start: EpochMillis,
        new_lane: LaneId,
        now: EpochMillis,
    ) -> TimelineResult<Mutation> {
        let Some(item) = self.current.item(id) else {
            warn!(item = %id, "move ignored: unknown item");
            return Ok(Mutation::Rejected(MutationRejection::UnknownItem(id)));
        };
        if !self.current.lanes.contains_key(&new_lane) {
            warn!(item = %id, lane = %new_lane, "move ignored: unknown lane");
            return Ok(Mutation::Rejected(MutationRejection::UnknownLane(new_lane)));
        }

        let start = self
            .policy
            .placement
            .legalize_action(PlacementAction::Move, new_start, now);
        let range = item.range.shifted(start - item.range.start()).validate()?;
        let updated = Item {
            lane_id: new_lane,
            range,
            style: derive_style(range, self.policy.time_zone)?,
            ..item.clone()
        };

        debug!(item = %id, lane = %new_lane, start, "item moved");
        Ok(self.publish(updated))
    }

    /// Replaces one boundary of an item; the other boundary is kept.
    ///
    /// A result with `start >= end` is rejected and the prior range stays.
    pub fn resize_item(
        &mut self,
        id: ItemId,
        edge: ResizeEdge,
        new_boundary: EpochMillis,
        now: EpochMillis,
    ) -> TimelineResult<Mutation> {
        let Some(item) = self.current.item(id) else {
            warn!(item = %id, "resize ignored: unknown item");
            return Ok(Mutation::Rejected(MutationRejection::UnknownItem(id)));
        };

        let boundary =
            self.policy
                .placement
                .legalize_action(PlacementAction::Resize(edge), new_boundary, now);
        let (start, end) = match edge {
            ResizeEdge::Start => (boundary, item.range.end()),
            ResizeEdge::End => (item.range.start(), boundary),
        };
        let Ok(range) = TimeRange::new(start, end) else {
            warn!(item = %id, ?edge, start, end, "resize ignored: inverted range");
            return Ok(Mutation::Rejected(MutationRejection::InvertedRange {
                start,
                end,
            }));
        };

        let updated = Item {
            range,
            style: derive_style(range, self.policy.time_zone)?,
            ..item.clone()
        };

        debug!(item = %id, ?edge, start, end, "item resized");
        Ok(self.publish(updated))
    }

    fn publish(&mut self, item: Item) -> Mutation {
        let mut next = (*self.current).clone();
        next.items.insert(item.id, item);
        self.current = Arc::new(next);
        Mutation::Committed(self.snapshot())
    }
}
