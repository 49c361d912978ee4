use tracing::warn;

use crate::core::{Clock, EpochMillis, ItemId, LaneId, ResizeEdge};
use crate::error::TimelineResult;
use crate::extensions::TimelineEvent;
use crate::store::{Mutation, MutationRejection};

use super::TimelineEngine;

impl<C: Clock> TimelineEngine<C> {
    /// Moves an item, keeping its duration. Past starts are snapped forward.
    pub fn move_item(
        &mut self,
        id: ItemId,
        new_start: EpochMillis,
        new_lane: LaneId,
    ) -> TimelineResult<Mutation> {
        let now = self.clock.now_ms();
        let mutation = self.store.move_item(id, new_start, new_lane, now)?;
        match &mutation {
            Mutation::Committed(snapshot) => {
                if let Some(item) = snapshot.item(id) {
                    let event = TimelineEvent::ItemMoved {
                        item: id,
                        lane: item.lane_id,
                        range: item.range,
                    };
                    self.emit_event(event, now);
                }
            }
            Mutation::Rejected(reason) => self.emit_rejection(*reason, now),
        }
        Ok(mutation)
    }

    /// Moves an item onto the lane at zero-based `row` of the stacking order.
    pub fn move_item_to_row(
        &mut self,
        id: ItemId,
        new_start: EpochMillis,
        row: usize,
    ) -> TimelineResult<Mutation> {
        match self.store.lane_at_row(row) {
            Some(lane) => self.move_item(id, new_start, lane),
            None => {
                warn!(item = %id, row, "move ignored: no lane at row");
                let reason = MutationRejection::UnknownRow(row);
                let now = self.clock.now_ms();
                self.emit_rejection(reason, now);
                Ok(Mutation::Rejected(reason))
            }
        }
    }

    /// Replaces the dragged boundary of an item.
    pub fn resize_item(
        &mut self,
        id: ItemId,
        edge: ResizeEdge,
        new_boundary: EpochMillis,
    ) -> TimelineResult<Mutation> {
        let now = self.clock.now_ms();
        let mutation = self.store.resize_item(id, edge, new_boundary, now)?;
        match &mutation {
            Mutation::Committed(snapshot) => {
                if let Some(item) = snapshot.item(id) {
                    let event = TimelineEvent::ItemResized {
                        item: id,
                        edge,
                        range: item.range,
                    };
                    self.emit_event(event, now);
                }
            }
            Mutation::Rejected(reason) => self.emit_rejection(*reason, now),
        }
        Ok(mutation)
    }

    fn emit_rejection(&mut self, reason: MutationRejection, now: EpochMillis) {
        self.emit_event(TimelineEvent::MutationRejected { reason }, now);
    }
}
