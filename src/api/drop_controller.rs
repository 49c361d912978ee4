use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Clock, Item, PlacementAction};
use crate::error::TimelineResult;
use crate::extensions::TimelineEvent;
use crate::interaction::{
    DragOffset, DragOutcome, DragSession, DropMiss, DropOutcome, DropResult, DropSnapshot,
    PagePoint, PointerEvent, PointerSource,
};

use super::TimelineEngine;

/// What the host should show after feeding a pointer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragResponse {
    Started,
    Moved(DragOffset),
    Created(Item),
    /// Nothing was created; the dragged element snaps back.
    Missed(DropMiss),
    Ignored,
}

impl<C: Clock> TimelineEngine<C> {
    /// Routes a pointer event from `session` and commits successful drops.
    ///
    /// `snapshot` is only invoked on release.
    pub fn handle_pointer_event<S, F>(
        &mut self,
        session: &mut DragSession<S>,
        event: PointerEvent,
        snapshot: F,
    ) -> TimelineResult<DragResponse>
    where
        S: PointerSource,
        F: FnOnce() -> DropSnapshot,
    {
        match session.handle(event, snapshot)? {
            DragOutcome::Started => Ok(DragResponse::Started),
            DragOutcome::Moved(offset) => Ok(DragResponse::Moved(offset)),
            DragOutcome::Ignored => Ok(DragResponse::Ignored),
            DragOutcome::Released(outcome) => self.commit_drop_outcome(outcome),
        }
    }

    /// Ends the gesture of `session` at `pointer` and commits the result.
    pub fn release_drag<S: PointerSource>(
        &mut self,
        session: &mut DragSession<S>,
        pointer: PagePoint,
        snapshot: &DropSnapshot,
    ) -> TimelineResult<DragResponse> {
        let outcome = session.end(pointer, snapshot)?;
        self.commit_drop_outcome(outcome)
    }

    /// Creates an item for a resolved drop.
    pub fn commit_drop(&mut self, result: DropResult) -> TimelineResult<Item> {
        let now = self.clock.now_ms();
        let result = if self.config.legalize_drops {
            let time = self
                .store
                .policy()
                .placement
                .legalize_action(PlacementAction::Create, result.time, now);
            DropResult { time, ..result }
        } else {
            result
        };

        let item = self.store.create_from_drop(&result)?;
        self.emit_event(
            TimelineEvent::ItemCreated {
                item: item.id,
                lane: item.lane_id,
                range: item.range,
            },
            now,
        );
        Ok(item)
    }

    fn commit_drop_outcome(&mut self, outcome: DropOutcome) -> TimelineResult<DragResponse> {
        match outcome {
            DropOutcome::Dropped(result) => self.commit_drop(result).map(DragResponse::Created),
            DropOutcome::Missed(reason) => {
                debug!(?reason, "drop produced no item");
                let now = self.clock.now_ms();
                self.emit_event(TimelineEvent::DropMissed { reason }, now);
                Ok(DragResponse::Missed(reason))
            }
        }
    }
}
