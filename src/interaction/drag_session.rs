use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{EpochMillis, LaneKey, lane_at, time_at};
use crate::error::TimelineResult;

use super::{
    DragOffset, DragPayload, DropSnapshot, ListenerGuard, PagePoint, PointerEvent, PointerPhase,
    PointerSource,
};

/// Resolved placement of a released drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropResult {
    pub time: EpochMillis,
    pub lane: LaneKey,
    pub payload: DragPayload,
}

/// Why a release did not resolve to a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropMiss {
    /// Release without a preceding start.
    NoGesture,
    OutsideContainer,
    NoLane,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DropOutcome {
    Dropped(DropResult),
    Missed(DropMiss),
}

/// Result of feeding one pointer event into a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragOutcome {
    Started,
    Moved(DragOffset),
    Released(DropOutcome),
    /// Move event outside of a gesture.
    Ignored,
}

/// Draggable external template bound to one pointer listener.
///
/// The listener is attached on `mount` and released when the session is
/// dropped, whether or not a gesture is in flight.
#[derive(Debug)]
pub struct DragSession<S: PointerSource> {
    listener: ListenerGuard<S>,
    payload: DragPayload,
    origin: Option<PagePoint>,
    offset: DragOffset,
}

impl<S: PointerSource> DragSession<S> {
    pub fn mount(source: S, payload: DragPayload) -> Self {
        Self {
            listener: ListenerGuard::attach(source),
            payload,
            origin: None,
            offset: DragOffset::default(),
        }
    }

    #[must_use]
    pub fn payload(&self) -> &DragPayload {
        &self.payload
    }

    #[must_use]
    pub fn listener(&self) -> &ListenerGuard<S> {
        &self.listener
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Current visual offset; zero outside of a gesture.
    #[must_use]
    pub fn offset(&self) -> DragOffset {
        self.offset
    }

    pub fn begin(&mut self, pointer: PagePoint) {
        trace!(x = pointer.x, y = pointer.y, "drag start");
        self.origin = Some(pointer);
        self.offset = DragOffset::default();
    }

    pub fn update(&mut self, pointer: PagePoint) -> Option<DragOffset> {
        let origin = self.origin?;
        self.offset = DragOffset {
            dx: pointer.x - origin.x,
            dy: pointer.y - origin.y,
        };
        trace!(dx = self.offset.dx, dy = self.offset.dy, "drag move");
        Some(self.offset)
    }

    /// Finishes the gesture and resolves the release point against `snapshot`.
    ///
    /// The visual offset is reset on every path. Misses are regular outcomes;
    /// only a malformed viewport is an error.
    pub fn end(&mut self, pointer: PagePoint, snapshot: &DropSnapshot) -> TimelineResult<DropOutcome> {
        self.offset = DragOffset::default();
        if self.origin.take().is_none() {
            return Ok(DropOutcome::Missed(DropMiss::NoGesture));
        }

        if !snapshot.container.contains_page_x(pointer.x) {
            debug!(page_x = pointer.x, "drop outside container");
            return Ok(DropOutcome::Missed(DropMiss::OutsideContainer));
        }

        let content = snapshot.container.to_content(pointer);
        let time = time_at(content.x, snapshot.viewport)?;
        let Some(lane) = lane_at(content.y, &snapshot.lanes) else {
            debug!(content_y = content.y, "drop above first lane");
            return Ok(DropOutcome::Missed(DropMiss::NoLane));
        };

        debug!(time, lane = lane.0, "drop resolved");
        Ok(DropOutcome::Dropped(DropResult {
            time,
            lane,
            payload: self.payload.clone(),
        }))
    }

    /// Abandons an in-flight gesture without producing a drop.
    pub fn cancel(&mut self) {
        if self.origin.take().is_some() {
            trace!("drag cancelled");
        }
        self.offset = DragOffset::default();
    }

    /// Routes one event; `snapshot` is only read when a gesture is released.
    pub fn handle<F>(&mut self, event: PointerEvent, snapshot: F) -> TimelineResult<DragOutcome>
    where
        F: FnOnce() -> DropSnapshot,
    {
        match event.phase {
            PointerPhase::Start => {
                self.begin(event.page);
                Ok(DragOutcome::Started)
            }
            PointerPhase::Move => Ok(self
                .update(event.page)
                .map_or(DragOutcome::Ignored, DragOutcome::Moved)),
            PointerPhase::End if !self.is_dragging() => {
                self.offset = DragOffset::default();
                Ok(DragOutcome::Released(DropOutcome::Missed(DropMiss::NoGesture)))
            }
            PointerPhase::End => {
                let snapshot = snapshot();
                self.end(event.page, &snapshot).map(DragOutcome::Released)
            }
        }
    }

    /// Tears the session down, releasing its listener.
    pub fn unmount(self) {}
}
