mod drag_session;
mod listener;

use serde::{Deserialize, Serialize};

use crate::core::{LaneTopTable, Viewport};

pub use drag_session::{DragOutcome, DragSession, DropMiss, DropOutcome, DropResult};
pub use listener::{ListenerGuard, ListenerId, PointerSource};

/// Absolute page coordinates of a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// One event from the external draggable source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub page: PagePoint,
}

impl PointerEvent {
    #[must_use]
    pub fn start(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Start,
            page: PagePoint::new(x, y),
        }
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Move,
            page: PagePoint::new(x, y),
        }
    }

    #[must_use]
    pub fn end(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::End,
            page: PagePoint::new(x, y),
        }
    }
}

/// Transient visual offset of the dragged element from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragOffset {
    pub dx: f64,
    pub dy: f64,
}

/// Placement of the timeline's scroll container on the page.
///
/// Offsets and scroll positions are cumulative over all ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerGeometry {
    pub offset_left: f64,
    pub offset_top: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub width: f64,
}

impl ContainerGeometry {
    #[must_use]
    pub fn contains_page_x(self, page_x: f64) -> bool {
        page_x >= self.offset_left && page_x <= self.offset_left + self.width
    }

    /// Converts page coordinates into scroll-content coordinates.
    #[must_use]
    pub fn to_content(self, page: PagePoint) -> PagePoint {
        PagePoint {
            x: page.x - self.offset_left + self.scroll_left,
            y: page.y - self.offset_top + self.scroll_top,
        }
    }
}

/// Renderer state captured at the moment a drag is released.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSnapshot {
    pub viewport: Viewport,
    pub lanes: LaneTopTable,
    pub container: ContainerGeometry,
}

/// Opaque data carried by an external draggable template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragPayload {
    pub title: String,
}

impl DragPayload {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
