//! timeline-dnd: drag-and-drop scheduling core for lane timelines.
//!
//! Turns pointer positions on a scrollable, zoomable timeline into
//! `(time, lane)` placements and applies the scheduling rules (no past
//! placements, grid snapping, rolling navigation horizon) before committing
//! item changes. Rendering stays with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod store;
pub mod telemetry;

pub use api::{TimelineConfig, TimelineEngine};
pub use error::{TimelineError, TimelineResult};
