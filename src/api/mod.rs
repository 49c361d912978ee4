//! Host-facing engine facade.

mod drop_controller;
mod engine;
mod engine_config;
mod item_controller;
mod json_contract;
mod observer_dispatch;
mod time_window_controller;
mod validation;

pub use drop_controller::DragResponse;
pub use engine::TimelineEngine;
pub use engine_config::TimelineConfig;
pub use json_contract::{TIMELINE_SNAPSHOT_JSON_SCHEMA_V1, TimelineSnapshotJsonContractV1};
