//! Host-facing extension hooks.

pub mod observers;

pub use observers::{ObserverContext, TimelineEvent, TimelineObserver};
