//! Authoritative item and lane collections.
//!
//! Every committed mutation publishes a fresh `TimelineSnapshot`; snapshots
//! handed out earlier are never touched again.

mod item_store;
mod snapshot;

pub use item_store::{ItemStore, Mutation, MutationRejection, StorePolicy};
pub use snapshot::TimelineSnapshot;
