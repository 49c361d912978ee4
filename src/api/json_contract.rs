use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TimelineError, TimelineResult};
use crate::store::TimelineSnapshot;

pub const TIMELINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Snapshot wrapped with the schema version it was written under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TimelineSnapshot,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Versioned(TimelineSnapshotJsonContractV1),
    Bare(TimelineSnapshot),
}

impl TimelineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let document = TimelineSnapshotJsonContractV1 {
            schema_version: TIMELINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|e| TimelineError::InvalidData(format!("cannot encode timeline snapshot: {e}")))
    }

    /// Reads a versioned document or a bare snapshot.
    ///
    /// Every item must sit on a listed lane and `next_id` must lie above all
    /// item ids, so the result can seed a store without id collisions.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        let document: SnapshotDocument = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("cannot decode timeline snapshot: {e}")))?;

        let snapshot = match document {
            SnapshotDocument::Versioned(contract)
                if contract.schema_version == TIMELINE_SNAPSHOT_JSON_SCHEMA_V1 =>
            {
                contract.snapshot
            }
            SnapshotDocument::Versioned(contract) => {
                return Err(TimelineError::InvalidData(format!(
                    "timeline snapshot schema {} is not supported",
                    contract.schema_version
                )));
            }
            SnapshotDocument::Bare(snapshot) => snapshot,
        };

        for item in snapshot.items.values() {
            if !snapshot.lanes.contains_key(&item.lane_id) {
                return Err(TimelineError::UnknownLane(item.lane_id));
            }
            if item.id.0 >= snapshot.next_id {
                return Err(TimelineError::InvalidData(format!(
                    "item {} is not below next_id {}",
                    item.id, snapshot.next_id
                )));
            }
        }
        debug!(
            lanes = snapshot.lanes.len(),
            items = snapshot.items.len(),
            "timeline snapshot decoded"
        );
        Ok(snapshot)
    }
}
