use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartSnapshot, CombinedChart};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around a [`ChartSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshotJsonContractV1 {
    #[must_use]
    pub fn new(snapshot: ChartSnapshot) -> Self {
        Self {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot,
        }
    }

    /// Unwraps the snapshot, rejecting schema versions this build can't read.
    pub fn into_snapshot(self) -> ChartResult<ChartSnapshot> {
        if self.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                self.schema_version
            )));
        }
        Ok(self.snapshot)
    }
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&ChartSnapshotJsonContractV1::new(self.clone())).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        serde_json::from_str::<ChartSnapshotJsonContractV1>(input)
            .map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?
            .into_snapshot()
    }
}

impl<R: Renderer> CombinedChart<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
