use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::NearestPointSnapshot;

pub const NEAREST_POINT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around [`NearestPointSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestPointSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: NearestPointSnapshot,
}

#[derive(Serialize)]
struct ContractV1Ref<'a> {
    schema_version: u32,
    snapshot: &'a NearestPointSnapshot,
}

impl NearestPointSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ContractV1Ref {
            schema_version: NEAREST_POINT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self,
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| ChartError::InvalidData(format!("snapshot contract v1 encode: {e}")))
    }

    /// Parses a versioned contract, or a bare snapshot when no
    /// `schema_version` key is present.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("snapshot json decode: {e}")))?;

        let Some(version) = value.get("schema_version") else {
            return serde_json::from_value(value)
                .map_err(|e| ChartError::InvalidData(format!("bare snapshot decode: {e}")));
        };
        if version.as_u64() != Some(u64::from(NEAREST_POINT_SNAPSHOT_JSON_SCHEMA_V1)) {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {version}"
            )));
        }

        let contract: NearestPointSnapshotJsonContractV1 = serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidData(format!("snapshot contract v1 decode: {e}")))?;
        Ok(contract.snapshot)
    }
}
