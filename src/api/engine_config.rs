use serde::{Deserialize, Serialize};

use crate::core::NeighborTieBreak;
use crate::error::{ChartError, ChartResult};

/// Engine bootstrap configuration.
///
/// Serializable so host applications can persist it next to their chart
/// options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NearestPointEngineConfig {
    /// Winner between two samples equally far from the pointer's domain value.
    #[serde(default)]
    pub neighbor_tie_break: NeighborTieBreak,
}

impl NearestPointEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_neighbor_tie_break(mut self, tie_break: NeighborTieBreak) -> Self {
        self.neighbor_tie_break = tie_break;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }
}
