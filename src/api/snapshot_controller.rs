use crate::core::{CoordinateScale, SeriesCatalog};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointerSurface;

use super::{NearestPointEngine, NearestPointSnapshot};

impl<S, P, C> NearestPointEngine<S, P, C>
where
    S: CoordinateScale,
    P: PointerSurface,
    C: SeriesCatalog,
{
    #[must_use]
    pub fn snapshot(&self) -> NearestPointSnapshot {
        NearestPointSnapshot {
            pointer: self.pointer,
            viewport: self.surface.viewport(),
            recompute_count: self.recompute_count,
            entries: self.nearest.iter().cloned().collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
