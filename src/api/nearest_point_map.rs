use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PixelPoint, SeriesId};

/// Winning sample of one series, with its projected surface position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestPoint {
    pub series_id: SeriesId,
    pub series_type: String,
    pub point: DataPoint,
    pub pixel: PixelPoint,
}

/// Result of one recompute: at most one entry per series and per series type.
///
/// Entries are ordered by the first catalog appearance of their type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NearestPointMap {
    entries: IndexMap<SeriesId, NearestPoint>,
}

impl NearestPointMap {
    #[must_use]
    pub fn get(&self, series_id: SeriesId) -> Option<&NearestPoint> {
        self.entries.get(&series_id)
    }

    /// Selected sample for `series_id`, if the series won its type.
    #[must_use]
    pub fn point(&self, series_id: SeriesId) -> Option<DataPoint> {
        self.entries.get(&series_id).map(|entry| entry.point)
    }

    #[must_use]
    pub fn contains(&self, series_id: SeriesId) -> bool {
        self.entries.contains_key(&series_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NearestPoint> {
        self.entries.values()
    }

    pub fn series_ids(&self) -> impl Iterator<Item = SeriesId> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<NearestPoint> for NearestPointMap {
    fn from_iter<I: IntoIterator<Item = NearestPoint>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|entry| (entry.series_id, entry))
                .collect(),
        }
    }
}
