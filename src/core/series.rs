use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Stable series handle. Ids are never reused by a [`SeriesStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(u64);

impl SeriesId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One plotted series as seen by the nearest-point engine.
///
/// Deserialization runs the same checks as [`SeriesConfig::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeriesConfig")]
pub struct SeriesConfig {
    id: SeriesId,
    #[serde(rename = "type")]
    series_type: String,
    visible: bool,
    data: Vec<DataPoint>,
}

#[derive(Deserialize)]
struct RawSeriesConfig {
    id: SeriesId,
    #[serde(rename = "type")]
    series_type: String,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default)]
    data: Vec<DataPoint>,
}

impl TryFrom<RawSeriesConfig> for SeriesConfig {
    type Error = ChartError;

    fn try_from(raw: RawSeriesConfig) -> ChartResult<Self> {
        Self::new(raw.id, raw.series_type, raw.visible, raw.data)
    }
}

impl SeriesConfig {
    /// Builds a series for hosts that keep their own [`SeriesCatalog`].
    ///
    /// Samples must be finite and sorted by non-decreasing `x`. Keeping ids
    /// unique within one catalog is the caller's responsibility.
    pub fn new(
        id: SeriesId,
        series_type: impl Into<String>,
        visible: bool,
        data: Vec<DataPoint>,
    ) -> ChartResult<Self> {
        validate_series_data(&data)?;
        Ok(Self {
            id,
            series_type: series_type.into(),
            visible,
            data,
        })
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    /// Grouping tag; at most one series per type is highlighted.
    #[must_use]
    pub fn series_type(&self) -> &str {
        &self.series_type
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Samples in ascending `x` order.
    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }
}

/// User-facing series description without an assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDefinition {
    #[serde(rename = "type")]
    pub series_type: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

impl SeriesDefinition {
    #[must_use]
    pub fn new(series_type: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            series_type: series_type.into(),
            visible: true,
            data,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

fn default_visible() -> bool {
    true
}

/// Ordered, read-only access to the plotted series.
///
/// Ids must be unique within one catalog; the engine skips repeated ids.
pub trait SeriesCatalog {
    /// All series in catalog order.
    fn series(&self) -> &[SeriesConfig];

    fn get(&self, id: SeriesId) -> Option<&SeriesConfig> {
        self.series().iter().find(|series| series.id == id)
    }
}

impl<T: SeriesCatalog + ?Sized> SeriesCatalog for &T {
    fn series(&self) -> &[SeriesConfig] {
        (**self).series()
    }

    fn get(&self, id: SeriesId) -> Option<&SeriesConfig> {
        (**self).get(id)
    }
}

impl<T: SeriesCatalog + ?Sized> SeriesCatalog for Rc<T> {
    fn series(&self) -> &[SeriesConfig] {
        (**self).series()
    }

    fn get(&self, id: SeriesId) -> Option<&SeriesConfig> {
        (**self).get(id)
    }
}

/// Arena of series keyed by [`SeriesId`], preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    entries: Vec<SeriesConfig>,
    next_id: u64,
}

impl SeriesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = SeriesDefinition>,
    ) -> ChartResult<Self> {
        let mut store = Self::new();
        for definition in definitions {
            store.add_definition(definition)?;
        }
        Ok(store)
    }

    /// Builds a store from a JSON array of series definitions.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let definitions: Vec<SeriesDefinition> = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse series definitions: {e}"))
        })?;
        Self::from_definitions(definitions)
    }

    /// Adds a visible series and returns its id.
    pub fn add_series(
        &mut self,
        series_type: impl Into<String>,
        data: Vec<DataPoint>,
    ) -> ChartResult<SeriesId> {
        self.add_definition(SeriesDefinition::new(series_type, data))
    }

    pub fn add_definition(&mut self, definition: SeriesDefinition) -> ChartResult<SeriesId> {
        validate_series_data(&definition.data)?;

        let id = SeriesId(self.next_id);
        self.next_id += 1;
        debug!(
            series = %id,
            series_type = %definition.series_type,
            points = definition.data.len(),
            "add series"
        );
        self.entries.push(SeriesConfig {
            id,
            series_type: definition.series_type,
            visible: definition.visible,
            data: definition.data,
        });
        Ok(id)
    }

    pub fn remove_series(&mut self, id: SeriesId) -> Option<SeriesConfig> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        debug!(series = %id, "remove series");
        Some(self.entries.remove(position))
    }

    pub fn set_visible(&mut self, id: SeriesId, visible: bool) -> ChartResult<()> {
        let entry = self.entry_mut(id)?;
        entry.visible = visible;
        debug!(series = %id, visible, "set series visibility");
        Ok(())
    }

    pub fn set_data(&mut self, id: SeriesId, data: Vec<DataPoint>) -> ChartResult<()> {
        validate_series_data(&data)?;
        let entry = self.entry_mut(id)?;
        debug!(series = %id, points = data.len(), "replace series data");
        entry.data = data;
        Ok(())
    }

    /// Appends one sample; its `x` must not precede the current last sample.
    pub fn append_point(&mut self, id: SeriesId, point: DataPoint) -> ChartResult<()> {
        if !point.is_finite() {
            return Err(ChartError::InvalidData(
                "series samples must be finite".to_owned(),
            ));
        }
        let entry = self.entry_mut(id)?;
        if let Some(last) = entry.data.last() {
            if point.x < last.x {
                return Err(ChartError::InvalidData(format!(
                    "appended sample x={} precedes last sample x={}",
                    point.x, last.x
                )));
            }
        }
        entry.data.push(point);
        trace!(series = %id, points = entry.data.len(), "append series point");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: SeriesId) -> ChartResult<&mut SeriesConfig> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(ChartError::UnknownSeries(id))
    }
}

impl SeriesCatalog for SeriesStore {
    fn series(&self) -> &[SeriesConfig] {
        &self.entries
    }
}

/// Checks that samples are finite and sorted by non-decreasing `x`.
pub fn validate_series_data(data: &[DataPoint]) -> ChartResult<()> {
    if data.iter().any(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(
            "series samples must be finite".to_owned(),
        ));
    }
    if let Some(index) = data.windows(2).position(|pair| pair[1].x < pair[0].x) {
        return Err(ChartError::InvalidData(format!(
            "series samples must be ascending by x (violation at index {})",
            index + 1
        )));
    }
    Ok(())
}
