pub mod coordinate_scale;
pub mod domain_search;
pub mod scale;
pub mod series;
pub mod types;

pub use coordinate_scale::{ChartScale, CoordinateScale};
pub use domain_search::{NeighborTieBreak, bracketing_neighbors, domain_search, nearest_in_domain};
pub use scale::LinearScale;
pub use series::{
    SeriesCatalog, SeriesConfig, SeriesDefinition, SeriesId, SeriesStore, validate_series_data,
};
pub use types::{DataPoint, PixelPoint, Viewport};
