//! chart-nearest: nearest data point resolution for chart hover overlays.
//!
//! The engine inverts a pointer position through the chart's coordinate
//! scale, searches every visible series for its domain-nearest sample and
//! keeps one winner per series type. Renderers read the resulting map after
//! each update notification.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{NearestPointEngine, NearestPointEngineConfig, NearestPointMap};
pub use error::{ChartError, ChartResult};
