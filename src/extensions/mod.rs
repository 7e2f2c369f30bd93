//! Observer hooks for consumers of nearest-point updates.
//!
//! Listeners are read-only: they observe the recomputed map but cannot
//! mutate engine internals.

pub mod listeners;

pub use listeners::{FnListener, NearestPointListener};
