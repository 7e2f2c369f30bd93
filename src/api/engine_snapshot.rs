use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::PointerPosition;

use super::NearestPoint;

/// Serializable state snapshot used by regression tests and debugging
/// tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestPointSnapshot {
    pub pointer: PointerPosition,
    pub viewport: Viewport,
    pub recompute_count: u64,
    pub entries: Vec<NearestPoint>,
}
