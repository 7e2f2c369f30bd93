use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DataPoint;

/// Which neighbor wins when both bracketing samples are equally far from
/// the searched domain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NeighborTieBreak {
    /// Keep the lower-x neighbor.
    #[default]
    PreferLower,
    /// Keep the higher-x neighbor.
    PreferUpper,
}

/// Returns the insertion position of `domain` in `points` (ascending by `x`).
///
/// Every sample before the returned index has `x < domain`; every sample at
/// or after it has `x >= domain`.
#[must_use]
pub fn domain_search(points: &[DataPoint], domain: f64) -> usize {
    points.partition_point(|point| point.x < domain)
}

/// Returns the samples bracketing `domain`: `points[pos - 1]` and
/// `points[pos]` where they exist, in ascending order.
#[must_use]
pub fn bracketing_neighbors(points: &[DataPoint], domain: f64) -> SmallVec<[DataPoint; 2]> {
    let pos = domain_search(points, domain);
    let mut near = SmallVec::new();
    if pos > 0 {
        near.push(points[pos - 1]);
    }
    if let Some(point) = points.get(pos) {
        near.push(*point);
    }
    near
}

/// Picks the domain-nearest sample among the neighbors of `domain`.
///
/// Returns `None` only for empty input.
#[must_use]
pub fn nearest_in_domain(
    points: &[DataPoint],
    domain: f64,
    tie_break: NeighborTieBreak,
) -> Option<DataPoint> {
    let mut near = bracketing_neighbors(points, domain);
    if tie_break == NeighborTieBreak::PreferUpper {
        near.reverse();
    }
    // Stable: on equal distance the first entry stays first.
    near.sort_by_key(|point| OrderedFloat((point.x - domain).abs()));
    near.first().copied()
}
