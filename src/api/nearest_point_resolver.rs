use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use tracing::{trace, warn};

use crate::core::{CoordinateScale, SeriesCatalog, nearest_in_domain};
use crate::interaction::PointerSurface;

use super::{NearestPoint, NearestPointEngine, NearestPointMap};

/// Best-so-far entry for one series type during arbitration.
struct Candidate<'a> {
    distance: OrderedFloat<f64>,
    series_type: &'a str,
    entry: NearestPoint,
}

impl<S, P, C> NearestPointEngine<S, P, C>
where
    S: CoordinateScale,
    P: PointerSurface,
    C: SeriesCatalog,
{
    /// Rebuilds the nearest-point map from the current pointer and
    /// collaborators, then notifies listeners exactly once.
    pub fn recompute(&mut self) {
        self.nearest = self.resolve_nearest_points();
        self.recompute_count += 1;
        trace!(
            pointer = ?self.pointer,
            winners = self.nearest.len(),
            revision = self.recompute_count,
            "recompute nearest points"
        );
        self.dispatch_updated();
    }

    fn resolve_nearest_points(&self) -> NearestPointMap {
        let Some(pointer) = self.pointer.pixel() else {
            return NearestPointMap::default();
        };

        let domain = match self.scale.invert(pointer.x) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    error = %err,
                    pointer_x = pointer.x,
                    "skipping nearest points: scale inversion failed"
                );
                return NearestPointMap::default();
            }
        };

        let viewport = self.surface.viewport();
        let tie_break = self.config.neighbor_tie_break;
        let mut best_by_type: IndexMap<&str, Candidate<'_>> = IndexMap::new();
        let mut seen_ids = IndexSet::new();

        for series in self.catalog.series() {
            if !seen_ids.insert(series.id()) {
                warn!(series = %series.id(), "skipping series: id repeated in catalog");
                continue;
            }
            if !series.visible() {
                continue;
            }
            let Some(point) = nearest_in_domain(series.data(), domain, tie_break) else {
                continue;
            };

            let pixel = match self.scale.project(point) {
                Ok(pixel) => pixel,
                Err(err) => {
                    warn!(
                        error = %err,
                        series = %series.id(),
                        "skipping series: projection failed"
                    );
                    continue;
                }
            };
            if !viewport.contains_x_exclusive(pixel.x) {
                continue;
            }

            let distance = OrderedFloat((pixel.x - pointer.x).abs());
            let replaces = best_by_type
                .get(series.series_type())
                .is_none_or(|current| distance < current.distance);
            if replaces {
                best_by_type.insert(
                    series.series_type(),
                    Candidate {
                        distance,
                        series_type: series.series_type(),
                        entry: NearestPoint {
                            series_id: series.id(),
                            series_type: series.series_type().to_owned(),
                            point,
                            pixel,
                        },
                    },
                );
            }
        }

        best_by_type
            .into_values()
            .map(|candidate| {
                trace!(
                    series_type = candidate.series_type,
                    series = %candidate.entry.series_id,
                    distance_px = candidate.distance.into_inner(),
                    "nearest point winner"
                );
                candidate.entry
            })
            .collect()
    }
}
