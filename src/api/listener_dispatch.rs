use crate::core::{CoordinateScale, SeriesCatalog};
use crate::interaction::PointerSurface;

use super::NearestPointEngine;

impl<S, P, C> NearestPointEngine<S, P, C>
where
    S: CoordinateScale,
    P: PointerSurface,
    C: SeriesCatalog,
{
    pub(super) fn dispatch_updated(&mut self) {
        let nearest = &self.nearest;
        for listener in &mut self.listeners {
            listener.on_updated(nearest);
        }
    }
}
