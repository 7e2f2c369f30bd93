use tracing::trace;

use crate::core::{CoordinateScale, SeriesCatalog};
use crate::interaction::{PointerEvent, PointerPosition, PointerSurface};

use super::NearestPointEngine;

impl<S, P, C> NearestPointEngine<S, P, C>
where
    S: CoordinateScale,
    P: PointerSurface,
    C: SeriesCatalog,
{
    /// Records a surface-relative pointer position and recomputes.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition::Present { x, y };
        self.recompute();
    }

    /// Same as [`Self::on_pointer_move`] for client-relative coordinates.
    pub fn on_client_pointer_move(&mut self, client_x: f64, client_y: f64) {
        let local = self.surface.to_surface(client_x, client_y);
        trace!(client_x, client_y, x = local.x, y = local.y, "translate pointer");
        self.on_pointer_move(local.x, local.y);
    }

    /// Clears the pointer; the following recompute yields an empty map.
    pub fn on_pointer_leave(&mut self) {
        self.pointer = PointerPosition::Absent;
        self.recompute();
    }

    /// Recomputes after the scale, surface or catalog changed.
    pub fn on_upstream_update(&mut self) {
        self.recompute();
    }

    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Left => self.on_pointer_leave(),
        }
    }
}
