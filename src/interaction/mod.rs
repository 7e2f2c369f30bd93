use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Viewport};

/// Last known pointer location over the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PointerPosition {
    /// Pointer hovers the surface at surface-relative pixel coordinates.
    Present { x: f64, y: f64 },
    /// Pointer is not over the surface.
    #[default]
    Absent,
}

impl PointerPosition {
    #[must_use]
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present { .. })
    }

    #[must_use]
    pub fn pixel(self) -> Option<PixelPoint> {
        match self {
            Self::Present { x, y } => Some(PixelPoint::new(x, y)),
            Self::Absent => None,
        }
    }
}

/// Pointer notifications delivered by the host, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Moved { x: f64, y: f64 },
    Left,
}

/// Read-only access to the drawing surface geometry.
pub trait PointerSurface {
    /// Current pixel size of the surface.
    fn viewport(&self) -> Viewport;

    /// Top-left corner of the surface in client coordinates.
    fn origin(&self) -> PixelPoint {
        PixelPoint::default()
    }

    /// Translates client coordinates into surface-relative coordinates.
    fn to_surface(&self, client_x: f64, client_y: f64) -> PixelPoint {
        let origin = self.origin();
        PixelPoint::new(client_x - origin.x, client_y - origin.y)
    }
}

impl<T: PointerSurface + ?Sized> PointerSurface for &T {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn origin(&self) -> PixelPoint {
        (**self).origin()
    }
}

impl<T: PointerSurface + ?Sized> PointerSurface for Rc<T> {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn origin(&self) -> PixelPoint {
        (**self).origin()
    }
}

/// Bounding box of the drawing surface in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub viewport: Viewport,
}

impl SurfaceRect {
    #[must_use]
    pub fn new(left: f64, top: f64, viewport: Viewport) -> Self {
        Self {
            left,
            top,
            viewport,
        }
    }

    /// Surface anchored at the client origin.
    #[must_use]
    pub fn at_origin(viewport: Viewport) -> Self {
        Self::new(0.0, 0.0, viewport)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn move_to(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
    }
}

impl PointerSurface for SurfaceRect {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.left, self.top)
    }
}
