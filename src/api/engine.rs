use crate::core::{CoordinateScale, SeriesCatalog};
use crate::extensions::NearestPointListener;
use crate::interaction::{PointerPosition, PointerSurface};

use super::{NearestPointEngineConfig, NearestPointMap};

/// Tracks the pointer and resolves the nearest sample per series type.
///
/// The scale, surface and catalog are injected at construction and only read
/// during a recompute. Hosts that mutate them through `*_mut` accessors call
/// [`NearestPointEngine::on_upstream_update`] afterwards.
pub struct NearestPointEngine<S, P, C>
where
    S: CoordinateScale,
    P: PointerSurface,
    C: SeriesCatalog,
{
    pub(super) scale: S,
    pub(super) surface: P,
    pub(super) catalog: C,
    pub(super) config: NearestPointEngineConfig,
    pub(super) pointer: PointerPosition,
    pub(super) nearest: NearestPointMap,
    pub(super) listeners: Vec<Box<dyn NearestPointListener>>,
    pub(super) recompute_count: u64,
}

impl<S, P, C> NearestPointEngine<S, P, C>
where
    S: CoordinateScale,
    P: PointerSurface,
    C: SeriesCatalog,
{
    #[must_use]
    pub fn new(scale: S, surface: P, catalog: C) -> Self {
        Self::with_config(scale, surface, catalog, NearestPointEngineConfig::default())
    }

    #[must_use]
    pub fn with_config(scale: S, surface: P, catalog: C, config: NearestPointEngineConfig) -> Self {
        Self {
            scale,
            surface,
            catalog,
            config,
            pointer: PointerPosition::Absent,
            nearest: NearestPointMap::default(),
            listeners: Vec::new(),
            recompute_count: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> NearestPointEngineConfig {
        self.config
    }

    /// Replaces the config and recomputes with the current pointer.
    pub fn set_config(&mut self, config: NearestPointEngineConfig) {
        self.config = config;
        self.recompute();
    }

    /// Current result; valid until the next notification.
    #[must_use]
    pub fn nearest_points(&self) -> &NearestPointMap {
        &self.nearest
    }

    #[must_use]
    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Number of completed recomputes, equal to the notifications dispatched.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    #[must_use]
    pub fn scale(&self) -> &S {
        &self.scale
    }

    pub fn scale_mut(&mut self) -> &mut S {
        &mut self.scale
    }

    #[must_use]
    pub fn surface(&self) -> &P {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut P {
        &mut self.surface
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    #[must_use]
    pub fn into_parts(self) -> (S, P, C) {
        (self.scale, self.surface, self.catalog)
    }
}
