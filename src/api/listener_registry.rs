use tracing::debug;

use crate::core::{CoordinateScale, SeriesCatalog};
use crate::error::{ChartError, ChartResult};
use crate::extensions::NearestPointListener;
use crate::interaction::PointerSurface;

use super::NearestPointEngine;

impl<S, P, C> NearestPointEngine<S, P, C>
where
    S: CoordinateScale,
    P: PointerSurface,
    C: SeriesCatalog,
{
    /// Registers a listener with unique identifier.
    ///
    /// Listeners are notified in registration order.
    pub fn register_listener(
        &mut self,
        listener: Box<dyn NearestPointListener>,
    ) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        debug!(listener = %listener_id, "register nearest point listener");
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            debug!(listener = %listener_id, "unregister nearest point listener");
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }
}
