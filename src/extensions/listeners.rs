use crate::api::NearestPointMap;

/// Receives one notification per completed recompute.
///
/// The map passed to `on_updated` stays valid until the next notification.
pub trait NearestPointListener {
    fn id(&self) -> &str;
    fn on_updated(&mut self, nearest: &NearestPointMap);
}

/// Closure-backed listener.
pub struct FnListener<F> {
    id: String,
    callback: F,
}

impl<F> FnListener<F>
where
    F: FnMut(&NearestPointMap),
{
    pub fn new(id: impl Into<String>, callback: F) -> Self {
        Self {
            id: id.into(),
            callback,
        }
    }
}

impl<F> NearestPointListener for FnListener<F>
where
    F: FnMut(&NearestPointMap),
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_updated(&mut self, nearest: &NearestPointMap) {
        (self.callback)(nearest);
    }
}
