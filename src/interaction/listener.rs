use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// Host-side pointer listener registry of a draggable element.
pub trait PointerSource {
    fn attach(&mut self) -> ListenerId;
    fn detach(&mut self, id: ListenerId);
}

/// Owns one attached listener and detaches it when dropped.
#[derive(Debug)]
pub struct ListenerGuard<S: PointerSource> {
    source: S,
    id: ListenerId,
}

impl<S: PointerSource> ListenerGuard<S> {
    pub fn attach(mut source: S) -> Self {
        let id = source.attach();
        trace!(listener = id.0, "pointer listener attached");
        Self { source, id }
    }

    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<S: PointerSource> Drop for ListenerGuard<S> {
    fn drop(&mut self) {
        self.source.detach(self.id);
        trace!(listener = self.id.0, "pointer listener detached");
    }
}
