//! Injected viewport size source.
//!
//! A host exposes the primary display's rendered extent through
//! [`ViewportSource`] and announces resizes to explicit subscribers. The
//! [`ResizeSubscription`] guard unsubscribes when dropped, so a carousel that
//! goes away never leaves a listener behind.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback invoked after the observed extent may have changed.
pub type ResizeCallback = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Something that can report the primary display's extent and notify on resize.
pub trait ViewportSource {
    /// Current rendered extent along the scroll axis. 0 means "not laid out yet".
    fn extent(&self) -> f64;

    fn subscribe(&self, callback: ResizeCallback) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

/// Subscriber bookkeeping shared by `ViewportSource` implementations.
#[derive(Default)]
pub struct ResizeListeners {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, ResizeCallback)>>,
}

impl ResizeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, callback: ResizeCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, callback));
        id
    }

    pub fn remove(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Invoke every listener. Callbacks may subscribe or unsubscribe.
    pub fn notify(&self) {
        let snapshot: Vec<ResizeCallback> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in snapshot {
            callback();
        }
    }
}

impl fmt::Debug for ResizeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeListeners")
            .field("next_id", &self.next_id.get())
            .field("listeners", &self.len())
            .finish()
    }
}

/// Scoped resize subscription. Dropping it unsubscribes.
pub struct ResizeSubscription {
    source: Weak<dyn ViewportSource>,
    id: SubscriptionId,
}

impl ResizeSubscription {
    pub fn new(source: &Rc<dyn ViewportSource>, callback: ResizeCallback) -> Self {
        let id = source.subscribe(callback);
        Self {
            source: Rc::downgrade(source),
            id,
        }
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("id", &self.id)
            .field("source_alive", &(self.source.strong_count() > 0))
            .finish()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source.unsubscribe(self.id);
        }
    }
}
