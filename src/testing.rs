//! In-memory fakes for the engine's host collaborators.

use std::cell::{Cell, RefCell};

use crate::scroll::{ScrollInstruction, ScrollSurface};
use crate::viewport::{ResizeCallback, ResizeListeners, SubscriptionId, ViewportSource};

/// Scroll surface that records every instruction and tracks the resulting offset.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    instructions: RefCell<Vec<ScrollInstruction>>,
    offset: Cell<f64>,
    max_offset: Cell<Option<f64>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface laid out with `content` total length, of which `visible` shows.
    pub fn with_visible_length(content: f64, visible: f64) -> Self {
        let surface = Self::default();
        surface.max_offset.set(Some((content - visible).max(0.0)));
        surface
    }

    pub fn instructions(&self) -> Vec<ScrollInstruction> {
        self.instructions.borrow().clone()
    }

    pub fn scroll_to_calls(&self) -> Vec<(f64, bool)> {
        self.instructions
            .borrow()
            .iter()
            .filter_map(|i| match *i {
                ScrollInstruction::To { offset, animated } => Some((offset, animated)),
                ScrollInstruction::By { .. } => None,
            })
            .collect()
    }

    pub fn offset(&self) -> f64 {
        self.offset.get()
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to(&self, offset: f64, animated: bool) {
        self.instructions
            .borrow_mut()
            .push(ScrollInstruction::To { offset, animated });
        self.offset.set(offset);
    }

    fn scroll_by(&self, delta: f64, animated: bool) {
        self.instructions
            .borrow_mut()
            .push(ScrollInstruction::By { delta, animated });
        self.offset.set(self.offset.get() + delta);
    }

    fn max_offset(&self) -> Option<f64> {
        self.max_offset.get()
    }
}

/// Viewport source whose extent is set by hand; `resize` notifies subscribers.
#[derive(Debug, Default)]
pub struct ManualViewportSource {
    extent: Cell<f64>,
    listeners: ResizeListeners,
}

impl ManualViewportSource {
    pub fn new(extent: f64) -> Self {
        Self {
            extent: Cell::new(extent),
            listeners: ResizeListeners::new(),
        }
    }

    /// Change the extent without notifying anyone.
    pub fn set_extent(&self, extent: f64) {
        self.extent.set(extent);
    }

    /// Change the extent and fire a resize event.
    pub fn resize(&self, extent: f64) {
        self.extent.set(extent);
        self.listeners.notify();
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ViewportSource for ManualViewportSource {
    fn extent(&self) -> f64 {
        self.extent.get()
    }

    fn subscribe(&self, callback: ResizeCallback) -> SubscriptionId {
        self.listeners.add(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.remove(id);
    }
}
