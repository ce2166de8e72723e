use std::rc::Rc;

use tracing::debug;

use super::source::{ResizeSubscription, ViewportSource};

/// A measured extent that differs from the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtentChange {
    pub previous: f64,
    pub current: f64,
}

/// Tracks the primary display's rendered extent.
pub struct ViewportTracker {
    source: Rc<dyn ViewportSource>,
    extent: f64,
    subscription: Option<ResizeSubscription>,
}

impl std::fmt::Debug for ViewportTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("extent", &self.extent)
            .field("source", &"<viewport source>")
            .field("subscription", &self.subscription)
            .finish()
    }
}

impl ViewportTracker {
    pub fn new(source: Rc<dyn ViewportSource>) -> Self {
        Self {
            source,
            extent: 0.0,
            subscription: None,
        }
    }

    /// Last measured extent; 0 until the first positive measurement.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn is_measured(&self) -> bool {
        self.extent > 0.0
    }

    pub fn source(&self) -> Rc<dyn ViewportSource> {
        self.source.clone()
    }

    /// Read the source and record the extent, reporting only real changes.
    pub fn measure(&mut self) -> Option<ExtentChange> {
        let current = sanitize_extent(self.source.extent());
        if current == self.extent {
            return None;
        }
        let previous = std::mem::replace(&mut self.extent, current);
        debug!(previous, current, "Viewport extent changed");
        Some(ExtentChange { previous, current })
    }

    /// Keep `subscription` alive for as long as the tracker stays attached.
    pub fn attach(&mut self, subscription: ResizeSubscription) {
        self.subscription = Some(subscription);
    }

    /// Drop the resize subscription. Returns false if none was held.
    pub fn detach(&mut self) -> bool {
        self.subscription.take().is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

fn sanitize_extent(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}
