//! Viewport measurement for the primary display.
//!
//! - `ViewportSource` - host-provided extent + resize notifications
//! - `ResizeSubscription` - scoped subscription guard
//! - `ViewportTracker` - last measured extent with change detection

pub mod source;
pub mod tracker;

pub use source::{ResizeCallback, ResizeListeners, ResizeSubscription, SubscriptionId, ViewportSource};
pub use tracker::{ExtentChange, ViewportTracker};
