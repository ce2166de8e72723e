//! Secondary-list scrolling for the dual carousel.
//!
//! This module provides:
//! - `ScrollSurface` - the injected scroll capability of the thumbnail strip
//! - `ThumbnailGeometry` - thumbnail length/gap policy
//! - `ScrollSynchronizer` - index-driven centering
//! - `StepScroller` - manual relative steps

pub mod geometry;
pub mod stepper;
pub mod surface;
pub mod synchronizer;

pub use geometry::ThumbnailGeometry;
pub use stepper::{StepDirection, StepScroller};
pub use surface::{ScrollInstruction, ScrollSurface};
pub use synchronizer::{ScrollSynchronizer, SyncOutcome};
