//! Synchronized dual-list navigation for media carousels.
//!
//! A primary display shows one catalog item at a time while a secondary strip
//! of thumbnails stays scrolled so the active thumbnail sits at its midpoint.
//! Both are driven by a single selection index owned by [`CarouselEngine`].
//!
//! Hosts plug in two capabilities: a [`ScrollSurface`](scroll::ScrollSurface)
//! for the thumbnail strip and a [`ViewportSource`](viewport::ViewportSource)
//! for the primary display's size. The optional `gui` feature provides GTK4
//! implementations of both.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod navigation;
pub mod scroll;
pub mod viewport;

#[cfg(feature = "gui")]
pub mod ui;

#[cfg(test)]
mod testing;

pub use config::CarouselConfig;
pub use engine::{Carousel, CarouselEngine, CarouselEvent, WeakCarousel};
pub use error::{CatalogError, NavigationError};
pub use models::{Catalog, CatalogItem};
pub use navigation::{Command, IndexChange, Indicator};
