use tracing::trace;

use super::geometry::ThumbnailGeometry;
use super::surface::{ScrollInstruction, ScrollSurface};

/// Result of one synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncOutcome {
    /// A `scroll_to` was issued with this offset.
    Applied(f64),
    /// The (index, extent) pair matches the last applied one.
    Unchanged,
    /// The viewport is unmeasured; the pass waits for a positive extent.
    Deferred,
}

/// Keeps the active thumbnail centered in the secondary list.
///
/// The offset is recomputed from scratch for every new (index, extent) pair:
///
/// ```text
/// target  = index * (L + g) - extent / 2 + L / 2
/// applied = clamp(target, 0, max_offset)
/// ```
///
/// `max_offset` comes from the surface, since the strip's visible length need
/// not match the primary display's extent. The upper bound only applies when
/// the surface reports one and content clamping is enabled.
#[derive(Debug, Clone)]
pub struct ScrollSynchronizer {
    geometry: ThumbnailGeometry,
    animate: bool,
    clamp_to_content: bool,
    last_synced: Option<(usize, f64)>,
}

impl ScrollSynchronizer {
    pub fn new(geometry: ThumbnailGeometry, animate: bool, clamp_to_content: bool) -> Self {
        Self {
            geometry,
            animate,
            clamp_to_content,
            last_synced: None,
        }
    }

    pub fn geometry(&self) -> ThumbnailGeometry {
        self.geometry
    }

    /// Unclamped centering target. May be negative near the start of the list.
    pub fn centering_target(&self, index: usize, extent: f64) -> f64 {
        let length = self.geometry.length(extent);
        self.geometry.thumb_start(index, extent) - extent / 2.0 + length / 2.0
    }

    /// Offset that would be sent to the surface for this pair.
    pub fn applied_offset(&self, index: usize, extent: f64, max_offset: Option<f64>) -> f64 {
        let offset = self.centering_target(index, extent).max(0.0);
        match max_offset {
            Some(max) if self.clamp_to_content => offset.min(max.max(0.0)),
            _ => offset,
        }
    }

    /// Scroll `surface` so thumbnail `index` sits at the strip's midpoint.
    pub fn sync(&mut self, index: usize, extent: f64, surface: &dyn ScrollSurface) -> SyncOutcome {
        if extent <= 0.0 {
            trace!(index, "Viewport unmeasured, deferring strip scroll");
            // The surface may have reset while hidden; rescroll on reappearance.
            self.last_synced = None;
            return SyncOutcome::Deferred;
        }
        if self.last_synced == Some((index, extent)) {
            return SyncOutcome::Unchanged;
        }

        let offset = self.applied_offset(index, extent, surface.max_offset());
        self.last_synced = Some((index, extent));

        trace!(index, extent, offset, "Centering active thumbnail");
        ScrollInstruction::To {
            offset,
            animated: self.animate,
        }
        .apply(surface);

        SyncOutcome::Applied(offset)
    }

    /// Forget the last applied pair so the next `sync` always scrolls.
    pub fn invalidate(&mut self) {
        self.last_synced = None;
    }

    pub fn last_synced(&self) -> Option<(usize, f64)> {
        self.last_synced
    }
}
