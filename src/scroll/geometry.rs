/// Default thumbnail length along the scroll axis.
pub const DEFAULT_THUMB_LENGTH: f64 = 80.0;
/// Default gap between neighbouring thumbnails.
pub const DEFAULT_THUMB_GAP: f64 = 8.0;
/// Default divisor for proportional sizing (four thumbnails per viewport).
pub const DEFAULT_THUMB_DIVISOR: f64 = 4.0;

/// Thumbnail sizing policy for the secondary list.
///
/// Exactly one policy is active per carousel. `Fixed` is the default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThumbnailGeometry {
    /// Constant thumbnail length and gap.
    Fixed { length: f64, gap: f64 },
    /// Thumbnail length is `extent / divisor`; the gap stays constant.
    Proportional { divisor: f64, gap: f64 },
}

impl Default for ThumbnailGeometry {
    fn default() -> Self {
        ThumbnailGeometry::Fixed {
            length: DEFAULT_THUMB_LENGTH,
            gap: DEFAULT_THUMB_GAP,
        }
    }
}

impl ThumbnailGeometry {
    /// Thumbnail length for the given viewport extent.
    pub fn length(&self, extent: f64) -> f64 {
        match *self {
            ThumbnailGeometry::Fixed { length, .. } => length.max(0.0),
            ThumbnailGeometry::Proportional { divisor, .. } => {
                if divisor > 0.0 {
                    (extent / divisor).max(0.0)
                } else {
                    0.0
                }
            }
        }
    }

    pub fn gap(&self) -> f64 {
        match *self {
            ThumbnailGeometry::Fixed { gap, .. } | ThumbnailGeometry::Proportional { gap, .. } => {
                gap.max(0.0)
            }
        }
    }

    /// Length plus gap: the distance between the starts of two neighbours.
    pub fn stride(&self, extent: f64) -> f64 {
        self.length(extent) + self.gap()
    }

    /// Leading edge of thumbnail `index`.
    pub fn thumb_start(&self, index: usize, extent: f64) -> f64 {
        index as f64 * self.stride(extent)
    }

    /// Natural content length of a strip holding `count` thumbnails.
    pub fn strip_length(&self, count: usize, extent: f64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        count as f64 * self.stride(extent) - self.gap()
    }
}
