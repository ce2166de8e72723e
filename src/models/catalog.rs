//! Immutable, ordered catalog of browsable items.
//!
//! The catalog fixes both the navigation order of the primary display and the
//! order of the thumbnail strip. It is validated once at construction so the
//! rest of the engine can rely on `len() >= 1`.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::CatalogError;
use crate::models::{is_image_path, CatalogItem};

const SAMPLE_ITEMS: &[(&str, &str)] = &[
    ("https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800", "Mountain Vista"),
    ("https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=800", "Ocean Waves"),
    ("https://images.unsplash.com/photo-1506197603052-3cc9c3a201bd?w=800", "Tropical Beach"),
    ("https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=800", "Forest Path"),
    ("https://images.unsplash.com/photo-1511593358241-7eea1f3c84e5?w=800", "Desert Landscape"),
    ("https://images.unsplash.com/photo-1501594907352-04cda38ebc29?w=800", "Sunset View"),
    ("https://images.unsplash.com/photo-1519904981063-b0cf448d479e?w=800", "City Skyline"),
    ("https://images.unsplash.com/photo-1464822759844-d150baec3e5d?w=800", "Snow Mountains"),
    ("https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800", "Green Forest"),
    ("https://images.unsplash.com/photo-1472214103451-9374bd1c798e?w=800", "Lake Reflection"),
    ("https://images.unsplash.com/photo-1418065460487-3d7dd550c390?w=800", "River Valley"),
    ("https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=800", "Golden Hour"),
    ("https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=800", "Misty Hills"),
    ("https://images.unsplash.com/photo-1475924156734-496f6cac6ec1?w=800", "Autumn Colors"),
    ("https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800", "Alpine Peak"),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Creates a catalog, rejecting empty input and duplicate ids.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    /// The fifteen landscape photos the demo carousel ships with.
    pub fn sample() -> Self {
        let items = SAMPLE_ITEMS
            .iter()
            .enumerate()
            .map(|(i, (url, title))| CatalogItem::new(i as u64 + 1, *url, *title))
            .collect();
        Self { items }
    }

    /// Builds a catalog from the image files under `dir`, sorted by path.
    ///
    /// Ids are assigned 1..=N in path order. Fails if the directory holds no
    /// images.
    pub fn from_directory(dir: &Path, recursive: bool) -> Result<Self> {
        let mut walker = WalkDir::new(dir).follow_links(false);
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut paths = Vec::new();
        for entry in walker.into_iter() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = ?err, "Skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            if is_image_path(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        debug!(?dir, count = paths.len(), recursive, "Scanned catalog directory");

        let items = paths
            .iter()
            .enumerate()
            .map(|(i, path)| CatalogItem::from_path(i as u64 + 1, path))
            .collect();

        Self::new(items).with_context(|| format!("No images found in {:?}", dir))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Same as [`len`](Self::len), typed to carry the non-empty invariant.
    pub fn count(&self) -> NonZeroUsize {
        // `new`, `sample` and `from_directory` never build an empty catalog.
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
