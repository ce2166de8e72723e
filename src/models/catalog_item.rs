use std::path::Path;

/// Extensions the primary display can render.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff", "tif"];

/// True when `path` has an image extension (case-insensitive).
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// A single browsable entry.
///
/// `image_ref` is opaque to the engine: a URL, a file path, a resource name.
/// Only the host's renderer interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u64,
    pub image_ref: String,
    pub title: String,
}

impl CatalogItem {
    pub fn new(id: u64, image_ref: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            image_ref: image_ref.into(),
            title: title.into(),
        }
    }

    /// Build an item for an image file, titled after its file stem.
    pub fn from_path(id: u64, path: &Path) -> Self {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(id, path.to_string_lossy(), title)
    }

    /// Returns the image reference as a local path when it looks like one.
    pub fn local_path(&self) -> Option<&Path> {
        if self.image_ref.contains("://") {
            None
        } else {
            Some(Path::new(&self.image_ref))
        }
    }
}
