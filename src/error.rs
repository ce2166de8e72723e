use thiserror::Error;

/// Errors raised while building a [`Catalog`](crate::models::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one item")]
    Empty,
    #[error("duplicate catalog item id {0}")]
    DuplicateId(u64),
}

/// Errors raised by selection transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("index {index} is out of range for a catalog of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
