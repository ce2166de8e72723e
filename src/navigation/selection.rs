use std::num::NonZeroUsize;

use tracing::warn;

use crate::error::NavigationError;

/// A transition that actually moved the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
}

/// Owner of the single authoritative selection index.
///
/// The index is always a valid catalog position. Every transition returns
/// `Some(IndexChange)` only when the value differs from the old one, which is
/// what drives scroll recomputation and listener notification.
#[derive(Debug, Clone)]
pub struct SelectionState {
    index: usize,
    len: NonZeroUsize,
}

impl SelectionState {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Jump to `index`. Out-of-range requests leave the state untouched.
    pub fn set_index(&mut self, index: usize) -> Result<Option<IndexChange>, NavigationError> {
        if index >= self.len.get() {
            warn!(index, len = self.len.get(), "Rejected out-of-range selection");
            return Err(NavigationError::IndexOutOfRange {
                index,
                len: self.len.get(),
            });
        }
        Ok(self.apply(index))
    }

    /// Advance by one, wrapping from the last item to the first.
    pub fn next(&mut self) -> Option<IndexChange> {
        let next = (self.index + 1) % self.len.get();
        self.apply(next)
    }

    /// Step back by one, wrapping from the first item to the last.
    pub fn previous(&mut self) -> Option<IndexChange> {
        let len = self.len.get();
        let previous = (self.index + len - 1) % len;
        self.apply(previous)
    }

    fn apply(&mut self, index: usize) -> Option<IndexChange> {
        if index == self.index {
            return None;
        }
        let previous = std::mem::replace(&mut self.index, index);
        Some(IndexChange {
            previous,
            current: index,
        })
    }
}
