/// The secondary list's scroll surface, as seen by the engine.
///
/// Instructions are fire-and-forget: a newer `scroll_to` simply supersedes an
/// animation still in flight.
pub trait ScrollSurface {
    /// Scroll to an absolute offset.
    fn scroll_to(&self, offset: f64, animated: bool);

    /// Scroll relative to the current offset.
    fn scroll_by(&self, delta: f64, animated: bool);

    /// Largest reachable offset: content length minus the list's own visible
    /// length. `None` until the list has been laid out.
    fn max_offset(&self) -> Option<f64>;
}

/// One instruction issued to a [`ScrollSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollInstruction {
    To { offset: f64, animated: bool },
    By { delta: f64, animated: bool },
}

impl ScrollInstruction {
    /// Deliver this instruction to `surface`.
    pub fn apply(self, surface: &dyn ScrollSurface) {
        match self {
            ScrollInstruction::To { offset, animated } => surface.scroll_to(offset, animated),
            ScrollInstruction::By { delta, animated } => surface.scroll_by(delta, animated),
        }
    }
}
