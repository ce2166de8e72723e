use tracing::trace;

use super::surface::{ScrollInstruction, ScrollSurface};

/// Default distance moved by one strip scroll button press.
pub const DEFAULT_STEP_DELTA: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// Manual step-scrolling of the secondary list.
///
/// Steps are relative and never touch the selection. The strip may drift off
/// center until the next index-driven recomputation.
#[derive(Debug, Clone, Copy)]
pub struct StepScroller {
    delta: f64,
    animate: bool,
}

impl Default for StepScroller {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELTA, true)
    }
}

impl StepScroller {
    pub fn new(delta: f64, animate: bool) -> Self {
        Self {
            delta: delta.abs(),
            animate,
        }
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Issue one step and return the signed delta sent to the surface.
    pub fn step(&self, direction: StepDirection, surface: &dyn ScrollSurface) -> f64 {
        let delta = match direction {
            StepDirection::Up => -self.delta,
            StepDirection::Down => self.delta,
        };
        trace!(?direction, delta, "Step-scrolling thumbnail strip");
        ScrollInstruction::By {
            delta,
            animated: self.animate,
        }
        .apply(surface);
        delta
    }

    pub fn step_up(&self, surface: &dyn ScrollSurface) -> f64 {
        self.step(StepDirection::Up, surface)
    }

    pub fn step_down(&self, surface: &dyn ScrollSurface) -> f64 {
        self.step(StepDirection::Down, surface)
    }
}
