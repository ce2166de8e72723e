// Navigation commands for the dual carousel.
//
// Every control of the widget maps to one of these:
// - Thumbnail click k: SelectThumbnail(k)
// - Dot indicator click k: SelectIndicator(k)
// - Previous / next arrows (and Left / Right keys): Previous / Next
// - Strip scroll buttons (and Up / Down keys): StepUp / StepDown

/// A user request against the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectThumbnail(usize),
    SelectIndicator(usize),
    Previous,
    Next,
    StepUp,
    StepDown,
}

/// Active-state marker for one thumbnail or dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub id: u64,
    pub active: bool,
}
