pub mod command;
pub mod selection;

pub use command::{Command, Indicator};
pub use selection::{IndexChange, SelectionState};
