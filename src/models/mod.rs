pub mod catalog;
pub mod catalog_item;

pub use catalog::*;
pub use catalog_item::*;
