pub mod cell;
#[allow(clippy::module_inception)]
pub mod grid;
pub mod trim;

pub use cell::{device_payload, Cell};
pub use grid::Grid;
pub use trim::{trim, trim_borders_only, TrimMode};
