//! Dice grids: three columns of three slots.

pub mod column;
#[allow(clippy::module_inception)]
pub mod grid;

pub use column::{Column, ROWS};
pub use grid::{ColumnList, Grid, COLUMNS};
