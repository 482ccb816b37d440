//! A 3×3 dice grid.
//!
//! Each operation touches exactly one grid. Cross-grid effects (placing on
//! one side destroys matches on the other) are applied by the turn engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::column::{Column, ROWS};
use crate::core::Die;

/// Columns per grid.
pub const COLUMNS: usize = 3;

/// Column indices with space, ascending.
pub type ColumnList = SmallVec<[usize; COLUMNS]>;

/// One side's placement area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    columns: [Column; COLUMNS],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: [Column::new(); COLUMNS],
        }
    }

    /// Build a grid from three columns of face values (see `Column::from_faces`).
    #[must_use]
    pub fn from_faces(columns: [&[u8]; COLUMNS]) -> Self {
        Self {
            columns: columns.map(Column::from_faces),
        }
    }

    /// All columns, index 0 first.
    #[must_use]
    pub fn columns(&self) -> &[Column; COLUMNS] {
        &self.columns
    }

    /// A single column, or `None` if `col` is out of range.
    #[must_use]
    pub fn column(&self, col: usize) -> Option<&Column> {
        self.columns.get(col)
    }

    /// True if `col` exists and has an empty slot.
    #[must_use]
    pub fn is_column_available(&self, col: usize) -> bool {
        self.column(col).is_some_and(Column::has_space)
    }

    /// Every column with an empty slot, ascending.
    #[must_use]
    pub fn available_columns(&self) -> ColumnList {
        (0..COLUMNS).filter(|&c| self.is_column_available(c)).collect()
    }

    /// Place a die in the first empty slot of `col`.
    ///
    /// Returns false (and changes nothing) if the column is full or does not
    /// exist.
    pub fn place(&mut self, col: usize, value: Die) -> bool {
        self.columns.get_mut(col).is_some_and(|c| c.place(value))
    }

    /// Remove every die equal to `value` from `col`, compacting the rest.
    ///
    /// Returns how many dice were removed (0 for an out-of-range column).
    pub fn remove_matching(&mut self, col: usize, value: Die) -> u8 {
        self.columns
            .get_mut(col)
            .map_or(0, |c| c.remove_matching(value))
    }

    /// True if every slot of every column is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(Column::is_full)
    }

    /// True if no die has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Column::is_empty)
    }

    /// Total dice on the grid.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.columns.iter().map(Column::filled).sum()
    }

    /// Slots left before the grid is full.
    #[must_use]
    pub fn remaining(&self) -> usize {
        COLUMNS * ROWS - self.filled()
    }
}

impl std::fmt::Display for Grid {
    /// Rows top to bottom as the dice stack: slot 0 first, `.` for empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            if row > 0 {
                writeln!(f)?;
            }
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match column.get(row) {
                    Some(die) => write!(f, "{die}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
