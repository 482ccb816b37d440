//! Column and grid scoring.
//!
//! Every die scores its face times the number of dice in the column sharing
//! that face. Matching dice therefore multiply:
//!
//! - `[3, 3, _]` scores `3×2 + 3×2 = 12`
//! - `[4, 4, 4]` scores `4×3 × 3 = 36`
//! - `[1, 2, 3]` scores `6`
//!
//! Scores are always recomputed from the grid; nothing is cached.

use serde::{Deserialize, Serialize};

use crate::core::Die;
use crate::grid::{Column, Grid, COLUMNS};

/// Score of a single column.
#[must_use]
pub fn column_score(column: &Column) -> u32 {
    let mut counts = [0u32; Die::FACES as usize];
    for die in column.dice() {
        counts[usize::from(die.value() - 1)] += 1;
    }

    counts
        .iter()
        .zip(1u32..)
        .map(|(&count, face)| face * count * count)
        .sum()
}

/// Score of a whole grid: the sum of its three column scores.
#[must_use]
pub fn total_score(grid: &Grid) -> u32 {
    grid.columns().iter().map(column_score).sum()
}

/// Per-column scores of one grid plus their total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    /// Score of each column, index 0 first.
    pub columns: [u32; COLUMNS],
}

impl ScoreLine {
    /// Score every column of `grid`.
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        let columns = *grid.columns();
        Self {
            columns: columns.map(|c| column_score(&c)),
        }
    }

    /// Sum of the column scores.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.columns.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_column_scores_zero() {
        assert_eq!(column_score(&Column::new()), 0);
    }

    #[test]
    fn test_pair_multiplies() {
        assert_eq!(column_score(&Column::from_faces(&[3, 3])), 12);
        assert_eq!(column_score(&Column::from_faces(&[5, 5])), 20);
    }

    #[test]
    fn test_distinct_values_add() {
        assert_eq!(column_score(&Column::from_faces(&[1, 2, 3])), 6);
    }

    #[test]
    fn test_triple() {
        assert_eq!(column_score(&Column::from_faces(&[4, 4, 4])), 36);
        assert_eq!(column_score(&Column::from_faces(&[6, 6, 6])), 54);
    }

    #[test]
    fn test_pair_plus_single() {
        // 2×2 + 2×2 + 5
        assert_eq!(column_score(&Column::from_faces(&[2, 5, 2])), 13);
    }

    #[test]
    fn test_total_score() {
        let grid = Grid::from_faces([&[3, 3], &[1, 2, 3], &[]]);
        assert_eq!(total_score(&grid), 18);
    }

    #[test]
    fn test_score_line() {
        let grid = Grid::from_faces([&[6], &[], &[4, 4, 4]]);
        let line = ScoreLine::of(&grid);

        assert_eq!(line.columns, [6, 0, 36]);
        assert_eq!(line.total(), total_score(&grid));
    }
}
