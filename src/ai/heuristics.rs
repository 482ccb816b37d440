//! Column heuristics shared by the Medium and Hard policies.
//!
//! All scores are computed from the selecting side's point of view: `own`
//! is the grid the die will be placed in, `enemy` is the grid that loses
//! matching dice in the same column.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Die;
use crate::grid::{Column, Grid, COLUMNS};
use crate::scoring::total_score;

/// Inputs to a column choice.
#[derive(Clone, Copy, Debug)]
pub struct SelectionView<'a> {
    /// The selecting side's grid.
    pub own: &'a Grid,
    /// The other side's grid.
    pub enemy: &'a Grid,
    /// The die to place.
    pub value: Die,
}

impl<'a> SelectionView<'a> {
    /// Create a view.
    #[must_use]
    pub fn new(own: &'a Grid, enemy: &'a Grid, value: Die) -> Self {
        Self { own, enemy, value }
    }

    /// Own columns with space, ascending, paired with both columns.
    pub fn candidates(&self) -> impl Iterator<Item = (usize, &'a Column, &'a Column)> + '_ {
        let own = self.own;
        let enemy = self.enemy;
        own.available_columns()
            .into_iter()
            .map(move |col| (col, &own.columns()[col], &enemy.columns()[col]))
    }

    /// True if the selecting side is strictly ahead on total score.
    #[must_use]
    pub fn is_ahead(&self) -> bool {
        total_score(self.own) > total_score(self.enemy)
    }
}

/// Dice in `own` that already show the placed value.
#[must_use]
pub fn stack_count(own: &Column, value: Die) -> u32 {
    own.count(value) as u32
}

/// Enemy dice that placing `value` would destroy.
#[must_use]
pub fn destroy_count(enemy: &Column, value: Die) -> u32 {
    enemy.count(value) as u32
}

/// Medium heuristic: `10 × stack + 5 × value × destroyed`.
#[must_use]
pub fn medium_score(own: &Column, enemy: &Column, value: Die) -> u32 {
    let face = u32::from(value.value());
    10 * stack_count(own, value) + 5 * face * destroy_count(enemy, value)
}

/// The terms of the Hard heuristic for one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardBreakdown {
    /// `15 × own dice matching the value`
    pub stack: u32,
    /// `3 × destroyed × (value × destroyed)`
    pub destroy: u32,
    /// `20` when destroying into an enemy column holding at least two dice
    pub big_stack: u32,
    /// `10` when ahead and this placement fills the column's last slot
    pub closing: u32,
    /// `5` when the enemy has no matching dice in the column
    pub safety: u32,
}

impl HardBreakdown {
    /// Evaluate one column. `ahead` is whether the selecting side leads.
    #[must_use]
    pub fn evaluate(own: &Column, enemy: &Column, value: Die, ahead: bool) -> Self {
        let face = u32::from(value.value());
        let destroyed = destroy_count(enemy, value);
        let destroy_value = face * destroyed;

        Self {
            stack: 15 * stack_count(own, value),
            destroy: 3 * destroyed * destroy_value,
            big_stack: if destroyed > 0 && enemy.filled() >= 2 { 20 } else { 0 },
            closing: if ahead && own.filled() == 2 { 10 } else { 0 },
            safety: if destroyed == 0 { 5 } else { 0 },
        }
    }

    /// Sum of all terms.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.stack + self.destroy + self.big_stack + self.closing + self.safety
    }
}

/// Per-column Medium scores, ascending column order.
#[must_use]
pub fn medium_scores(view: &SelectionView<'_>) -> SmallVec<[(usize, u32); COLUMNS]> {
    view.candidates()
        .map(|(col, own, enemy)| (col, medium_score(own, enemy, view.value)))
        .collect()
}

/// Per-column Hard breakdowns, ascending column order.
#[must_use]
pub fn hard_breakdown(view: &SelectionView<'_>) -> SmallVec<[(usize, HardBreakdown); COLUMNS]> {
    let ahead = view.is_ahead();
    view.candidates()
        .map(|(col, own, enemy)| (col, HardBreakdown::evaluate(own, enemy, view.value, ahead)))
        .collect()
}

/// The first column with the strictly highest score.
///
/// Later columns only win on a strict improvement, so ties go to the lowest
/// index.
#[must_use]
pub fn best_column(scored: impl IntoIterator<Item = (usize, u32)>) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (col, score) in scored {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((col, score));
        }
    }
    best.map(|(col, _)| col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die(face: u8) -> Die {
        Die::new(face).unwrap()
    }

    #[test]
    fn test_medium_score() {
        let own = Column::from_faces(&[4]);
        let enemy = Column::from_faces(&[4, 4]);
        // 10×1 + 5×4×2
        assert_eq!(medium_score(&own, &enemy, die(4)), 50);
        assert_eq!(medium_score(&Column::new(), &Column::new(), die(4)), 0);
    }

    #[test]
    fn test_hard_breakdown_destroying_pair() {
        let own = Column::new();
        let enemy = Column::from_faces(&[3, 3]);
        let terms = HardBreakdown::evaluate(&own, &enemy, die(3), false);

        assert_eq!(terms.stack, 0);
        // 3 × 2 × (3 × 2)
        assert_eq!(terms.destroy, 36);
        assert_eq!(terms.big_stack, 20);
        assert_eq!(terms.closing, 0);
        assert_eq!(terms.safety, 0);
        assert_eq!(terms.total(), 56);
    }

    #[test]
    fn test_hard_breakdown_stack_and_destroy() {
        let own = Column::from_faces(&[3]);
        let enemy = Column::from_faces(&[3, 3]);
        let terms = HardBreakdown::evaluate(&own, &enemy, die(3), false);

        assert_eq!(terms.stack, 15);
        assert_eq!(terms.total(), 71);
    }

    #[test]
    fn test_hard_breakdown_closing_and_safety() {
        let own = Column::from_faces(&[5, 5]);
        let enemy = Column::from_faces(&[1]);
        let ahead = HardBreakdown::evaluate(&own, &enemy, die(5), true);
        let behind = HardBreakdown::evaluate(&own, &enemy, die(5), false);

        assert_eq!(ahead.stack, 30);
        assert_eq!(ahead.closing, 10);
        assert_eq!(ahead.safety, 5);
        assert_eq!(ahead.total(), 45);
        assert_eq!(behind.total(), 35);
    }

    #[test]
    fn test_big_stack_needs_two_enemy_dice() {
        let own = Column::new();
        let lone = Column::from_faces(&[2]);
        let terms = HardBreakdown::evaluate(&own, &lone, die(2), false);
        assert_eq!(terms.big_stack, 0);
        assert_eq!(terms.destroy, 6);
    }

    #[test]
    fn test_best_column_prefers_first_on_tie() {
        assert_eq!(best_column([(0, 5), (1, 9), (2, 9)]), Some(1));
        assert_eq!(best_column([(1, 0), (2, 0)]), Some(1));
        assert_eq!(best_column(std::iter::empty()), None);
    }

    #[test]
    fn test_candidates_skip_full_columns() {
        let own = Grid::from_faces([&[1, 1, 1], &[], &[2]]);
        let enemy = Grid::new();
        let view = SelectionView::new(&own, &enemy, die(1));

        let cols: Vec<usize> = view.candidates().map(|(c, _, _)| c).collect();
        assert_eq!(cols, vec![1, 2]);
    }
}
