//! Column-selection policies, one per difficulty.
//!
//! - `RandomColumn` (Easy): uniform over open columns
//! - `GreedyColumn` (Medium): stacking plus destruction
//! - `TacticalColumn` (Hard): weighted stacking, destruction, finishing and
//!   safety terms
//!
//! Policies are pure apart from the dice source Easy draws from. They read
//! both grids and return a column index; placing the die is the engine's job.

use crate::core::{DiceSource, Difficulty};

use super::heuristics::{best_column, hard_breakdown, medium_scores, SelectionView};

/// Chooses a column for a die.
pub trait ColumnPolicy: Send + Sync {
    /// Choose one of `view.own`'s open columns.
    ///
    /// Returns `None` only if the own grid is full.
    fn choose(&self, view: &SelectionView<'_>, dice: &mut dyn DiceSource) -> Option<usize>;
}

/// Easy: uniform random open column.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomColumn;

impl ColumnPolicy for RandomColumn {
    fn choose(&self, view: &SelectionView<'_>, dice: &mut dyn DiceSource) -> Option<usize> {
        let open = view.own.available_columns();
        if open.is_empty() {
            return None;
        }
        Some(open[dice.choose_index(open.len())])
    }
}

/// Medium: highest `10 × stack + 5 × value × destroyed`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyColumn;

impl ColumnPolicy for GreedyColumn {
    fn choose(&self, view: &SelectionView<'_>, _dice: &mut dyn DiceSource) -> Option<usize> {
        let scores = medium_scores(view);
        log::trace!("medium scores for {}: {:?}", view.value, scores);
        best_column(scores)
    }
}

/// Hard: highest total of the `HardBreakdown` terms.
#[derive(Clone, Copy, Debug, Default)]
pub struct TacticalColumn;

impl ColumnPolicy for TacticalColumn {
    fn choose(&self, view: &SelectionView<'_>, _dice: &mut dyn DiceSource) -> Option<usize> {
        let terms = hard_breakdown(view);
        log::trace!("hard terms for {}: {:?}", view.value, terms);
        best_column(terms.into_iter().map(|(col, t)| (col, t.total())))
    }
}

/// The policy for a difficulty level.
#[must_use]
pub fn policy_for(difficulty: Difficulty) -> &'static dyn ColumnPolicy {
    match difficulty {
        Difficulty::Easy => &RandomColumn,
        Difficulty::Medium => &GreedyColumn,
        Difficulty::Hard => &TacticalColumn,
    }
}

/// Choose a column for `view.value` at the given difficulty.
pub fn select_column(
    difficulty: Difficulty,
    view: &SelectionView<'_>,
    dice: &mut dyn DiceSource,
) -> Option<usize> {
    policy_for(difficulty).choose(view, dice)
}
