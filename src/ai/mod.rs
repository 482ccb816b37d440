//! Computer opponent column selection.
//!
//! Given a rolled die and both grids, choose where the die goes. Each
//! difficulty level is a `ColumnPolicy`; Medium and Hard share the helpers in
//! `heuristics` so stack and destruction counts are computed one way.
//!
//! ```
//! use knucklebones::ai::{select_column, SelectionView};
//! use knucklebones::core::{Die, Difficulty, SeededDice};
//! use knucklebones::grid::Grid;
//!
//! let own = Grid::from_faces([&[], &[5], &[]]);
//! let enemy = Grid::new();
//! let view = SelectionView::new(&own, &enemy, Die::new(5).unwrap());
//!
//! let col = select_column(Difficulty::Medium, &view, &mut SeededDice::new(0));
//! assert_eq!(col, Some(1));
//! ```

pub mod heuristics;
pub mod policy;

pub use heuristics::{
    best_column, destroy_count, hard_breakdown, medium_score, medium_scores, stack_count,
    HardBreakdown, SelectionView,
};
pub use policy::{policy_for, select_column, ColumnPolicy, GreedyColumn, RandomColumn, TacticalColumn};
