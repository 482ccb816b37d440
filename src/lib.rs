//! # knucklebones
//!
//! Rules engine and computer opponent for Knucklebones, a two-player dice
//! placement game.
//!
//! ## Rules in brief
//!
//! Each side owns a 3×3 grid. On your turn you roll one die and drop it into
//! one of your columns that has space. Every enemy die in the same column
//! showing the same face is destroyed. Matching dice in a column multiply:
//! each die scores its face times the number of dice sharing that face. The
//! game ends the moment either grid is full; the higher total wins.
//!
//! ## Design Principles
//!
//! 1. **Decide now, reveal later**: every command is synchronous. Animation
//!    and "thinking" delays belong to the caller, who chooses when to show
//!    a value the engine has already decided.
//!
//! 2. **Rejections, not panics**: invalid commands return a `Rejection` and
//!    leave the state untouched.
//!
//! 3. **Unbiased dice**: bytes are mapped to faces by rejection sampling, with
//!    a uniform fallback when OS entropy is unavailable.
//!
//! ## Modules
//!
//! - `core`: dice, sides, configuration, state, history, RNG
//! - `grid`: columns and grids with gravity fill and matched removal
//! - `scoring`: column and grid scores
//! - `rules`: `TurnEngine`, outcomes and rejections
//! - `ai`: column-selection policies for Easy, Medium and Hard
//! - `play`: AI-vs-AI match runner

pub mod core;
pub mod grid;
pub mod scoring;
pub mod rules;
pub mod ai;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Die, Side, SideMap,
    DiceSource, SecureDice, SeededDice, SeededDiceState, ScriptedDice,
    Difficulty, GameConfig,
    MoveRecord,
    GameState, Phase,
};

pub use crate::grid::{Column, Grid, COLUMNS, ROWS};

pub use crate::scoring::{column_score, total_score, ScoreLine};

pub use crate::rules::{Outcome, Placement, Rejection, TurnEngine};

pub use crate::ai::{
    select_column, policy_for, ColumnPolicy, SelectionView, HardBreakdown,
    RandomColumn, GreedyColumn, TacticalColumn,
};

pub use crate::play::{GameSummary, MatchConfig, MatchRunner, MatchStats};
