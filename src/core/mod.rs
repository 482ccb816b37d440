//! Core types: dice, sides, configuration, state, history, RNG.
//!
//! Everything here is rule-agnostic data. The rules that move a game forward
//! live in `rules`; the computer opponent lives in `ai`.

pub mod die;
pub mod side;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use die::Die;
pub use side::{Side, SideMap};
pub use rng::{uniform_below, DiceSource, ScriptedDice, SecureDice, SeededDice, SeededDiceState};
pub use config::{Difficulty, GameConfig, UnknownDifficulty};
pub use action::MoveRecord;
pub use state::{GameState, Phase};
