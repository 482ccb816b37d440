//! Reasons a command was refused.
//!
//! A rejected command leaves the game state exactly as it was.

use crate::core::{Phase, Side};

/// Why the engine refused a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The command needs `Playing` but the game is in another phase.
    NotPlaying(Phase),
    /// The game has ended.
    GameOver,
    /// The acting side is not the active side.
    NotYourTurn(Side),
    /// A die has already been rolled and not placed.
    RollPending,
    /// A roll has been decided but not revealed yet.
    RollInFlight,
    /// There is no rolled die to place or reveal.
    NoPendingRoll,
    /// Column index outside `0..3`.
    ColumnOutOfRange(usize),
    /// The column has no empty slot.
    ColumnFull(usize),
    /// The coin flip is disabled or already done.
    NoCoinFlip,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NotPlaying(phase) => write!(f, "not accepted during {phase}"),
            Rejection::GameOver => write!(f, "the game is over"),
            Rejection::NotYourTurn(side) => write!(f, "it is not {side}'s turn"),
            Rejection::RollPending => write!(f, "a die is already waiting to be placed"),
            Rejection::RollInFlight => write!(f, "the roll has not been revealed yet"),
            Rejection::NoPendingRoll => write!(f, "there is no rolled die"),
            Rejection::ColumnOutOfRange(col) => write!(f, "column {col} does not exist"),
            Rejection::ColumnFull(col) => write!(f, "column {col} is full"),
            Rejection::NoCoinFlip => write!(f, "there is no coin flip to perform"),
        }
    }
}

impl std::error::Error for Rejection {}
