//! Game state.
//!
//! ## GameState
//!
//! Everything a presentation layer needs to draw the table:
//! - Both grids and their (derived) scores
//! - Phase, active side, pending die, roll-in-flight flag
//! - Coin flip result, outcome, move history
//!
//! The state is owned by `TurnEngine` and only changes through its commands.
//! Callers get `&GameState` or an O(1) snapshot clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::GameConfig;
use super::die::Die;
use super::side::{Side, SideMap};
use crate::grid::Grid;
use crate::rules::Outcome;
use crate::scoring::{total_score, ScoreLine};

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the opening coin flip.
    CoinFlip,
    /// Coin flip decided but not yet revealed.
    Flipping,
    /// Dice are being rolled and placed.
    Playing,
    /// A grid filled up; the outcome is final.
    GameOver,
}

impl Phase {
    /// True for `GameOver`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::CoinFlip => "coin flip",
            Phase::Flipping => "flipping",
            Phase::Playing => "playing",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) grids: SideMap<Grid>,
    pub(crate) phase: Phase,
    pub(crate) active: Side,
    pub(crate) pending: Option<Die>,
    pub(crate) rolling: bool,
    pub(crate) coin: Option<Side>,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) turn: u32,
    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh state for `config`.
    ///
    /// ## Defaults
    ///
    /// - Both grids empty, no pending die, no outcome
    /// - `phase`: `CoinFlip` if the coin flip is enabled, otherwise `Playing`
    /// - `active`: `config.first_side` (replaced by the coin flip when enabled)
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grids: SideMap::with_default(),
            phase: if config.coin_flip {
                Phase::CoinFlip
            } else {
                Phase::Playing
            },
            active: config.first_side,
            pending: None,
            rolling: false,
            coin: None,
            outcome: None,
            turn: 0,
            history: Vector::new(),
        }
    }

    // === Grids & Scores ===

    /// A side's grid.
    #[must_use]
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side]
    }

    /// Both grids.
    #[must_use]
    pub fn grids(&self) -> &SideMap<Grid> {
        &self.grids
    }

    /// A side's total score.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        total_score(&self.grids[side])
    }

    /// Both totals.
    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        SideMap::new(|side| self.score(side))
    }

    /// A side's per-column scores.
    #[must_use]
    pub fn column_scores(&self, side: Side) -> ScoreLine {
        ScoreLine::of(&self.grids[side])
    }

    /// The side with the strictly higher score, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        let player = self.score(Side::Player);
        let opponent = self.score(Side::Opponent);
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Opponent),
            std::cmp::Ordering::Equal => None,
        }
    }

    // === Turn State ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// The rolled die waiting to be placed.
    #[must_use]
    pub fn pending(&self) -> Option<Die> {
        self.pending
    }

    /// True while a decided roll has not been revealed yet.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// The side the coin flip chose to move first.
    #[must_use]
    pub fn coin_result(&self) -> Option<Side> {
        self.coin
    }

    /// Final outcome, set once at game over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// True if abandoning now would lose progress: a flip is being revealed,
    /// or play has started (a die placed or rolled).
    #[must_use]
    pub fn in_progress(&self) -> bool {
        match self.phase {
            Phase::Flipping => true,
            Phase::Playing => {
                self.pending.is_some() || self.grids.iter().any(|(_, grid)| !grid.is_empty())
            }
            Phase::CoinFlip | Phase::GameOver => false,
        }
    }

    // === History ===

    /// Placements made so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every accepted placement, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The most recent placement.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}
