//! The turn engine: the only way a game changes.
//!
//! ## Lifecycle
//!
//! `CoinFlip` → (`Flipping`) → `Playing` → `GameOver`, with `reset` returning
//! to the initial phase from anywhere. Without the coin flip the game starts
//! in `Playing`.
//!
//! ## Commands
//!
//! Every command is synchronous and either applies completely or is
//! rejected with a `Rejection` and leaves the state untouched. Presentation
//! timing is the caller's business: `begin_roll` decides a die immediately
//! and `finish_roll` marks it revealed, so an animation can run in between.
//!
//! The engine never schedules the opponent. A driver calls
//! `play_opponent_turn` (or rolls and places itself) once
//! `active_side() == Side::Opponent`.
//!
//! ```
//! use knucklebones::core::{GameConfig, ScriptedDice, Side};
//! use knucklebones::rules::TurnEngine;
//!
//! let config = GameConfig::new().without_coin_flip();
//! let mut engine = TurnEngine::with_dice(config, ScriptedDice::new().with_faces(&[5]));
//!
//! assert_eq!(engine.request_roll().unwrap().value(), 5);
//! engine.place_pending(0).unwrap();
//!
//! assert_eq!(engine.grid(Side::Player).column(0).unwrap().faces(), vec![5]);
//! assert_eq!(engine.active_side(), Side::Opponent);
//! ```

use serde::{Deserialize, Serialize};

use crate::ai::{select_column, SelectionView};
use crate::core::{
    DiceSource, Die, Difficulty, GameConfig, GameState, MoveRecord, Phase, SecureDice, SeededDice,
    Side,
};
use crate::grid::{Grid, COLUMNS};

use super::outcome::Outcome;
use super::rejection::Rejection;

/// What an accepted placement did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The recorded move.
    pub record: MoveRecord,
    /// Set if this placement ended the game.
    pub outcome: Option<Outcome>,
    /// The side to move next, `None` once the game is over.
    pub next: Option<Side>,
}

/// Owns a game and applies commands to it.
#[derive(Clone, Debug)]
pub struct TurnEngine<D = SecureDice> {
    config: GameConfig,
    state: GameState,
    dice: D,
}

impl TurnEngine<SecureDice> {
    /// Create an engine rolling OS-entropy dice.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_dice(config, SecureDice::new())
    }
}

impl TurnEngine<SeededDice> {
    /// Create an engine with deterministic dice.
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_dice(config, SeededDice::new(seed))
    }
}

impl<D: DiceSource> TurnEngine<D> {
    /// Create an engine with the given dice source.
    #[must_use]
    pub fn with_dice(config: GameConfig, dice: D) -> Self {
        let state = GameState::new(&config);
        Self { config, state, dice }
    }

    // === Queries ===

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the current state (cheap: history is persistent).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Opponent difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// The dice source.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Mutable access to the dice source (e.g. to queue scripted faces).
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// A side's grid.
    #[must_use]
    pub fn grid(&self, side: Side) -> &Grid {
        self.state.grid(side)
    }

    /// A side's total score.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.state.score(side)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.state.active_side()
    }

    /// The rolled die waiting to be placed.
    #[must_use]
    pub fn pending(&self) -> Option<Die> {
        self.state.pending()
    }

    /// Final outcome, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    // === Configuration ===

    /// Change the opponent difficulty.
    ///
    /// If a game is in progress it is reset. Returns true if a reset
    /// happened. Setting the current difficulty again does nothing.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if difficulty == self.config.difficulty {
            return false;
        }
        let reset = self.state.in_progress();
        self.config.difficulty = difficulty;
        log::debug!("difficulty set to {difficulty} (reset: {reset})");
        if reset {
            self.reset();
        }
        reset
    }

    /// Abandon the current game and start a fresh one.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        log::debug!("game reset, phase {}", self.state.phase);
    }

    // === Coin Flip ===

    /// Decide the coin flip and enter `Flipping`.
    ///
    /// Returns the side that will move first. The result is applied by
    /// `perform_coin_flip`.
    pub fn begin_coin_flip(&mut self) -> Result<Side, Rejection> {
        if self.state.phase != Phase::CoinFlip {
            return Err(Rejection::NoCoinFlip);
        }
        let first = if self.dice.flip_coin() {
            Side::Player
        } else {
            Side::Opponent
        };
        self.state.coin = Some(first);
        self.state.phase = Phase::Flipping;
        log::debug!("coin flip decided: {first} moves first");
        Ok(first)
    }

    /// Finish the coin flip and start play.
    ///
    /// From `CoinFlip` this flips and settles in one step; from `Flipping` it
    /// applies the already decided result.
    pub fn perform_coin_flip(&mut self) -> Result<Side, Rejection> {
        if self.state.phase == Phase::CoinFlip {
            self.begin_coin_flip()?;
        }
        match (self.state.phase, self.state.coin) {
            (Phase::Flipping, Some(first)) => {
                self.state.active = first;
                self.state.phase = Phase::Playing;
                log::debug!("play starts with {first}");
                Ok(first)
            }
            _ => Err(Rejection::NoCoinFlip),
        }
    }

    // === Rolling ===

    fn ensure_playing(&self) -> Result<(), Rejection> {
        match self.state.phase {
            Phase::Playing => Ok(()),
            Phase::GameOver => Err(Rejection::GameOver),
            phase => Err(Rejection::NotPlaying(phase)),
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), Rejection> {
        self.ensure_playing()?;
        if side != self.state.active {
            return Err(Rejection::NotYourTurn(side));
        }
        Ok(())
    }

    /// Decide a roll for `side` without revealing it.
    ///
    /// The die is stored as pending straight away but cannot be placed until
    /// `finish_roll`.
    pub fn begin_roll_as(&mut self, side: Side) -> Result<Die, Rejection> {
        self.ensure_turn(side)?;
        if self.state.rolling {
            return Err(Rejection::RollInFlight);
        }
        if self.state.pending.is_some() {
            return Err(Rejection::RollPending);
        }

        let value = self.dice.roll_die();
        self.state.pending = Some(value);
        self.state.rolling = true;
        log::debug!("{side} rolled {value}");
        Ok(value)
    }

    /// Decide a roll for the active side without revealing it.
    pub fn begin_roll(&mut self) -> Result<Die, Rejection> {
        self.begin_roll_as(self.state.active)
    }

    /// Reveal the decided roll so it can be placed.
    ///
    /// Revealing an already revealed roll just returns it.
    pub fn finish_roll(&mut self) -> Result<Die, Rejection> {
        self.ensure_playing()?;
        let value = self.state.pending.ok_or(Rejection::NoPendingRoll)?;
        self.state.rolling = false;
        Ok(value)
    }

    /// Roll for `side` and reveal immediately.
    pub fn roll_as(&mut self, side: Side) -> Result<Die, Rejection> {
        self.begin_roll_as(side)?;
        self.finish_roll()
    }

    /// Roll for the active side and reveal immediately.
    pub fn request_roll(&mut self) -> Result<Die, Rejection> {
        self.roll_as(self.state.active)
    }

    // === Placement ===

    /// Place `side`'s pending die in `column`.
    ///
    /// In order: place in the own grid, destroy matching dice in the other
    /// grid's same column, clear the pending die, check for game over, and
    /// otherwise pass the turn.
    pub fn place_as(&mut self, side: Side, column: usize) -> Result<Placement, Rejection> {
        self.ensure_turn(side)?;
        if self.state.rolling {
            return Err(Rejection::RollInFlight);
        }
        let value = self.state.pending.ok_or(Rejection::NoPendingRoll)?;
        if column >= COLUMNS {
            return Err(Rejection::ColumnOutOfRange(column));
        }

        let (own, enemy) = self.state.grids.split_mut(side);
        if !own.place(column, value) {
            return Err(Rejection::ColumnFull(column));
        }
        let destroyed = enemy.remove_matching(column, value);

        self.state.pending = None;
        self.state.turn += 1;
        let record = MoveRecord::new(self.state.turn, side, column, value, destroyed);
        self.state.history.push_back(record);
        log::debug!("{side} placed {value} in column {column}, destroyed {destroyed}");

        let outcome = self.check_game_over();
        let next = match outcome {
            Some(_) => None,
            None => {
                self.state.active = side.other();
                Some(self.state.active)
            }
        };

        Ok(Placement {
            record,
            outcome,
            next,
        })
    }

    /// Place the active side's pending die in `column`.
    pub fn place_pending(&mut self, column: usize) -> Result<Placement, Rejection> {
        self.place_as(self.state.active, column)
    }

    fn check_game_over(&mut self) -> Option<Outcome> {
        if !self.state.grids.iter().any(|(_, grid)| grid.is_full()) {
            return None;
        }
        let scores = self.state.scores();
        let outcome = Outcome::from_scores(&scores);
        self.state.outcome = Some(outcome);
        self.state.phase = Phase::GameOver;
        log::info!(
            "game over after {} moves: {outcome} ({} - {})",
            self.state.turn,
            scores[Side::Player],
            scores[Side::Opponent]
        );
        Some(outcome)
    }

    // === Computer Turns ===

    /// Where the active side's pending die would go at `difficulty`.
    pub fn choose_column_with(&mut self, difficulty: Difficulty) -> Result<usize, Rejection> {
        self.ensure_playing()?;
        let value = self.state.pending.ok_or(Rejection::NoPendingRoll)?;
        let side = self.state.active;
        let view = SelectionView::new(
            &self.state.grids[side],
            &self.state.grids[side.other()],
            value,
        );
        select_column(difficulty, &view, &mut self.dice).ok_or(Rejection::GameOver)
    }

    /// Play a whole turn for the active side using the `difficulty` policy:
    /// roll (or reveal a roll in flight), choose a column, place.
    pub fn play_turn_with(&mut self, difficulty: Difficulty) -> Result<Placement, Rejection> {
        self.ensure_playing()?;
        let side = self.state.active;
        if self.state.pending.is_none() {
            self.roll_as(side)?;
        } else {
            self.finish_roll()?;
        }
        let column = self.choose_column_with(difficulty)?;
        self.place_as(side, column)
    }

    /// Play the computer opponent's turn at the configured difficulty.
    pub fn play_opponent_turn(&mut self) -> Result<Placement, Rejection> {
        self.ensure_turn(Side::Opponent)?;
        self.play_turn_with(self.config.difficulty)
    }
}
