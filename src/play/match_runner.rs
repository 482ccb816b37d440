//! AI-vs-AI matches for comparing difficulty levels.
//!
//! Both sides are driven by column policies: the player side by
//! `MatchConfig::player`, the opponent by `MatchConfig::opponent`. Each game
//! gets its own seed (`seed + game index`), so a run is reproducible.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameConfig, Side, SideMap};
use crate::rules::{Outcome, Rejection, TurnEngine};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Policy driving the player side.
    pub player: Difficulty,

    /// Policy driving the opponent side.
    pub opponent: Difficulty,

    /// Number of games.
    pub games: u32,

    /// Base seed; game `i` uses `seed + i`.
    pub seed: u64,

    /// Open each game with a coin flip (otherwise the player starts).
    pub coin_flip: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player: Difficulty::Medium,
            opponent: Difficulty::Medium,
            games: 100,
            seed: 0,
            coin_flip: true,
        }
    }
}

impl MatchConfig {
    /// Create a match between two difficulties.
    pub fn new(player: Difficulty, opponent: Difficulty) -> Self {
        Self {
            player,
            opponent,
            ..Self::default()
        }
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the opening coin flip.
    pub fn with_coin_flip(mut self, enabled: bool) -> Self {
        self.coin_flip = enabled;
        self
    }

    fn policy(&self, side: Side) -> Difficulty {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Summary of one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Final outcome.
    pub outcome: Outcome,
    /// Final scores.
    pub scores: SideMap<u32>,
    /// Placements made.
    pub moves: u32,
    /// Dice each side destroyed.
    pub destroyed: SideMap<u32>,
}

/// Aggregate results of a match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Games played.
    pub games: u32,
    /// Wins per side.
    pub wins: SideMap<u32>,
    /// Tied games.
    pub ties: u32,
    /// Sum of final scores per side.
    pub total_scores: SideMap<u64>,
    /// Dice destroyed per side.
    pub destroyed: SideMap<u64>,
    /// Placements across all games.
    pub total_moves: u64,
}

impl MatchStats {
    /// Fold one game into the totals.
    pub fn record(&mut self, game: &GameSummary) {
        self.games += 1;
        match game.outcome {
            Outcome::Winner(side) => self.wins[side] += 1,
            Outcome::Tie => self.ties += 1,
        }
        for side in Side::BOTH {
            self.total_scores[side] += u64::from(game.scores[side]);
            self.destroyed[side] += u64::from(game.destroyed[side]);
        }
        self.total_moves += u64::from(game.moves);
    }

    /// Fraction of games `side` won.
    #[must_use]
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins[side]) / f64::from(self.games)
    }

    /// Mean final score of `side`.
    #[must_use]
    pub fn mean_score(&self, side: Side) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_scores[side] as f64 / f64::from(self.games)
    }

    /// Mean score difference from `side`'s point of view.
    #[must_use]
    pub fn mean_margin(&self, side: Side) -> f64 {
        self.mean_score(side) - self.mean_score(side.other())
    }

    /// Mean placements per game.
    #[must_use]
    pub fn mean_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / f64::from(self.games)
    }
}

/// Runs seeded AI-vs-AI games.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    /// Create a runner.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every game and aggregate the results.
    pub fn run(&self) -> Result<MatchStats, Rejection> {
        let mut stats = MatchStats::default();
        for index in 0..self.config.games {
            let seed = self.config.seed.wrapping_add(u64::from(index));
            let summary = self.play_game(seed)?;
            stats.record(&summary);
        }
        log::info!(
            "{} vs {}: {} games, wins {}/{}, ties {}",
            self.config.player,
            self.config.opponent,
            stats.games,
            stats.wins[Side::Player],
            stats.wins[Side::Opponent],
            stats.ties
        );
        Ok(stats)
    }

    /// Play one game to completion.
    ///
    /// Filling a grid takes at least nine placements by its owner, so every
    /// game lasts at least 17 moves.
    pub fn play_game(&self, seed: u64) -> Result<GameSummary, Rejection> {
        let game_config = GameConfig::new()
            .with_difficulty(self.config.opponent)
            .with_coin_flip(self.config.coin_flip);
        let mut engine = TurnEngine::seeded(game_config, seed);

        if self.config.coin_flip {
            engine.perform_coin_flip()?;
        }

        let mut destroyed: SideMap<u32> = SideMap::with_default();
        let outcome = loop {
            let side = engine.active_side();
            let placement = engine.play_turn_with(self.config.policy(side))?;
            destroyed[side] += u32::from(placement.record.destroyed);
            if let Some(outcome) = placement.outcome {
                break outcome;
            }
        };

        Ok(GameSummary {
            outcome,
            scores: engine.state().scores(),
            moves: engine.state().turn(),
            destroyed,
        })
    }
}
