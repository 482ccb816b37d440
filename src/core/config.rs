//! Game configuration types.
//!
//! - `Difficulty`: which column-selection policy the computer opponent uses
//! - `GameConfig`: difficulty plus turn-order settings
//!
//! Configuration is fixed for the lifetime of a game. Changing difficulty
//! through the engine while a game is running resets that game.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Computer opponent difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform random column.
    Easy,
    /// Greedy stacking and destruction.
    #[default]
    Medium,
    /// Weighted heuristic with finishing and safety bonuses.
    Hard,
}

impl Difficulty {
    /// Every level, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a difficulty name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl std::fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown difficulty '{}'", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl std::str::FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent difficulty.
    pub difficulty: Difficulty,

    /// Start each game with a coin flip deciding who moves first.
    /// When false the game starts directly in `Playing`.
    pub coin_flip: bool,

    /// Who moves first when there is no coin flip.
    pub first_side: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            coin_flip: true,
            first_side: Side::Player,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opponent difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Enable or disable the opening coin flip.
    #[must_use]
    pub fn with_coin_flip(mut self, enabled: bool) -> Self {
        self.coin_flip = enabled;
        self
    }

    /// Skip the coin flip and start in `Playing`.
    #[must_use]
    pub fn without_coin_flip(self) -> Self {
        self.with_coin_flip(false)
    }

    /// Set who moves first when there is no coin flip.
    #[must_use]
    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = side;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert!(config.coin_flip);
        assert_eq!(config.first_side, Side::Player);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_difficulty(Difficulty::Hard)
            .without_coin_flip()
            .with_first_side(Side::Opponent);

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert!(!config.coin_flip);
        assert_eq!(config.first_side, Side::Opponent);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(UnknownDifficulty("nightmare".to_string()))
        );
    }

    #[test]
    fn test_difficulty_display_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_difficulty(Difficulty::Easy);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
