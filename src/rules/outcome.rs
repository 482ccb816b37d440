//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One side finished with the higher score.
    Winner(Side),
    /// Equal scores.
    Tie,
}

impl Outcome {
    /// Decide the outcome from final scores.
    #[must_use]
    pub fn from_scores(scores: &SideMap<u32>) -> Self {
        let player = scores[Side::Player];
        let opponent = scores[Side::Opponent];
        if player > opponent {
            Outcome::Winner(Side::Player)
        } else if opponent > player {
            Outcome::Winner(Side::Opponent)
        } else {
            Outcome::Tie
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, Outcome::Winner(s) if *s == side)
    }

    /// The winning side, if not a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side} wins"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
