//! Move history records.
//!
//! Every accepted placement is recorded with the side that made it, where the
//! die went, and how many enemy dice it destroyed. History is kept for replay,
//! debugging and match statistics; it never feeds back into the rules.

use serde::{Deserialize, Serialize};

use super::die::Die;
use super::side::Side;

/// A recorded placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Placement number within the game (starts at 1).
    pub turn: u32,

    /// The side that placed the die.
    pub side: Side,

    /// Column index (0-2).
    pub column: usize,

    /// The placed face.
    pub value: Die,

    /// Enemy dice removed from the same column.
    pub destroyed: u8,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(turn: u32, side: Side, column: usize, value: Die, destroyed: u8) -> Self {
        Self {
            turn,
            side,
            column,
            value,
            destroyed,
        }
    }

    /// Did this move destroy anything?
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.destroyed > 0
    }
}
