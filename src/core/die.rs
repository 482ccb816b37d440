//! Die face values.
//!
//! A `Die` always holds a face in `1..=6`. Grid slots store `Option<Die>`,
//! so an out-of-range value can never reach a grid.

use serde::{Deserialize, Serialize};

/// A single die face, guaranteed to be in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// Number of faces on a die.
    pub const FACES: u8 = 6;

    /// Create a die from a face value. Returns `None` outside `1..=6`.
    #[must_use]
    pub const fn new(face: u8) -> Option<Self> {
        if face >= 1 && face <= Self::FACES {
            Some(Self(face))
        } else {
            None
        }
    }

    /// Map a zero-based index in `0..6` to a face (`index + 1`).
    ///
    /// Panics if `index >= 6`.
    #[must_use]
    pub(crate) const fn from_index(index: u8) -> Self {
        assert!(index < Self::FACES, "die index out of range");
        Self(index + 1)
    }

    /// The face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All six faces in ascending order.
    pub fn all() -> impl Iterator<Item = Die> {
        (1..=Self::FACES).map(Die)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Die {
    type Error = String;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Die::new(face).ok_or_else(|| format!("die face {face} outside 1..=6"))
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.0
    }
}
