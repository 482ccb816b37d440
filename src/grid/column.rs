//! A single column of three slots.
//!
//! Slots fill from index 0 upward. Removing dice compacts the survivors
//! toward index 0, so a column is always a filled prefix followed by empty
//! slots. Slot order only matters for rendering; scoring ignores it.

use serde::{Deserialize, Serialize};

use crate::core::Die;

/// Slots per column.
pub const ROWS: usize = 3;

/// One column of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Option<Die>; ROWS]", into = "[Option<Die>; ROWS]")]
pub struct Column {
    slots: [Option<Die>; ROWS],
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: [None; ROWS] }
    }

    /// Build a column from face values, bottom-up. `0` (or any invalid face)
    /// leaves an empty slot; the result is compacted.
    ///
    /// ```
    /// use knucklebones::grid::Column;
    ///
    /// let column = Column::from_faces(&[3, 0, 3]);
    /// assert_eq!(column.faces(), vec![3, 3]);
    /// ```
    #[must_use]
    pub fn from_faces(faces: &[u8]) -> Self {
        let mut column = Self::new();
        for die in faces.iter().copied().filter_map(Die::new) {
            column.place(die);
        }
        column
    }

    /// Raw slots, index 0 first.
    #[must_use]
    pub fn slots(&self) -> &[Option<Die>; ROWS] {
        &self.slots
    }

    /// The die in a slot, if any.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<Die> {
        self.slots.get(row).copied().flatten()
    }

    /// Iterate over the placed dice.
    pub fn dice(&self) -> impl Iterator<Item = Die> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Placed face values, index 0 first.
    #[must_use]
    pub fn faces(&self) -> Vec<u8> {
        self.dice().map(Die::value).collect()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True if there is at least one empty slot.
    #[must_use]
    pub fn has_space(&self) -> bool {
        self.slots.iter().any(Option::is_none)
    }

    /// True if every slot holds a die.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.has_space()
    }

    /// True if no slot holds a die.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// How many dice in this column show `value`.
    #[must_use]
    pub fn count(&self, value: Die) -> usize {
        self.dice().filter(|&d| d == value).count()
    }

    /// Put a die in the first empty slot.
    ///
    /// Returns false (and changes nothing) if the column is full.
    pub fn place(&mut self, value: Die) -> bool {
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    /// Remove every die showing `value` and compact the rest toward index 0.
    ///
    /// Returns how many dice were removed.
    pub fn remove_matching(&mut self, value: Die) -> u8 {
        let mut kept = [None; ROWS];
        let mut next = 0;
        let mut removed = 0;

        for die in self.dice() {
            if die == value {
                removed += 1;
            } else {
                kept[next] = Some(die);
                next += 1;
            }
        }

        self.slots = kept;
        removed
    }
}

impl TryFrom<[Option<Die>; ROWS]> for Column {
    type Error = String;

    /// Accept only a filled prefix followed by empty slots.
    fn try_from(slots: [Option<Die>; ROWS]) -> Result<Self, Self::Error> {
        let filled = slots.iter().take_while(|s| s.is_some()).count();
        if slots[filled..].iter().any(Option::is_some) {
            return Err(format!("column slots {slots:?} have a gap below a die"));
        }
        Ok(Self { slots })
    }
}

impl From<Column> for [Option<Die>; ROWS] {
    fn from(column: Column) -> Self {
        column.slots
    }
}
