//! Turn sequencing and the rules of play.
//!
//! `TurnEngine` owns a `GameState` and is the only thing that mutates it:
//! rolling, placing (with destruction of matching enemy dice), game-over
//! detection, the optional coin flip, difficulty changes and reset.

pub mod engine;
pub mod outcome;
pub mod rejection;

pub use engine::{Placement, TurnEngine};
pub use outcome::Outcome;
pub use rejection::Rejection;
