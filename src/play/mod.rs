//! Automated play for balancing and regression checks.
//!
//! ## Usage
//!
//! ```
//! use knucklebones::core::{Difficulty, Side};
//! use knucklebones::play::{MatchConfig, MatchRunner};
//!
//! let config = MatchConfig::new(Difficulty::Easy, Difficulty::Hard)
//!     .with_games(20)
//!     .with_seed(1);
//!
//! let stats = MatchRunner::new(config).run().unwrap();
//! assert_eq!(stats.games, 20);
//! assert_eq!(stats.wins[Side::Player] + stats.wins[Side::Opponent] + stats.ties, 20);
//! ```

pub mod match_runner;

pub use match_runner::{GameSummary, MatchConfig, MatchRunner, MatchStats};
