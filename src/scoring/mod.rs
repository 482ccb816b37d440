//! Scoring under the multiplying-match rule.

pub mod scorer;

pub use scorer::{column_score, total_score, ScoreLine};
