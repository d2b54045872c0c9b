//! Elo Rank - Elo ratings for players, teams and ranked matches
//!
//! This crate computes rating updates with the logistic Elo model for
//! 1v1 matches, fixed teams (members share the team's change by their
//! Bradley-Terry strength) and N-way ranked matches (each entrant is
//! scored as if it played a round robin against the rest of the field).
//! It holds no state: callers own the ratings and feed them back in.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and functions
pub use error::{RatingError, Result};
pub use types::*;

pub use rating::{
    elo_to_bt, expected_place, expected_rank_score, expected_score, expected_team_score,
    rating_delta, update_rank_rating, update_rating, update_team_rating,
};
pub use rating::{EloRatingCalculator, RatingCalculationResult, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
