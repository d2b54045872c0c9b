//! Elo rating calculations
//!
//! Pairwise expectation and the delta engine live in [`elo`]; [`team`]
//! and [`rank`] extend them to teams and N-way ranked matches, and
//! [`calculator`] wraps the ranked update for host applications.

pub mod calculator;
pub mod elo;
pub mod rank;
pub mod team;

// Re-export commonly used types and functions
pub use calculator::{EloRatingCalculator, RatingCalculationResult, RatingCalculator};
pub use elo::{expected_score, rating_delta, update_rating};
pub use rank::{expected_place, expected_rank_score, update_rank_rating};
pub use team::{elo_to_bt, expected_team_score, update_team_rating};
