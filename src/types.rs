//! Common types used throughout the rating library

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

/// A competitor's skill estimate on the Elo scale
pub type Rating = f64;

/// Match outcome for one side: 1.0 win, 0.5 draw, 0.0 loss
pub type Score = f64;

/// Identifier used by the calculator to match players with rankings
pub type PlayerId = String;

/// K-factor applied when a call site does not choose its own
pub const DEFAULT_K_FACTOR: f64 = 20.0;

/// K-factor for a ranked match: one value for everybody, or one per entrant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KFactor {
    Uniform(f64),
    PerEntrant(Vec<f64>),
}

impl Default for KFactor {
    fn default() -> Self {
        KFactor::Uniform(DEFAULT_K_FACTOR)
    }
}

impl From<f64> for KFactor {
    fn from(k: f64) -> Self {
        KFactor::Uniform(k)
    }
}

impl From<Vec<f64>> for KFactor {
    fn from(k: Vec<f64>) -> Self {
        KFactor::PerEntrant(k)
    }
}

impl From<&[f64]> for KFactor {
    fn from(k: &[f64]) -> Self {
        KFactor::PerEntrant(k.to_vec())
    }
}

impl KFactor {
    /// Expand into one positive K per entrant.
    ///
    /// A uniform K is broadcast; a per-entrant list must have exactly
    /// `entrants` elements. Any non-positive value is rejected.
    pub fn resolve(&self, entrants: usize) -> Result<Vec<f64>> {
        match self {
            KFactor::Uniform(k) => {
                if k.is_nan() || *k <= 0.0 {
                    return Err(RatingError::invalid_argument(format!(
                        "k must be positive, got {}",
                        k
                    )));
                }
                Ok(vec![*k; entrants])
            }
            KFactor::PerEntrant(ks) => {
                if ks.len() != entrants {
                    return Err(RatingError::invalid_argument(format!(
                        "expected {} k factors to match the ranks, got {}",
                        entrants,
                        ks.len()
                    )));
                }
                if let Some(bad) = ks.iter().find(|k| k.is_nan() || **k <= 0.0) {
                    return Err(RatingError::invalid_argument(format!(
                        "all k factors must be positive, got {}",
                        bad
                    )));
                }
                Ok(ks.clone())
            }
        }
    }
}

impl std::fmt::Display for KFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KFactor::Uniform(k) => write!(f, "{}", k),
            KFactor::PerEntrant(ks) => write!(f, "{:?}", ks),
        }
    }
}

/// Rating change information for a player after a ranked match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: Rating,
    pub new_rating: Rating,
    pub rank: u32, // 1st, 2nd, 3rd, ...
    /// Finishing position predicted from the pre-match ratings
    pub expected_place: f64,
}

impl RatingChange {
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}
