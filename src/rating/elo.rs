//! Pairwise Elo model
//!
//! Expected score of one rating against another, the K-scaled rating
//! delta, and the 1v1 update built from the two.

use crate::error::{RatingError, Result};
use crate::types::{Rating, Score};
use tracing::{trace, warn};

/// Rating difference at which the stronger side is expected to score ten
/// times as often as the weaker one.
pub const ELO_SCALE: f64 = 400.0;

/// Expected score of `rating_a` against `rating_b`.
///
/// Always strictly between 0 and 1 for finite inputs, and
/// `expected_score(a, b) + expected_score(b, a) == 1`.
pub fn expected_score(rating_a: Rating, rating_b: Rating) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / ELO_SCALE))
}

/// Rating change for an actual `score` against an `expected` score.
pub fn rating_delta(score: Score, expected: f64, k: f64) -> Result<f64> {
    ensure_positive_k("k", k)?;

    Ok(k * (score - expected))
}

/// Update both ratings after a 1v1 match.
///
/// `score` is from A's point of view; B is credited with `1 - score`.
/// Returns `(new rating of A, new rating of B)`.
pub fn update_rating(
    rating_a: Rating,
    rating_b: Rating,
    score: Score,
    k_a: f64,
    k_b: f64,
) -> Result<(Rating, Rating)> {
    ensure_positive_k("k_a", k_a)?;
    ensure_positive_k("k_b", k_b)?;
    check_score(score);

    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = 1.0 - expected_a;

    let new_a = rating_a + rating_delta(score, expected_a, k_a)?;
    let new_b = rating_b + rating_delta(1.0 - score, expected_b, k_b)?;

    trace!(
        rating_a,
        rating_b,
        score,
        expected_a,
        new_a,
        new_b,
        "Updated 1v1 ratings"
    );

    Ok((new_a, new_b))
}

/// Reject a K-factor that is not strictly positive (NaN included).
pub(crate) fn ensure_positive_k(name: &str, k: f64) -> Result<()> {
    if k.is_nan() || k <= 0.0 {
        return Err(RatingError::invalid_argument(format!(
            "{} must be positive, got {}",
            name, k
        )));
    }
    Ok(())
}

/// Scores outside [0, 1] are the caller's business; only note them.
pub(crate) fn check_score(score: Score) {
    if !(0.0..=1.0).contains(&score) {
        warn!(score, "Score outside [0, 1]");
    }
}
