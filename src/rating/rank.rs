//! N-way ranked matches
//!
//! A finishing order of N entrants is read as a round robin: the winner
//! beat N-1 opponents, the runner-up N-2, and so on down to 0 for last
//! place. Expectations are summed pairwise over the same field and the
//! K-factor is divided by N-1 so the deltas stay on the 1v1 scale.
//!
//! Ties in the finishing order are not modeled.

use crate::error::{RatingError, Result};
use crate::rating::elo::{expected_score, rating_delta};
use crate::types::{KFactor, Rating};
use tracing::trace;

/// Expected round-robin points of every entrant against the rest.
pub fn expected_rank_score(ranks: &[Rating]) -> Result<Vec<f64>> {
    ensure_enough_entrants(ranks)?;

    Ok(ranks
        .iter()
        .enumerate()
        .map(|(i, &rating)| {
            ranks
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, &opponent)| expected_score(rating, opponent))
                .sum::<f64>()
        })
        .collect())
}

/// Expected finishing position (1 = first) of `rating` in a field of
/// `opponent_ratings`. Not rounded.
pub fn expected_place(rating: Rating, opponent_ratings: &[Rating]) -> Result<f64> {
    if opponent_ratings.is_empty() {
        return Err(RatingError::invalid_argument(
            "opponent_ratings must have at least one rating",
        ));
    }

    let expected_wins: f64 = opponent_ratings
        .iter()
        .map(|&opponent| expected_score(rating, opponent))
        .sum();

    Ok(1.0 + opponent_ratings.len() as f64 - expected_wins)
}

/// Update the ratings of a finishing order, first place first.
///
/// `k` is either one K-factor for every entrant or one per entrant in
/// rank order. New ratings come back in the same order as `ranks`.
pub fn update_rank_rating(ranks: &[Rating], k: impl Into<KFactor>) -> Result<Vec<Rating>> {
    ensure_enough_entrants(ranks)?;
    let k_factors = k.into().resolve(ranks.len())?;

    let expected = expected_rank_score(ranks)?;
    let k_norm = (ranks.len() - 1) as f64;

    let mut new_ratings = Vec::with_capacity(ranks.len());
    for (position, ((&rating, individual_expected), individual_k)) in
        ranks.iter().zip(expected).zip(k_factors).enumerate()
    {
        let score = (ranks.len() - 1 - position) as f64;
        let delta = rating_delta(score, individual_expected, individual_k / k_norm)?;

        trace!(
            place = position + 1,
            rating,
            score,
            expected = individual_expected,
            delta,
            "Ranked update"
        );

        new_ratings.push(rating + delta);
    }

    Ok(new_ratings)
}

fn ensure_enough_entrants(ranks: &[Rating]) -> Result<()> {
    if ranks.len() < 2 {
        return Err(RatingError::invalid_argument(format!(
            "ranks must have at least two ratings, got {}",
            ranks.len()
        )));
    }
    Ok(())
}
