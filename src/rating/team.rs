//! Team matches on the Bradley-Terry scale
//!
//! A team plays as the sum of its members' ratings. The team-level delta
//! is then split among members by their share of the team's
//! Bradley-Terry strength, so the team total moves by exactly that delta
//! and stronger members absorb more of both gains and losses.

use crate::error::{RatingError, Result};
use crate::rating::elo::{check_score, ensure_positive_k, expected_score, rating_delta, ELO_SCALE};
use crate::types::{Rating, Score};
use tracing::trace;

/// Expected score of `team_a` against `team_b`, comparing summed ratings.
pub fn expected_team_score(team_a: &[Rating], team_b: &[Rating]) -> Result<f64> {
    ensure_non_empty("team_a", team_a)?;
    ensure_non_empty("team_b", team_b)?;

    Ok(expected_score(team_a.iter().sum(), team_b.iter().sum()))
}

/// Convert an Elo rating to the Bradley-Terry strength scale.
pub fn elo_to_bt(rating: Rating) -> f64 {
    10f64.powf(rating / ELO_SCALE)
}

/// Update every member of both teams after a team match.
///
/// `score` is from team A's point of view. Each team's K is scaled by its
/// size before the team delta is computed. Returned teams keep the input
/// order.
pub fn update_team_rating(
    team_a: &[Rating],
    team_b: &[Rating],
    score: Score,
    k_a: f64,
    k_b: f64,
) -> Result<(Vec<Rating>, Vec<Rating>)> {
    ensure_positive_k("k_a", k_a)?;
    ensure_positive_k("k_b", k_b)?;
    ensure_non_empty("team_a", team_a)?;
    ensure_non_empty("team_b", team_b)?;
    check_score(score);

    let expected_a = expected_team_score(team_a, team_b)?;
    let expected_b = 1.0 - expected_a;

    let delta_a = rating_delta(score, expected_a, k_a * team_a.len() as f64)?;
    let delta_b = rating_delta(1.0 - score, expected_b, k_b * team_b.len() as f64)?;

    trace!(
        team_a_size = team_a.len(),
        team_b_size = team_b.len(),
        expected_a,
        delta_a,
        delta_b,
        "Distributing team deltas"
    );

    Ok((
        distribute_delta(team_a, delta_a),
        distribute_delta(team_b, delta_b),
    ))
}

/// Each member's fraction of the team's Bradley-Terry strength.
///
/// Exponents are taken relative to the strongest member, which leaves
/// the ratios unchanged and keeps `10^x` finite for any rating.
fn bt_shares(team: &[Rating]) -> Vec<f64> {
    let strongest = team.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let strengths: Vec<f64> = team
        .iter()
        .map(|rating| elo_to_bt(rating - strongest))
        .collect();
    let norm: f64 = strengths.iter().sum();

    strengths.iter().map(|strength| strength / norm).collect()
}

fn distribute_delta(team: &[Rating], team_delta: f64) -> Vec<Rating> {
    team.iter()
        .zip(bt_shares(team))
        .map(|(rating, share)| rating + team_delta * share)
        .collect()
}

fn ensure_non_empty(name: &str, team: &[Rating]) -> Result<()> {
    if team.is_empty() {
        return Err(RatingError::invalid_argument(format!(
            "{} must have at least one rating",
            name
        )));
    }
    Ok(())
}
