//! Rating calculator trait and the Elo implementation
//!
//! Host applications usually know players by id and finishing rank rather
//! than as an ordered rating list. The calculator does that bookkeeping
//! and delegates the math to [`update_rank_rating`].

use crate::config::RatingConfig;
use crate::error::{RatingError, Result};
use crate::rating::elo::expected_score;
use crate::rating::rank::{expected_place, update_rank_rating};
use crate::types::{PlayerId, Rating, RatingChange};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Result of a rating calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCalculationResult {
    /// Rating changes for all players, in input order
    pub rating_changes: Vec<RatingChange>,
    /// Quality score of the match (0.0 to 1.0, higher is better)
    pub match_quality: f64,
}

/// Trait for calculating rating changes after games
pub trait RatingCalculator: Send + Sync {
    /// Calculate rating changes for players based on game results
    ///
    /// # Arguments
    /// * `players` - List of (player_id, current_rating) pairs
    /// * `rankings` - List of (player_id, rank) pairs where 1 = first place
    fn calculate_rating_changes(
        &self,
        players: &[(PlayerId, Rating)],
        rankings: &[(PlayerId, u32)],
    ) -> Result<RatingCalculationResult>;

    /// Get the initial rating for new players
    fn get_initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> Result<()>;
}

/// Elo calculator for ranked matches
#[derive(Debug, Clone, Default)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: RatingConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Expected finishing place of every entrant against the others
    pub fn expected_places(&self, ratings: &[Rating]) -> Result<Vec<f64>> {
        if ratings.len() < 2 {
            return Err(RatingError::invalid_argument(
                "at least two ratings are needed for expected places",
            ));
        }

        (0..ratings.len())
            .map(|i| {
                let opponents: Vec<Rating> = ratings
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, &rating)| rating)
                    .collect();
                expected_place(ratings[i], &opponents)
            })
            .collect()
    }

    /// Get quality score for a match (0.0 to 1.0, higher is better)
    ///
    /// Mean over every pair of how close the pair is to an even contest.
    pub fn calculate_match_quality(&self, ratings: &[Rating]) -> f64 {
        if ratings.len() < 2 {
            return 0.0;
        }

        let mut total = 0.0;
        let mut pairs = 0usize;
        for (i, &a) in ratings.iter().enumerate() {
            for &b in &ratings[i + 1..] {
                total += 1.0 - (2.0 * expected_score(a, b) - 1.0).abs();
                pairs += 1;
            }
        }

        total / pairs as f64
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn calculate_rating_changes(
        &self,
        players: &[(PlayerId, Rating)],
        rankings: &[(PlayerId, u32)], // (player_id, rank) where 1 = first place
    ) -> Result<RatingCalculationResult> {
        if players.len() < 2 {
            return Err(RatingError::invalid_argument(format!(
                "at least two players are needed for a ranked match, got {}",
                players.len()
            )));
        }

        let mut known: HashSet<&str> = HashSet::with_capacity(players.len());
        for (player_id, _) in players {
            if !known.insert(player_id.as_str()) {
                return Err(RatingError::invalid_argument(format!(
                    "player {} appears more than once",
                    player_id
                )));
            }
        }

        let mut ranking_map: HashMap<&str, u32> = HashMap::with_capacity(rankings.len());
        for (player_id, rank) in rankings {
            if ranking_map.insert(player_id.as_str(), *rank).is_some() {
                return Err(RatingError::invalid_argument(format!(
                    "duplicate ranking for player {}",
                    player_id
                )));
            }
        }

        if let Some((player_id, _)) = rankings.iter().find(|(id, _)| !known.contains(id.as_str())) {
            return Err(RatingError::invalid_argument(format!(
                "ranking provided for unknown player {}",
                player_id
            )));
        }

        // Pair every player with its rank, rejecting gaps in the data
        let mut seen_ranks = HashSet::new();
        let mut ranked = Vec::with_capacity(players.len());
        for (index, (player_id, rating)) in players.iter().enumerate() {
            let rank = *ranking_map.get(player_id.as_str()).ok_or_else(|| {
                RatingError::invalid_argument(format!(
                    "no ranking provided for player {}",
                    player_id
                ))
            })?;
            if rank == 0 {
                return Err(RatingError::invalid_argument(format!(
                    "rank of player {} must start at 1",
                    player_id
                )));
            }
            if !seen_ranks.insert(rank) {
                return Err(RatingError::invalid_argument(format!(
                    "rank {} is shared by more than one player; ties are not supported",
                    rank
                )));
            }
            ranked.push((rank, index, *rating));
        }
        ranked.sort_by_key(|(rank, _, _)| *rank);

        let ordered: Vec<Rating> = ranked.iter().map(|(_, _, rating)| *rating).collect();
        let input_ratings: Vec<Rating> = players.iter().map(|(_, rating)| *rating).collect();

        // The configured K is per finishing position, so resolve it in rank order
        let new_ordered = update_rank_rating(&ordered, self.config.k_factor.clone())?;
        let places = self.expected_places(&input_ratings)?;

        let mut new_by_index = vec![0.0; players.len()];
        for ((_, index, _), new_rating) in ranked.iter().zip(&new_ordered) {
            new_by_index[*index] = *new_rating;
        }

        let rating_changes: Vec<RatingChange> = players
            .iter()
            .enumerate()
            .map(|(index, (player_id, old_rating))| RatingChange {
                player_id: player_id.clone(),
                old_rating: *old_rating,
                new_rating: new_by_index[index],
                rank: ranking_map[player_id.as_str()],
                expected_place: places[index],
            })
            .collect();

        let match_quality = self.calculate_match_quality(&input_ratings);

        debug!(
            players = players.len(),
            match_quality,
            k_factor = %self.config.k_factor,
            "Calculated ranked rating changes"
        );

        Ok(RatingCalculationResult {
            rating_changes,
            match_quality,
        })
    }

    fn get_initial_rating(&self) -> Rating {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: RatingConfig =
            serde_json::from_value(config).map_err(|e| RatingError::ConfigurationError {
                message: format!("Invalid Elo configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KFactor;

    fn players(ratings: &[(&str, f64)]) -> Vec<(PlayerId, Rating)> {
        ratings
            .iter()
            .map(|(id, rating)| (id.to_string(), *rating))
            .collect()
    }

    fn rankings(ranks: &[(&str, u32)]) -> Vec<(PlayerId, u32)> {
        ranks.iter().map(|(id, rank)| (id.to_string(), *rank)).collect()
    }

    #[test]
    fn test_calculator_creation() {
        let calculator = EloRatingCalculator::new(RatingConfig::default()).unwrap();
        assert_eq!(calculator.get_initial_rating(), 1500.0);

        let invalid = RatingConfig {
            k_factor: KFactor::Uniform(-1.0),
            ..RatingConfig::default()
        };
        assert!(EloRatingCalculator::new(invalid).is_err());
    }

    #[test]
    fn test_rating_calculation_two_players() {
        let calculator = EloRatingCalculator::default();

        let players = players(&[("player1", 1500.0), ("player2", 1500.0)]);
        let rankings = rankings(&[("player1", 1), ("player2", 2)]);

        let result = calculator
            .calculate_rating_changes(&players, &rankings)
            .unwrap();

        assert_eq!(result.rating_changes.len(), 2);

        let winner = &result.rating_changes[0];
        assert_eq!(winner.player_id, "player1");
        assert_eq!(winner.rank, 1);
        assert_eq!(winner.new_rating, 1510.0);
        assert_eq!(winner.expected_place, 1.5);

        let loser = &result.rating_changes[1];
        assert_eq!(loser.player_id, "player2");
        assert_eq!(loser.new_rating, 1490.0);

        // Even match is a perfect pairing
        assert_eq!(result.match_quality, 1.0);
    }

    #[test]
    fn test_rating_calculation_unordered_input() {
        let calculator = EloRatingCalculator::default();

        let players = players(&[
            ("player1", 1600.0),
            ("player2", 1500.0),
            ("player3", 1400.0),
            ("player4", 1450.0),
        ]);
        let rankings = rankings(&[
            ("player1", 1),
            ("player2", 2),
            ("player3", 4),
            ("player4", 3),
        ]);

        let result = calculator
            .calculate_rating_changes(&players, &rankings)
            .unwrap();

        let direct = update_rank_rating(&[1600.0, 1500.0, 1450.0, 1400.0], 20.0).unwrap();
        let changes: HashMap<&str, &RatingChange> = result
            .rating_changes
            .iter()
            .map(|change| (change.player_id.as_str(), change))
            .collect();

        assert_eq!(changes["player1"].new_rating, direct[0]);
        assert_eq!(changes["player2"].new_rating, direct[1]);
        assert_eq!(changes["player4"].new_rating, direct[2]);
        assert_eq!(changes["player3"].new_rating, direct[3]);
        assert_eq!(changes["player3"].rank, 4);

        // Output follows input order
        let ids: Vec<&str> = result
            .rating_changes
            .iter()
            .map(|change| change.player_id.as_str())
            .collect();
        assert_eq!(ids, vec!["player1", "player2", "player3", "player4"]);
    }

    #[test]
    fn test_per_position_k_factor() {
        let config = RatingConfig {
            k_factor: KFactor::PerEntrant(vec![40.0, 10.0]),
            ..RatingConfig::default()
        };
        let calculator = EloRatingCalculator::new(config).unwrap();

        // Loser listed first; K still follows finishing position
        let players = players(&[("loser", 1200.0), ("winner", 1200.0)]);
        let rankings = rankings(&[("loser", 2), ("winner", 1)]);

        let result = calculator
            .calculate_rating_changes(&players, &rankings)
            .unwrap();
        assert_eq!(result.rating_changes[0].new_rating, 1195.0);
        assert_eq!(result.rating_changes[1].new_rating, 1220.0);
    }

    #[test]
    fn test_expected_places() {
        let calculator = EloRatingCalculator::default();
        let places = calculator
            .expected_places(&[1500.0, 1500.0, 1500.0])
            .unwrap();
        assert_eq!(places, vec![2.0, 2.0, 2.0]);

        let places = calculator.expected_places(&[1800.0, 1200.0]).unwrap();
        assert!(places[0] < places[1]);
        assert!((places[0] + places[1] - 3.0).abs() < 1e-12);

        assert!(calculator.expected_places(&[1500.0]).is_err());
    }

    #[test]
    fn test_match_quality() {
        let calculator = EloRatingCalculator::default();

        let high_quality = calculator.calculate_match_quality(&[1500.0, 1510.0, 1490.0, 1505.0]);
        let low_quality = calculator.calculate_match_quality(&[1200.0, 1500.0, 1800.0, 1400.0]);

        assert!(high_quality > low_quality);
        assert!(high_quality > 0.9);
        assert!(low_quality >= 0.0);
        assert_eq!(calculator.calculate_match_quality(&[1500.0]), 0.0);
    }

    #[test]
    fn test_config_round_trip() {
        let mut calculator = EloRatingCalculator::default();

        let new_config = serde_json::json!({
            "k_factor": 32.0,
            "initial_rating": 1200.0
        });
        calculator.update_config(new_config).unwrap();

        assert_eq!(calculator.get_initial_rating(), 1200.0);
        assert_eq!(calculator.config()["k_factor"], serde_json::json!(32.0));

        let invalid = serde_json::json!({ "k_factor": 0.0 });
        assert!(calculator.update_config(invalid).is_err());
        // Failed update leaves the old config in place
        assert_eq!(calculator.get_initial_rating(), 1200.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let calculator = EloRatingCalculator::default();

        // Not enough players
        assert!(calculator.calculate_rating_changes(&[], &[]).is_err());
        let single = players(&[("player1", 1500.0)]);
        assert!(calculator
            .calculate_rating_changes(&single, &rankings(&[("player1", 1)]))
            .is_err());

        let two = players(&[("player1", 1500.0), ("player2", 1500.0)]);

        // Missing ranking for player
        let result = calculator.calculate_rating_changes(&two, &rankings(&[("player1", 1)]));
        assert!(result.unwrap_err().is_invalid_argument());

        // Ranking for someone not in the match
        let result = calculator.calculate_rating_changes(
            &two,
            &rankings(&[("player1", 1), ("player2", 2), ("ghost", 3)]),
        );
        assert!(result.is_err());

        // Tied ranks
        let result =
            calculator.calculate_rating_changes(&two, &rankings(&[("player1", 1), ("player2", 1)]));
        assert!(result.is_err());

        // Ranks start at 1
        let result =
            calculator.calculate_rating_changes(&two, &rankings(&[("player1", 0), ("player2", 1)]));
        assert!(result.is_err());

        // A player ranked twice must not have the later entry win
        let err = calculator
            .calculate_rating_changes(
                &two,
                &rankings(&[("player1", 1), ("player2", 2), ("player1", 3)]),
            )
            .unwrap_err();
        assert_eq!(
            err,
            RatingError::invalid_argument("duplicate ranking for player player1")
        );

        // The same player listed twice in the match
        let repeated = players(&[("player1", 1500.0), ("player1", 1500.0)]);
        let err = calculator
            .calculate_rating_changes(&repeated, &rankings(&[("player1", 1)]))
            .unwrap_err();
        assert_eq!(
            err,
            RatingError::invalid_argument("player player1 appears more than once")
        );
    }
}
