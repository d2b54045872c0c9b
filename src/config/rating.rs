//! Rating system configuration

use crate::error::{RatingError, Result};
use crate::types::{KFactor, Rating};
use serde::{Deserialize, Serialize};

/// Parameters for [`crate::rating::EloRatingCalculator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// K-factor for ranked matches, uniform or per finishing position
    pub k_factor: KFactor,
    /// Rating handed to players without history
    pub initial_rating: Rating,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: KFactor::default(),
            initial_rating: 1500.0,
        }
    }
}

impl RatingConfig {
    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            k_factor: KFactor::Uniform(10.0),
            ..Self::default()
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            k_factor: KFactor::Uniform(40.0),
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML, filling missing keys with defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| RatingError::ConfigurationError {
            message: format!("Invalid rating configuration: {}", e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let invalid_k = match &self.k_factor {
            KFactor::Uniform(k) => k.is_nan() || *k <= 0.0,
            KFactor::PerEntrant(ks) => ks.is_empty() || ks.iter().any(|k| k.is_nan() || *k <= 0.0),
        };
        if invalid_k {
            return Err(RatingError::ConfigurationError {
                message: format!("K-factor must be positive, got {}", self.k_factor),
            });
        }

        if !self.initial_rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: "Initial rating must be finite".to_string(),
            });
        }

        Ok(())
    }
}
