//! Configuration for the rating engine
//!
//! This module defines the process-wide Glicko-2 parameters, with validation,
//! presets, and environment variable loading with fallback to defaults.

use crate::error::RatingError;
use crate::rating::scale::{INITIAL_DEVIATION, INITIAL_RATING, INITIAL_VOLATILITY};
use serde::{Deserialize, Serialize};
use std::env;

/// Glicko-2 system configuration.
///
/// `tau` constrains how much volatility can drift in one period: larger
/// values permit larger volatility swings, hence larger rating swings after
/// surprising results. Reasonable choices lie between 0.3 and 1.2.
/// `convergence_tolerance` tightens solver precision at the cost of more
/// iterations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlickoConfig {
    /// System constant tau constraining volatility change over time
    pub tau: f64,
    /// Convergence tolerance epsilon for the volatility solver
    pub convergence_tolerance: f64,
    /// Rating assigned to new players
    pub initial_rating: f64,
    /// Deviation assigned to new players
    pub initial_deviation: f64,
    /// Volatility assigned to new players
    pub initial_volatility: f64,
}

impl Default for GlickoConfig {
    fn default() -> Self {
        Self {
            tau: 0.5,
            convergence_tolerance: 1e-6,
            initial_rating: INITIAL_RATING,
            initial_deviation: INITIAL_DEVIATION,
            initial_volatility: INITIAL_VOLATILITY,
        }
    }
}

impl GlickoConfig {
    /// Create conservative configuration (smaller volatility swings)
    pub fn conservative() -> Self {
        Self {
            tau: 0.3,
            ..Self::default()
        }
    }

    /// Create aggressive configuration (larger volatility swings)
    pub fn aggressive() -> Self {
        Self {
            tau: 1.2,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> crate::error::Result<Self> {
        let mut config = Self::default();

        if let Ok(tau) = env::var("GLICKO_TAU") {
            config.tau = tau
                .parse()
                .map_err(|_| RatingError::ConfigurationError {
                    message: format!("GLICKO_TAU is not a valid number: {}", tau),
                })?;
        }

        if let Ok(tolerance) = env::var("GLICKO_CONVERGENCE_TOLERANCE") {
            config.convergence_tolerance =
                tolerance
                    .parse()
                    .map_err(|_| RatingError::ConfigurationError {
                        message: format!(
                            "GLICKO_CONVERGENCE_TOLERANCE is not a valid number: {}",
                            tolerance
                        ),
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.tau.is_finite() || self.tau <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("tau must be positive, got {}", self.tau),
            }
            .into());
        }

        if !self.convergence_tolerance.is_finite() || self.convergence_tolerance <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!(
                    "convergence tolerance must be positive, got {}",
                    self.convergence_tolerance
                ),
            }
            .into());
        }

        if !self.initial_rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: format!("initial rating must be finite, got {}", self.initial_rating),
            }
            .into());
        }

        if !self.initial_deviation.is_finite() || self.initial_deviation <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!(
                    "initial deviation must be positive, got {}",
                    self.initial_deviation
                ),
            }
            .into());
        }

        if !self.initial_volatility.is_finite() || self.initial_volatility <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!(
                    "initial volatility must be positive, got {}",
                    self.initial_volatility
                ),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlickoConfig::default();
        assert_eq!(config.tau, 0.5);
        assert_eq!(config.convergence_tolerance, 1e-6);
        assert_eq!(config.initial_rating, 1500.0);
        assert_eq!(config.initial_deviation, 350.0);
        assert_eq!(config.initial_volatility, 0.06);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_presets() {
        let conservative = GlickoConfig::conservative();
        let aggressive = GlickoConfig::aggressive();
        let default = GlickoConfig::default();

        assert!(conservative.tau < default.tau);
        assert!(aggressive.tau > default.tau);

        assert!(conservative.validate().is_ok());
        assert!(aggressive.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = GlickoConfig::default();
        assert!(config.validate().is_ok());

        config.tau = 0.0;
        assert!(config.validate().is_err());

        config = GlickoConfig::default();
        config.tau = f64::NAN;
        assert!(config.validate().is_err());

        config = GlickoConfig::default();
        config.convergence_tolerance = -1e-6;
        assert!(config.validate().is_err());

        config = GlickoConfig::default();
        config.initial_deviation = 0.0;
        assert!(config.validate().is_err());

        config = GlickoConfig::default();
        config.initial_volatility = -0.06;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_overrides_and_validates() {
        env::set_var("GLICKO_TAU", "0.8");
        env::set_var("GLICKO_CONVERGENCE_TOLERANCE", "1e-7");
        let config = GlickoConfig::from_env().unwrap();
        assert_eq!(config.tau, 0.8);
        assert_eq!(config.convergence_tolerance, 1e-7);

        env::set_var("GLICKO_TAU", "not-a-number");
        assert!(GlickoConfig::from_env().is_err());

        env::set_var("GLICKO_TAU", "-0.5");
        assert!(GlickoConfig::from_env().is_err());

        env::remove_var("GLICKO_TAU");
        env::remove_var("GLICKO_CONVERGENCE_TOLERANCE");
        let config = GlickoConfig::from_env().unwrap();
        assert_eq!(config.tau, 0.5);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = GlickoConfig::aggressive();
        let json = serde_json::to_value(&config).unwrap();
        let restored: GlickoConfig = serde_json::from_value(json).unwrap();
        assert_eq!(restored.tau, config.tau);
        assert_eq!(restored.convergence_tolerance, config.convergence_tolerance);
    }
}
