//! # League Configuration
//!
//! Every tuning constant used by the valuation and simulation engines lives
//! here. Defaults reproduce the standard formulas; a YAML file can override
//! any subset of fields.
//!
//! ```rust
//! use league_core::config::LeagueConfig;
//!
//! let config = LeagueConfig::from_yaml_str("simulation:\n  home_advantage: 1.2\n").unwrap();
//! assert_eq!(config.simulation.home_advantage, 1.2);
//! assert_eq!(config.valuation.peak_age, 26);
//! ```

mod simulation_config;
mod valuation_config;

pub use simulation_config::SimulationConfig;
pub use valuation_config::ValuationConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueConfig {
    #[serde(default)]
    pub valuation: ValuationConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl LeagueConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: LeagueConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!("Loaded league config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if !(sim.strength_per_goal > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "strength_per_goal must be positive, got {}",
                sim.strength_per_goal
            )));
        }
        if !(sim.goal_std_dev >= 0.0) || !sim.goal_std_dev.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "goal_std_dev must be a finite non-negative number, got {}",
                sim.goal_std_dev
            )));
        }
        if !(sim.home_advantage > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "home_advantage must be positive, got {}",
                sim.home_advantage
            )));
        }
        if sim.match_minutes == 0 {
            return Err(ConfigError::Invalid("match_minutes must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = LeagueConfig::default();
        assert!((cfg.simulation.home_advantage - 1.10).abs() < 1e-12);
        assert!((cfg.simulation.strength_per_goal - 20.0).abs() < 1e-12);
        assert_eq!(cfg.simulation.match_minutes, 90);
        assert_eq!(cfg.valuation.peak_age, 26);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let cfg = LeagueConfig::from_yaml_str("valuation:\n  goal_value: 750000\n").unwrap();
        assert_eq!(cfg.valuation.goal_value, 750_000.0);
        assert_eq!(cfg.valuation.assist_value, 300_000.0);
        assert_eq!(cfg.simulation, SimulationConfig::default());
    }

    #[test]
    fn test_rejects_zero_divisor() {
        let err = LeagueConfig::from_yaml_str("simulation:\n  strength_per_goal: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_negative_std_dev() {
        let err = LeagueConfig::from_yaml_str("simulation:\n  goal_std_dev: -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
