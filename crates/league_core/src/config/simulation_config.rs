//! Match simulation constants

use serde::{Deserialize, Serialize};

/// Goal model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Multiplier applied to the home side's strength (default: 1.10)
    pub home_advantage: f64,
    /// Strength points per expected goal (default: 20.0)
    pub strength_per_goal: f64,
    /// Standard deviation of the goal draw (default: 1.0)
    pub goal_std_dev: f64,
    /// Last minute an event can be placed in (default: 90)
    pub match_minutes: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { home_advantage: 1.10, strength_per_goal: 20.0, goal_std_dev: 1.0, match_minutes: 90 }
    }
}
