//! Market valuation constants

use serde::{Deserialize, Serialize};

/// Valuation formula parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Currency units per rating point (default: 2_000_000)
    pub rating_multiplier: f64,
    /// Age at which the age factor is exactly 1.0 (default: 26)
    pub peak_age: u32,
    /// Age factor lost per year away from peak (default: 0.05)
    pub age_decay_per_year: f64,
    /// Value per season goal (default: 500_000)
    pub goal_value: f64,
    /// Value per season assist (default: 300_000)
    pub assist_value: f64,
    /// Value per 90 minutes played (default: 100_000)
    pub value_per_90_minutes: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            rating_multiplier: 2_000_000.0,
            peak_age: 26,
            age_decay_per_year: 0.05,
            goal_value: 500_000.0,
            assist_value: 300_000.0,
            value_per_90_minutes: 100_000.0,
        }
    }
}
