//! Player market valuation
//!
//! value = floor(rating * 2M * age_factor + goals * 500k + assists * 300k
//!               + minutes / 90 * 100k)
//!
//! where age_factor = 1 - 0.05 * |26 - age|. The age factor is not clamped:
//! players far from peak age (outside roughly 6..=46) get a negative
//! rating component and can end up with a negative value.

use crate::config::ValuationConfig;
use crate::models::Player;

/// Multiplier on the rating component. Exactly 1.0 at peak age.
pub fn age_factor(age: u32, config: &ValuationConfig) -> f64 {
    let distance = (config.peak_age as f64 - age as f64).abs();
    1.0 - distance * config.age_decay_per_year
}

/// Season output component of the value.
pub fn performance_value(player: &Player, config: &ValuationConfig) -> f64 {
    let stats = &player.stats;
    stats.goals as f64 * config.goal_value
        + stats.assists as f64 * config.assist_value
        + stats.minutes_played as f64 / 90.0 * config.value_per_90_minutes
}

/// Market value of `player` in currency units.
pub fn calculate_player_value(player: &Player, config: &ValuationConfig) -> i64 {
    let base = player.rating as f64 * config.rating_multiplier;
    let value = base * age_factor(player.age, config) + performance_value(player, config);
    value.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerStats;

    fn player(age: u32, rating: u32, stats: PlayerStats) -> Player {
        Player::new("Test", "Red FC", age, rating, "ST").with_stats(stats)
    }

    #[test]
    fn test_peak_age_value() {
        let cfg = ValuationConfig::default();
        // 80 * 2M * 1.0 + 10 * 500k + 5 * 300k + 1800/90 * 100k
        let p = player(26, 80, PlayerStats::new(10, 5, 1800, 20));
        assert_eq!(calculate_player_value(&p, &cfg), 160_000_000 + 5_000_000 + 1_500_000 + 2_000_000);
    }

    #[test]
    fn test_age_factor_peaks_at_26() {
        let cfg = ValuationConfig::default();
        assert_eq!(age_factor(26, &cfg), 1.0);
        for age in (16..=40).filter(|a| *a != 26) {
            assert!(age_factor(age, &cfg) < 1.0, "age {} should be below peak", age);
        }

        let stats = PlayerStats::new(3, 2, 900, 7);
        let peak = calculate_player_value(&player(26, 75, stats.clone()), &cfg);
        for age in [18, 22, 25, 27, 30, 35] {
            assert!(calculate_player_value(&player(age, 75, stats.clone()), &cfg) < peak);
        }
    }

    #[test]
    fn test_symmetric_decay() {
        let cfg = ValuationConfig::default();
        let stats = PlayerStats::default();
        assert_eq!(
            calculate_player_value(&player(21, 70, stats.clone()), &cfg),
            calculate_player_value(&player(31, 70, stats), &cfg)
        );
        // 70 * 2M * 0.75
        assert_eq!(calculate_player_value(&player(21, 70, PlayerStats::default()), &cfg), 105_000_000);
    }

    #[test]
    fn test_partial_minutes_are_prorated() {
        let cfg = ValuationConfig::default();
        let p = player(26, 0, PlayerStats::new(0, 0, 45, 0));
        assert_eq!(calculate_player_value(&p, &cfg), 50_000);
    }

    #[test]
    fn test_value_can_go_negative_far_from_peak() {
        let cfg = ValuationConfig::default();
        // age_factor = 1 - 0.05 * 30 = -0.5
        let p = player(56, 80, PlayerStats::default());
        assert_eq!(calculate_player_value(&p, &cfg), -80_000_000);
    }
}
