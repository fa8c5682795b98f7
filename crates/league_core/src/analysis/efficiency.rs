use crate::error::{LeagueError, Result};
use crate::models::Player;
use serde::{Deserialize, Serialize};

/// Per-90 output metrics for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEfficiency {
    pub goals_per_90: f64,
    pub assists_per_90: f64,
    pub goal_contributions: u32,
    /// Goals per shot on target, as a percentage. 0 when no shots on target.
    pub shots_conversion: f64,
}

/// Efficiency metrics for `player`. Zero minutes played is an error.
pub fn player_efficiency(player: &Player) -> Result<PlayerEfficiency> {
    let stats = &player.stats;
    if stats.minutes_played == 0 {
        return Err(LeagueError::DivisionByZero { player: player.name.clone() });
    }
    let minutes = stats.minutes_played as f64;

    let shots_conversion = if stats.shots_on_target > 0 {
        stats.goals as f64 / stats.shots_on_target as f64 * 100.0
    } else {
        0.0
    };

    Ok(PlayerEfficiency {
        goals_per_90: stats.goals as f64 / minutes * 90.0,
        assists_per_90: stats.assists as f64 / minutes * 90.0,
        goal_contributions: stats.goal_contributions(),
        shots_conversion,
    })
}
