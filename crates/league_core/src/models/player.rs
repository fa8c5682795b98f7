use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Season statistics for a single player.
///
/// The simulation only ever increments `goals` and `assists`. `minutes_played`
/// and `shots_on_target` come from the league file and are read-only here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub goals: u32,
    pub assists: u32,
    pub minutes_played: u32,
    pub shots_on_target: u32,
    /// Fields this crate does not model, kept for lossless round-trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayerStats {
    pub fn new(goals: u32, assists: u32, minutes_played: u32, shots_on_target: u32) -> Self {
        Self { goals, assists, minutes_played, shots_on_target, extra: Map::new() }
    }

    /// Goals plus assists.
    pub fn goal_contributions(&self) -> u32 {
        self.goals + self.assists
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Canonical name of the team this player is registered with
    pub team: String,
    pub age: u32,
    /// Overall rating, 0-99
    pub rating: u32,
    pub position: String,
    pub stats: PlayerStats,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        age: u32,
        rating: u32,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            age,
            rating,
            position: position.into(),
            stats: PlayerStats::default(),
            extra: Map::new(),
        }
    }

    pub fn with_stats(mut self, stats: PlayerStats) -> Self {
        self.stats = stats;
        self
    }

    /// Case-insensitive exact name match.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn plays_for(&self, team_name: &str) -> bool {
        self.team == team_name
    }
}
