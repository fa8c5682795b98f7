use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A club in the league table. The roster is not stored here; it is every
/// player whose `team` equals this team's `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub league_position: u32,
    pub points: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Team {
    pub fn new(name: impl Into<String>, league_position: u32, points: u32) -> Self {
        Self { name: name.into(), league_position, points, extra: Map::new() }
    }

    /// Case-insensitive exact name match.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
