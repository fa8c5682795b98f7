use super::MatchEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of one simulated fixture. Created once by the match engine and
/// never mutated after it is stored in the match history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    /// Sorted by minute, stable for equal minutes
    pub events: Vec<MatchEvent>,
    pub date: NaiveDate,
}

impl MatchResult {
    /// Name of the winning side, `None` for a draw.
    pub fn winner(&self) -> Option<&str> {
        if self.home_goals > self.away_goals {
            Some(self.home_team.as_str())
        } else if self.away_goals > self.home_goals {
            Some(self.away_team.as_str())
        } else {
            None
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.home_goals.saturating_add(self.away_goals)
    }

    pub fn scoreline(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home_team, self.home_goals, self.away_goals, self.away_team
        )
    }

    pub fn goals(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().filter(|e| e.is_goal())
    }
}
