use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
}

/// A single timed incident in a simulated match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// 1-90 inclusive
    pub minute: u8,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Scoring side
    pub team: String,
    pub scorer: String,
    pub assist: String,
}

impl MatchEvent {
    pub fn goal(
        minute: u8,
        team: impl Into<String>,
        scorer: impl Into<String>,
        assist: impl Into<String>,
    ) -> Self {
        Self {
            minute,
            event_type: EventType::Goal,
            team: team.into(),
            scorer: scorer.into(),
            assist: assist.into(),
        }
    }

    pub fn is_goal(&self) -> bool {
        self.event_type == EventType::Goal
    }

    /// Commentary line, e.g. `37' - GOAL! Saka (Assist: Odegaard)`.
    pub fn describe(&self) -> String {
        match self.event_type {
            EventType::Goal => {
                format!("{}' - GOAL! {} (Assist: {})", self.minute, self.scorer, self.assist)
            }
        }
    }
}
