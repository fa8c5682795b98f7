use std::fmt;
use thiserror::Error;

/// Which kind of record a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Team,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityKind::Player => write!(f, "Player"),
            EntityKind::Team => write!(f, "Team"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeagueError {
    #[error("{kind} {name} not found")]
    NotFound { kind: EntityKind, name: String },

    #[error("No players found for team {team}")]
    NoPlayers { team: String },

    #[error("Team {team} has an empty roster")]
    EmptyRoster { team: String },

    #[error("Team {team} needs at least 2 players to credit an assist, found {available}")]
    InsufficientRoster { team: String, available: usize },

    #[error("Player {player} has no minutes played")]
    DivisionByZero { player: String },
}

impl LeagueError {
    pub fn player_not_found(name: impl Into<String>) -> Self {
        LeagueError::NotFound { kind: EntityKind::Player, name: name.into() }
    }

    pub fn team_not_found(name: impl Into<String>) -> Self {
        LeagueError::NotFound { kind: EntityKind::Team, name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LeagueError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
