pub mod events;
pub mod league;
pub mod match_result;
pub mod player;
pub mod team;
pub mod transfer;

pub use events::{EventType, MatchEvent};
pub use league::LeagueState;
pub use match_result::MatchResult;
pub use player::{Player, PlayerStats};
pub use team::Team;
pub use transfer::TransferRecord;
