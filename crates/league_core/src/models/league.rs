use super::{Player, Team};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The whole league document: every team and every player, in file order.
///
/// Collection order is significant. Name lookups return the first match and
/// team report tie-breaks follow roster order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueState {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LeagueState {
    pub fn new(teams: Vec<Team>, players: Vec<Player>) -> Self {
        Self { teams, players, extra: Map::new() }
    }
}
