//! League Repository
//!
//! Owns the in-memory teams and players and answers name lookups. The three
//! engines share one repository through a [`LeagueHandle`]; each engine
//! operation holds a single guard for its whole duration, so a transfer or a
//! match commit is never observed half-applied.

use crate::error::{LeagueError, Result};
use crate::models::{LeagueState, Player, Team};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct LeagueRepository {
    state: LeagueState,
}

impl LeagueRepository {
    /// Wrap a loaded league. Data-quality problems are logged, not rejected.
    pub fn new(state: LeagueState) -> Self {
        let repo = Self { state };
        repo.report_data_quality();
        repo
    }

    pub fn state(&self) -> &LeagueState {
        &self.state
    }

    pub fn into_state(self) -> LeagueState {
        self.state
    }

    pub fn teams(&self) -> &[Team] {
        &self.state.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    /// First team in collection order whose name matches case-insensitively.
    pub fn find_team(&self, name: &str) -> Option<&Team> {
        self.state.teams.iter().find(|t| t.matches_name(name))
    }

    /// First player in collection order whose name matches case-insensitively.
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.state.players.iter().find(|p| p.matches_name(name))
    }

    pub fn find_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.state.players.iter_mut().find(|p| p.matches_name(name))
    }

    pub fn team(&self, name: &str) -> Result<&Team> {
        self.find_team(name).ok_or_else(|| LeagueError::team_not_found(name))
    }

    pub fn player(&self, name: &str) -> Result<&Player> {
        self.find_player(name).ok_or_else(|| LeagueError::player_not_found(name))
    }

    /// Index of the first player whose name equals `name` exactly.
    pub(crate) fn player_index_exact(&self, name: &str) -> Option<usize> {
        self.state.players.iter().position(|p| p.name == name)
    }

    pub(crate) fn player_at_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.state.players.get_mut(index)
    }

    /// Roster of `team_name` in collection order. Matching is exact on the
    /// canonical team name.
    pub fn players_of_team<'a>(&'a self, team_name: &'a str) -> impl Iterator<Item = &'a Player> + 'a {
        self.state.players.iter().filter(move |p| p.plays_for(team_name))
    }

    pub fn roster_size(&self, team_name: &str) -> usize {
        self.players_of_team(team_name).count()
    }

    pub fn search_players(&self, query: &PlayerQuery) -> Vec<&Player> {
        self.state.players.iter().filter(|p| query.matches(p)).collect()
    }

    /// Player names shared (case-insensitively) by more than one record.
    pub fn duplicate_player_names(&self) -> Vec<String> {
        duplicates(self.state.players.iter().map(|p| p.name.as_str()))
    }

    /// Team names shared (case-insensitively) by more than one record.
    pub fn duplicate_team_names(&self) -> Vec<String> {
        duplicates(self.state.teams.iter().map(|t| t.name.as_str()))
    }

    /// Players whose `team` does not name any team in the league.
    pub fn orphaned_players(&self) -> Vec<&Player> {
        self.state
            .players
            .iter()
            .filter(|p| !self.state.teams.iter().any(|t| t.name == p.team))
            .collect()
    }

    fn report_data_quality(&self) {
        for name in self.duplicate_player_names() {
            warn!("Duplicate player name {:?}: lookups resolve to the first record", name);
        }
        for name in self.duplicate_team_names() {
            warn!("Duplicate team name {:?}: lookups resolve to the first record", name);
        }
        for player in self.orphaned_players() {
            warn!("Player {:?} is registered with unknown team {:?}", player.name, player.team);
        }
    }
}

/// Names occurring more than once under case folding, reported in first-seen
/// spelling and first-seen order.
fn duplicates<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, (usize, &'a str)> = HashMap::new();
    let mut order = Vec::new();
    for name in names {
        let key = name.to_lowercase();
        let entry = seen.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (0, name)
        });
        entry.0 += 1;
    }
    order
        .into_iter()
        .filter_map(|key| match seen.get(&key) {
            Some((count, first)) if *count > 1 => Some(first.to_string()),
            _ => None,
        })
        .collect()
}

/// Player filter. Unset fields match every player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerQuery {
    /// Case-insensitive substring of the player name
    pub name: Option<String>,
    /// Case-insensitive substring of the team name
    pub team: Option<String>,
    /// Case-insensitive exact position
    pub position: Option<String>,
    /// Inclusive lower bound on rating
    pub min_rating: Option<u32>,
}

impl PlayerQuery {
    pub fn matches(&self, player: &Player) -> bool {
        let contains = |haystack: &str, needle: &Option<String>| match needle {
            Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
            None => true,
        };

        contains(&player.name, &self.name)
            && contains(&player.team, &self.team)
            && self
                .position
                .as_ref()
                .map_or(true, |pos| pos.to_lowercase() == player.position.to_lowercase())
            && self.min_rating.map_or(true, |min| player.rating >= min)
    }
}

/// Shared handle to one repository. Cloning the handle shares the data.
#[derive(Debug, Clone, Default)]
pub struct LeagueHandle {
    inner: Arc<RwLock<LeagueRepository>>,
}

impl LeagueHandle {
    pub fn new(state: LeagueState) -> Self {
        Self::from_repository(LeagueRepository::new(state))
    }

    pub fn from_repository(repo: LeagueRepository) -> Self {
        Self { inner: Arc::new(RwLock::new(repo)) }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, LeagueRepository> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, LeagueRepository> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current league document, e.g. for saving.
    pub fn snapshot(&self) -> LeagueState {
        self.read().state().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_league() -> LeagueState {
        LeagueState::new(
            vec![Team::new("Red FC", 1, 30), Team::new("Blue FC", 2, 27)],
            vec![
                Player::new("Alice", "Red FC", 24, 80, "ST"),
                Player::new("Bob", "Blue FC", 29, 75, "CM"),
                Player::new("Cara", "Red FC", 21, 68, "GK"),
            ],
        )
    }

    #[test]
    fn test_find_is_case_insensitive_exact() {
        let repo = LeagueRepository::new(sample_league());
        assert_eq!(repo.find_team("red fc").map(|t| t.name.as_str()), Some("Red FC"));
        assert_eq!(repo.find_player("ALICE").map(|p| p.name.as_str()), Some("Alice"));
        assert!(repo.find_player("Ali").is_none());
        assert!(repo.team("Green FC").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_names_resolve_to_first_record() {
        let mut state = sample_league();
        state.players.push(Player::new("alice", "Blue FC", 30, 60, "DF"));
        let repo = LeagueRepository::new(state);

        assert_eq!(repo.duplicate_player_names(), vec!["Alice".to_string()]);
        assert_eq!(repo.find_player("alice").unwrap().team, "Red FC");
        assert!(repo.duplicate_team_names().is_empty());
    }

    #[test]
    fn test_roster_is_derived_in_collection_order() {
        let repo = LeagueRepository::new(sample_league());
        let names: Vec<_> = repo.players_of_team("Red FC").map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Cara"]);
        assert_eq!(repo.roster_size("Blue FC"), 1);
        assert_eq!(repo.roster_size("red fc"), 0);
    }

    #[test]
    fn test_orphaned_players() {
        let mut state = sample_league();
        state.players.push(Player::new("Dan", "Ghost United", 22, 60, "LB"));
        let repo = LeagueRepository::new(state);
        let orphans: Vec<_> = repo.orphaned_players().iter().map(|p| p.name.clone()).collect();
        assert_eq!(orphans, vec!["Dan".to_string()]);
    }

    #[test]
    fn test_search_players() {
        let repo = LeagueRepository::new(sample_league());

        let all = repo.search_players(&PlayerQuery::default());
        assert_eq!(all.len(), 3);

        let query = PlayerQuery { team: Some("red".to_string()), ..Default::default() };
        assert_eq!(repo.search_players(&query).len(), 2);

        let query = PlayerQuery {
            position: Some("st".to_string()),
            min_rating: Some(80),
            ..Default::default()
        };
        let hits = repo.search_players(&query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice");

        let query = PlayerQuery { min_rating: Some(81), ..Default::default() };
        assert!(repo.search_players(&query).is_empty());
    }

    #[test]
    fn test_handle_clones_share_state() {
        let handle = LeagueHandle::new(sample_league());
        let other = handle.clone();
        handle.write().find_player_mut("bob").unwrap().stats.goals = 4;
        assert_eq!(other.read().find_player("Bob").unwrap().stats.goals, 4);
        assert_eq!(other.snapshot().players[1].stats.goals, 4);
    }
}
