use crate::error::{LeagueError, Result};
use crate::repository::LeagueRepository;

/// Mean rating of the roster of `team_name` (exact canonical name).
pub fn team_strength(league: &LeagueRepository, team_name: &str) -> Result<f64> {
    let (total, count) = league
        .players_of_team(team_name)
        .fold((0u64, 0u32), |(total, count), p| (total + p.rating as u64, count + 1));

    if count == 0 {
        return Err(LeagueError::NoPlayers { team: team_name.to_string() });
    }
    Ok(total as f64 / count as f64)
}

/// Names of the roster of `team_name`, in collection order.
pub fn roster_names(league: &LeagueRepository, team_name: &str) -> Vec<String> {
    league.players_of_team(team_name).map(|p| p.name.clone()).collect()
}
