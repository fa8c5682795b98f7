//! # Analytics Engine
//!
//! Derived player and team metrics. Read-only: every operation takes one
//! read guard on the league and never writes.

pub mod efficiency;
pub mod team_report;

pub use efficiency::{player_efficiency, PlayerEfficiency};
pub use team_report::{build_team_report, TeamReport};

use crate::error::Result;
use crate::repository::LeagueHandle;

pub struct Analytics {
    league: LeagueHandle,
}

impl Analytics {
    pub fn new(league: LeagueHandle) -> Self {
        Self { league }
    }

    /// Efficiency metrics for the player named `player_name` (case-insensitive).
    pub fn calculate_player_efficiency(&self, player_name: &str) -> Result<PlayerEfficiency> {
        let league = self.league.read();
        player_efficiency(league.player(player_name)?)
    }

    /// Report for the team named `team_name` (case-insensitive).
    pub fn generate_team_report(&self, team_name: &str) -> Result<TeamReport> {
        let league = self.league.read();
        let team = league.team(team_name)?;
        build_team_report(team, league.players_of_team(&team.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeagueError;
    use crate::models::{LeagueState, Player, PlayerStats, Team};

    fn handle() -> LeagueHandle {
        LeagueHandle::new(LeagueState::new(
            vec![Team::new("Red FC", 1, 30), Team::new("Empty FC", 2, 0)],
            vec![
                Player::new("A", "Red FC", 24, 80, "ST").with_stats(PlayerStats::new(2, 1, 900, 4)),
                Player::new("B", "Red FC", 28, 90, "ST").with_stats(PlayerStats::new(5, 0, 0, 8)),
            ],
        ))
    }

    #[test]
    fn test_team_report_by_name() {
        let analytics = Analytics::new(handle());
        let report = analytics.generate_team_report("red fc").unwrap();
        assert_eq!(report.top_scorer.name, "B");
        assert_eq!(report.squad_rating_average, 85.0);
    }

    #[test]
    fn test_team_report_errors() {
        let analytics = Analytics::new(handle());
        assert!(analytics.generate_team_report("Green FC").unwrap_err().is_not_found());
        assert_eq!(
            analytics.generate_team_report("Empty FC").unwrap_err(),
            LeagueError::EmptyRoster { team: "Empty FC".to_string() }
        );
    }

    #[test]
    fn test_efficiency_by_name() {
        let analytics = Analytics::new(handle());
        let eff = analytics.calculate_player_efficiency("a").unwrap();
        assert!((eff.goals_per_90 - 0.2).abs() < 1e-12);
        assert!((eff.shots_conversion - 50.0).abs() < 1e-12);

        assert!(matches!(
            analytics.calculate_player_efficiency("B"),
            Err(LeagueError::DivisionByZero { .. })
        ));
        assert!(analytics.calculate_player_efficiency("Nobody").unwrap_err().is_not_found());
    }

    #[test]
    fn test_analytics_never_mutates() {
        let league = handle();
        let before = league.snapshot();
        let analytics = Analytics::new(league.clone());
        let _ = analytics.generate_team_report("Red FC");
        let _ = analytics.calculate_player_efficiency("A");
        assert_eq!(league.snapshot(), before);
    }
}
