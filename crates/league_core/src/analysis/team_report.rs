use crate::error::{LeagueError, Result};
use crate::models::{Player, Team};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team_name: String,
    pub league_position: u32,
    pub points: u32,
    pub squad_size: usize,
    pub top_scorer: Player,
    pub top_assister: Player,
    pub squad_age_average: f64,
    pub squad_rating_average: f64,
}

/// Summary of `team` over `roster`. Ties for top scorer/assister go to the
/// earliest player in roster order.
pub fn build_team_report<'a>(
    team: &Team,
    roster: impl IntoIterator<Item = &'a Player>,
) -> Result<TeamReport> {
    let roster: Vec<&Player> = roster.into_iter().collect();
    let empty = || LeagueError::EmptyRoster { team: team.name.clone() };

    let top_scorer = first_max_by(&roster, |p| p.stats.goals).ok_or_else(empty)?;
    let top_assister = first_max_by(&roster, |p| p.stats.assists).ok_or_else(empty)?;

    let n = roster.len() as f64;
    let age_total: u64 = roster.iter().map(|p| p.age as u64).sum();
    let rating_total: u64 = roster.iter().map(|p| p.rating as u64).sum();

    Ok(TeamReport {
        team_name: team.name.clone(),
        league_position: team.league_position,
        points: team.points,
        squad_size: roster.len(),
        top_scorer: top_scorer.clone(),
        top_assister: top_assister.clone(),
        squad_age_average: age_total as f64 / n,
        squad_rating_average: rating_total as f64 / n,
    })
}

// Iterator::max_by_key keeps the last maximum; reports want the first.
fn first_max_by<'a>(roster: &[&'a Player], key: impl Fn(&Player) -> u32) -> Option<&'a Player> {
    let mut best: Option<&'a Player> = None;
    for &player in roster {
        match best {
            Some(current) if key(player) <= key(current) => {}
            _ => best = Some(player),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerStats;

    fn p(name: &str, age: u32, rating: u32, goals: u32, assists: u32) -> Player {
        Player::new(name, "Red FC", age, rating, "CM")
            .with_stats(PlayerStats::new(goals, assists, 900, 10))
    }

    #[test]
    fn test_report_fields() {
        let team = Team::new("Red FC", 3, 41);
        let roster = vec![p("A", 24, 80, 2, 6), p("B", 30, 90, 5, 1)];

        let report = build_team_report(&team, &roster).unwrap();

        assert_eq!(report.team_name, "Red FC");
        assert_eq!(report.league_position, 3);
        assert_eq!(report.points, 41);
        assert_eq!(report.squad_size, 2);
        assert_eq!(report.top_scorer.name, "B");
        assert_eq!(report.top_assister.name, "A");
        assert_eq!(report.squad_age_average, 27.0);
        assert_eq!(report.squad_rating_average, 85.0);
    }

    #[test]
    fn test_ties_go_to_first_in_roster_order() {
        let team = Team::new("Red FC", 1, 0);
        let roster = vec![p("First", 25, 70, 3, 0), p("Second", 25, 70, 3, 0), p("Third", 25, 70, 1, 0)];

        let report = build_team_report(&team, &roster).unwrap();
        assert_eq!(report.top_scorer.name, "First");
        // all zero assists
        assert_eq!(report.top_assister.name, "First");
    }

    #[test]
    fn test_empty_roster() {
        let team = Team::new("Ghost FC", 20, 0);
        let err = build_team_report(&team, &Vec::<Player>::new()).unwrap_err();
        assert_eq!(err, LeagueError::EmptyRoster { team: "Ghost FC".to_string() });
    }
}
