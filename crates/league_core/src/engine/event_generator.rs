//! Goal event synthesis
//!
//! Each goal gets a uniform minute, a uniform scorer from the scoring side's
//! roster, and a uniform assister drawn from the same roster with the scorer
//! removed. Home goals are drawn before away goals and the combined list is
//! stably sorted by minute.
//!
//! Candidates are distinct player names: records sharing a name are credited
//! to one player, so they count once.

use crate::error::{LeagueError, Result};
use crate::models::MatchEvent;
use rand::Rng;

/// One side of a fixture as seen by the event generator.
#[derive(Debug, Clone, Copy)]
pub struct SideGoals<'a> {
    pub team: &'a str,
    pub roster: &'a [String],
    pub goals: u32,
}

impl<'a> SideGoals<'a> {
    pub fn new(team: &'a str, roster: &'a [String], goals: u32) -> Self {
        Self { team, roster, goals }
    }

    /// Roster names with duplicates removed, in first-seen order.
    fn candidates(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = Vec::with_capacity(self.roster.len());
        for name in self.roster {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
        names
    }

    fn check_roster(&self, candidates: &[&str]) -> Result<()> {
        if self.goals > 0 && candidates.len() < 2 {
            return Err(LeagueError::InsufficientRoster {
                team: self.team.to_string(),
                available: candidates.len(),
            });
        }
        Ok(())
    }
}

/// Number of events a scoreline produces.
pub fn expected_event_count(home_goals: u32, away_goals: u32) -> u32 {
    home_goals.saturating_add(away_goals)
}

/// Build the goal events for both sides, ordered by minute.
///
/// Both rosters are checked before any random draw, so a failure leaves the
/// random source untouched.
pub fn generate_match_events<R: Rng>(
    rng: &mut R,
    home: SideGoals<'_>,
    away: SideGoals<'_>,
    match_minutes: u8,
) -> Result<Vec<MatchEvent>> {
    let home_names = home.candidates();
    let away_names = away.candidates();
    home.check_roster(&home_names)?;
    away.check_roster(&away_names)?;

    let mut events = Vec::with_capacity(expected_event_count(home.goals, away.goals) as usize);
    for (side, names) in [(home, &home_names), (away, &away_names)] {
        for _ in 0..side.goals {
            events.push(draw_goal(rng, side.team, names, match_minutes));
        }
    }

    // stable: equal minutes keep generation order
    events.sort_by_key(|e| e.minute);
    Ok(events)
}

fn draw_goal<R: Rng>(rng: &mut R, team: &str, names: &[&str], match_minutes: u8) -> MatchEvent {
    let minute = rng.gen_range(1..=match_minutes);
    let n = names.len();
    let scorer = rng.gen_range(0..n);
    let mut assist = rng.gen_range(0..n - 1);
    if assist >= scorer {
        assist += 1;
    }
    MatchEvent::goal(minute, team, names[scorer], names[assist])
}
