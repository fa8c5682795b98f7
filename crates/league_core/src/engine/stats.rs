//! Commit of match statistics into the league.

use crate::error::{LeagueError, Result};
use crate::models::MatchResult;
use crate::repository::LeagueRepository;

/// Scorer and assister record indices for every goal in `result`.
///
/// Names are matched exactly. Resolution happens before any write so that a
/// missing player aborts the commit with the league untouched.
pub(crate) fn resolve_goal_credits(
    league: &LeagueRepository,
    result: &MatchResult,
) -> Result<Vec<(usize, usize)>> {
    let index_of = |name: &str| {
        league.player_index_exact(name).ok_or_else(|| LeagueError::player_not_found(name))
    };

    result
        .goals()
        .map(|e| -> Result<(usize, usize)> { Ok((index_of(&e.scorer)?, index_of(&e.assist)?)) })
        .collect()
}

pub(crate) fn apply_goal_credits(league: &mut LeagueRepository, credits: &[(usize, usize)]) {
    for &(scorer, assister) in credits {
        if let Some(p) = league.player_at_mut(scorer) {
            p.stats.goals += 1;
        }
        if let Some(p) = league.player_at_mut(assister) {
            p.stats.assists += 1;
        }
    }
}

/// +1 goal for each scorer and +1 assist for each assister in `result`.
pub fn apply_match_stats(league: &mut LeagueRepository, result: &MatchResult) -> Result<()> {
    let credits = resolve_goal_credits(league, result)?;
    apply_goal_credits(league, &credits);
    Ok(())
}
