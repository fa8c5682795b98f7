use super::event_generator::{generate_match_events, SideGoals};
use super::stats::{apply_goal_credits, apply_match_stats, resolve_goal_credits};
use super::strength::{roster_names, team_strength};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::models::{MatchEvent, MatchResult};
use crate::repository::LeagueHandle;
use chrono::Local;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use tracing::{debug, info};

/// Match simulation engine.
///
/// Results are random by design. Runs are reproducible only when the engine
/// is built from a fixed seed or a caller-supplied generator.
pub struct MatchEngine<R: Rng = ChaCha8Rng> {
    league: LeagueHandle,
    config: SimulationConfig,
    rng: R,
    match_history: Vec<MatchResult>,
}

impl MatchEngine<ChaCha8Rng> {
    /// Engine seeded from OS entropy.
    pub fn new(league: LeagueHandle) -> Self {
        Self::with_rng(league, ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(league: LeagueHandle, seed: u64) -> Self {
        Self::with_rng(league, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MatchEngine<R> {
    pub fn with_rng(league: LeagueHandle, rng: R) -> Self {
        Self { league, config: SimulationConfig::default(), rng, match_history: Vec::new() }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Mean roster rating. A name matching a team case-insensitively is
    /// resolved to that team's canonical name first.
    pub fn calculate_team_strength(&self, team_name: &str) -> Result<f64> {
        let league = self.league.read();
        let canonical = league.find_team(team_name).map_or(team_name, |t| t.name.as_str());
        team_strength(&league, canonical)
    }

    /// Simulate one fixture and commit it.
    ///
    /// On success the result is appended to the match history and every
    /// scorer/assister is credited. On failure neither the league nor the
    /// history changes.
    pub fn simulate_match(&mut self, home_team: &str, away_team: &str) -> Result<MatchResult> {
        let mut league = self.league.write();

        let home = league.team(home_team)?.name.clone();
        let away = league.team(away_team)?.name.clone();

        let home_strength = team_strength(&league, &home)? * self.config.home_advantage;
        let away_strength = team_strength(&league, &away)?;

        let home_goals = draw_goals(&mut self.rng, home_strength, &self.config);
        let away_goals = draw_goals(&mut self.rng, away_strength, &self.config);
        debug!(
            "{} ({:.2}) vs {} ({:.2}): drew {}-{}",
            home, home_strength, away, away_strength, home_goals, away_goals
        );

        let home_roster = roster_names(&league, &home);
        let away_roster = roster_names(&league, &away);
        let events = generate_match_events(
            &mut self.rng,
            SideGoals::new(&home, &home_roster, home_goals),
            SideGoals::new(&away, &away_roster, away_goals),
            self.config.match_minutes,
        )?;

        let result = MatchResult {
            home_team: home,
            away_team: away,
            home_goals,
            away_goals,
            events,
            date: Local::now().date_naive(),
        };

        let credits = resolve_goal_credits(&league, &result)?;
        self.match_history.push(result.clone());
        apply_goal_credits(&mut league, &credits);

        info!("Match committed: {}", result.scoreline());
        Ok(result)
    }

    /// Goal events for the given scoreline using the current rosters.
    ///
    /// Team names are resolved case-insensitively. Nothing is committed.
    pub fn generate_match_events(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_goals: u32,
        away_goals: u32,
    ) -> Result<Vec<MatchEvent>> {
        let league = self.league.read();
        let home = league.team(home_team)?.name.clone();
        let away = league.team(away_team)?.name.clone();
        let home_roster = roster_names(&league, &home);
        let away_roster = roster_names(&league, &away);
        drop(league);

        generate_match_events(
            &mut self.rng,
            SideGoals::new(&home, &home_roster, home_goals),
            SideGoals::new(&away, &away_roster, away_goals),
            self.config.match_minutes,
        )
    }

    /// Credit the goals and assists of `result` to the league.
    pub fn update_stats(&self, result: &MatchResult) -> Result<()> {
        let mut league = self.league.write();
        apply_match_stats(&mut league, result)
    }

    pub fn match_history(&self) -> &[MatchResult] {
        &self.match_history
    }

    pub fn league(&self) -> &LeagueHandle {
        &self.league
    }
}

/// Gaussian goal draw: floor(N(strength / strength_per_goal, std_dev)),
/// clamped at zero.
fn draw_goals<R: Rng>(rng: &mut R, strength: f64, config: &SimulationConfig) -> u32 {
    let mean = strength / config.strength_per_goal;
    let z: f64 = rng.sample(StandardNormal);
    let sample = mean + config.goal_std_dev * z;
    sample.floor().max(0.0) as u32
}
