//! # league_core - Football League Simulation and Valuation Engine
//!
//! Models a league's teams and players and derives three things from it:
//! - market valuations and transfers ([`TransferMarket`])
//! - simulated fixtures with goal-by-goal events ([`MatchEngine`])
//! - player efficiency and team reports ([`Analytics`])
//!
//! All three engines share one [`LeagueHandle`], so a transfer or a match
//! commit made through one engine is immediately visible to the others.
//!
//! ```rust
//! use league_core::{Analytics, LeagueHandle, LeagueState, MatchEngine, Player, Team};
//!
//! let league = LeagueHandle::new(LeagueState::new(
//!     vec![Team::new("Red FC", 1, 0), Team::new("Blue FC", 2, 0)],
//!     vec![
//!         Player::new("A", "Red FC", 25, 80, "ST"),
//!         Player::new("B", "Red FC", 25, 90, "CM"),
//!         Player::new("C", "Blue FC", 25, 70, "ST"),
//!         Player::new("D", "Blue FC", 25, 72, "CM"),
//!     ],
//! ));
//!
//! let mut engine = MatchEngine::with_seed(league.clone(), 42);
//! let result = engine.simulate_match("Red FC", "Blue FC").unwrap();
//! assert_eq!(result.events.len() as u32, result.home_goals + result.away_goals);
//!
//! let report = Analytics::new(league).generate_team_report("Red FC").unwrap();
//! assert_eq!(report.squad_rating_average, 85.0);
//! ```

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
pub mod save;
pub mod transfer;

pub use analysis::{Analytics, PlayerEfficiency, TeamReport};
pub use config::{ConfigError, LeagueConfig, SimulationConfig, ValuationConfig};
pub use engine::MatchEngine;
pub use error::{EntityKind, LeagueError, Result};
pub use models::{
    EventType, LeagueState, MatchEvent, MatchResult, Player, PlayerStats, Team, TransferRecord,
};
pub use repository::{LeagueHandle, LeagueRepository, PlayerQuery};
pub use save::{load_league, save_backup, save_league, SaveError};
pub use transfer::TransferMarket;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
