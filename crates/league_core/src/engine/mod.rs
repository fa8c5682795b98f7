//! # Match Simulation Engine
//!
//! Fixture simulation over the shared league:
//!
//! 1. resolve both team names (case-insensitive)
//! 2. strength = mean roster rating, home side x 1.10
//! 3. goals = max(0, floor(N(strength / 20, 1.0)))
//! 4. one goal event per goal with a distinct scorer and assister
//! 5. append to history, credit goals and assists
//!
//! This is the only module that mutates player statistics.

pub mod event_generator;
pub mod match_engine;
pub mod stats;
pub mod strength;

pub use event_generator::{expected_event_count, generate_match_events, SideGoals};
pub use match_engine::MatchEngine;
pub use stats::apply_match_stats;
pub use strength::{roster_names, team_strength};
