//! League file persistence (JSON document with `teams` and `players`).

pub mod error;
pub mod manager;

pub use error::SaveError;
pub use manager::{backup_path, load_league, parse_league, save_backup, save_league, to_pretty_json};
