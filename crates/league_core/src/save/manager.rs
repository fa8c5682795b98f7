use super::error::SaveError;
use crate::models::LeagueState;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fs::{rename, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read a league document.
///
/// The root must be a JSON object with `teams` and `players` members.
pub fn load_league(path: &Path) -> Result<LeagueState, SaveError> {
    if !path.exists() {
        return Err(SaveError::FileNotFound { path: path.display().to_string() });
    }

    let text = std::fs::read_to_string(path)?;
    let state = parse_league(&text)?;

    info!(
        "Loaded {} teams and {} players from {:?}",
        state.teams.len(),
        state.players.len(),
        path
    );
    Ok(state)
}

pub fn parse_league(text: &str) -> Result<LeagueState, SaveError> {
    let value: Value = serde_json::from_str(text)?;

    let root = value
        .as_object()
        .ok_or_else(|| SaveError::InvalidFormat("root must be a dictionary".to_string()))?;
    if !root.contains_key("teams") || !root.contains_key("players") {
        return Err(SaveError::InvalidFormat("missing teams or players".to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

/// League document as 4-space indented JSON.
pub fn to_pretty_json(state: &LeagueState) -> Result<Vec<u8>, SaveError> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    state.serialize(&mut ser)?;
    Ok(out)
}

/// Write a league document atomically (temp file, fsync, rename).
pub fn save_league(path: &Path, state: &LeagueState) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let data = to_pretty_json(state)?;
    let temp_path = path.with_extension("tmp");

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&data)?;
        file.flush()?;
        file.sync_all()?;
    }

    rename(&temp_path, path)?;

    debug!("Saved {} bytes to {:?}", data.len(), path);
    Ok(())
}

/// `<stem>_backup.json` next to `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("data");
    path.with_file_name(format!("{}_backup.json", stem))
}

/// Write `state` to the backup location for `path` and return that location.
pub fn save_backup(path: &Path, state: &LeagueState) -> Result<PathBuf, SaveError> {
    let backup = backup_path(path);
    save_league(&backup, state)?;
    info!("League backed up to {:?}", backup);
    Ok(backup)
}
