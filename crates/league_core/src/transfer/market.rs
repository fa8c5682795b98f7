use super::valuation::calculate_player_value;
use crate::config::ValuationConfig;
use crate::error::{LeagueError, Result};
use crate::models::{Player, TransferRecord};
use crate::repository::LeagueHandle;
use chrono::Local;
use tracing::{debug, info};

/// Valuation engine: prices players and moves them between teams.
///
/// The only league field it mutates is `Player::team`.
pub struct TransferMarket {
    league: LeagueHandle,
    config: ValuationConfig,
    transfer_history: Vec<TransferRecord>,
}

impl TransferMarket {
    pub fn new(league: LeagueHandle) -> Self {
        Self::with_config(league, ValuationConfig::default())
    }

    pub fn with_config(league: LeagueHandle, config: ValuationConfig) -> Self {
        Self { league, config, transfer_history: Vec::new() }
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    pub fn calculate_player_value(&self, player: &Player) -> i64 {
        calculate_player_value(player, &self.config)
    }

    /// Value of the player named `player_name` (case-insensitive).
    pub fn player_value(&self, player_name: &str) -> Result<i64> {
        let league = self.league.read();
        let player = league.player(player_name)?;
        Ok(self.calculate_player_value(player))
    }

    /// Move a player to another team and record the fee.
    ///
    /// Both names are matched case-insensitively. The fee is the player's
    /// value before the move. Nothing changes if either lookup fails.
    pub fn transfer_player(&mut self, player_name: &str, new_team: &str) -> Result<TransferRecord> {
        let mut league = self.league.write();

        let to_team = league.team(new_team)?.name.clone();
        let player = league
            .find_player_mut(player_name)
            .ok_or_else(|| LeagueError::player_not_found(player_name))?;

        let fee = calculate_player_value(player, &self.config);
        let from_team = std::mem::replace(&mut player.team, to_team.clone());

        let record = TransferRecord {
            player: player.name.clone(),
            from_team,
            to_team,
            fee,
            date: Local::now().date_naive(),
        };
        drop(league);

        debug!("Transfer fee for {} computed as {}", record.player, record.fee);
        info!(
            "Transfer completed: {} from {} to {} for {}",
            record.player, record.from_team, record.to_team, record.fee
        );

        self.transfer_history.push(record.clone());
        Ok(record)
    }

    pub fn transfer_history(&self) -> &[TransferRecord] {
        &self.transfer_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeagueState, PlayerStats, Team};

    fn league() -> LeagueHandle {
        LeagueHandle::new(LeagueState::new(
            vec![Team::new("Red FC", 1, 30), Team::new("Blue FC", 2, 27)],
            vec![
                Player::new("Alice", "Red FC", 26, 80, "ST")
                    .with_stats(PlayerStats::new(10, 5, 1800, 20)),
                Player::new("Bob", "Blue FC", 29, 75, "CM"),
            ],
        ))
    }

    #[test]
    fn test_transfer_moves_player_and_records_fee() {
        let handle = league();
        let mut market = TransferMarket::new(handle.clone());
        let expected_fee = market.player_value("Alice").unwrap();

        let record = market.transfer_player("alice", "blue fc").unwrap();

        assert_eq!(record.player, "Alice");
        assert_eq!(record.from_team, "Red FC");
        assert_eq!(record.to_team, "Blue FC");
        assert_eq!(record.fee, expected_fee);
        assert_eq!(record.fee, 168_500_000);
        assert_eq!(handle.read().find_player("Alice").unwrap().team, "Blue FC");
        assert_eq!(market.transfer_history(), &[record]);
    }

    #[test]
    fn test_transfer_to_unknown_team_changes_nothing() {
        let handle = league();
        let before = handle.snapshot();
        let mut market = TransferMarket::new(handle.clone());

        let err = market.transfer_player("Alice", "Green FC").unwrap_err();
        assert_eq!(err, LeagueError::team_not_found("Green FC"));
        assert_eq!(handle.snapshot(), before);
        assert!(market.transfer_history().is_empty());
    }

    #[test]
    fn test_transfer_of_unknown_player_changes_nothing() {
        let handle = league();
        let before = handle.snapshot();
        let mut market = TransferMarket::new(handle.clone());

        let err = market.transfer_player("Zed", "Blue FC").unwrap_err();
        assert_eq!(err, LeagueError::player_not_found("Zed"));
        assert_eq!(handle.snapshot(), before);
        assert!(market.transfer_history().is_empty());
    }

    #[test]
    fn test_player_value_unknown_player() {
        let market = TransferMarket::new(league());
        assert!(market.player_value("Nobody").unwrap_err().is_not_found());
    }
}
