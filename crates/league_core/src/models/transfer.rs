use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ledger entry for one completed transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub player: String,
    pub from_team: String,
    pub to_team: String,
    /// Market value at the moment of the move
    pub fee: i64,
    pub date: NaiveDate,
}
