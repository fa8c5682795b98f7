//! Valuation engine: market value formula and the transfer ledger.

pub mod market;
pub mod valuation;

pub use market::TransferMarket;
pub use valuation::{age_factor, calculate_player_value, performance_value};
