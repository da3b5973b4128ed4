//! CLI error types

use pricer_core::market_data::MarketDataError;
use pricer_models::contracts::ContractError;
use thiserror::Error;

/// Errors surfaced by the `payoff` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
