//! Error types for structured error handling.
//!
//! This module provides [`PricingError`], the coarse error category that
//! contract and market data errors from the upper layers convert into.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Layer-specific errors (`ContractError`, `MarketDataError`) keep their
/// detailed context; this enum is the common denominator a caller can match
/// on without depending on every layer.
///
/// # Variants
/// - `InvalidInput`: Parameters or price inputs rejected by validation
/// - `UnsupportedOperation`: Operation not available for the contract kind
/// - `MissingMarketData`: Market data lookup failed
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative expiry".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative expiry");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not supported by the target
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Market data missing or outside its valid domain
    #[error("Market data error: {0}")]
    MissingMarketData(String),
}
