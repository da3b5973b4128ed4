//! Market data error types.
//!
//! This module provides structured error handling for market data operations
//! including provider lookups and volatility grid queries.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `MissingUnderlying`: Provider has no entry for the underlying
/// - `OutOfBounds`: Query outside the grid
/// - `InvalidCoordinate`: Non-finite query coordinate
/// - `InvalidGrid`: Grid axes or values rejected at construction
/// - `InsufficientData`: Not enough data points for construction
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::MissingUnderlying {
///     underlying: "OTP".to_string(),
///     field: "spot",
/// };
/// assert_eq!(format!("{}", err), "No spot available for underlying OTP");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Underlying not present in the provider.
    #[error("No {field} available for underlying {underlying}")]
    MissingUnderlying {
        /// Name of the underlying that was looked up
        underlying: String,
        /// Which market data item was requested
        field: &'static str,
    },

    /// Query point outside valid domain.
    #[error("Out of bounds: {axis} = {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// Axis of the offending coordinate (strike or expiry)
        axis: &'static str,
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Non-finite query coordinate.
    #[error("Invalid {axis} coordinate: {x}")]
    InvalidCoordinate {
        /// Axis of the offending coordinate
        axis: &'static str,
        /// The rejected value
        x: f64,
    },

    /// Grid rejected at construction.
    #[error("Invalid volatility grid: {message}")]
    InvalidGrid {
        /// Description of the grid defect
        message: String,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::MissingMarketData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = MarketDataError::OutOfBounds {
            axis: "strike",
            x: 5.0,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(
            format!("{}", err),
            "Out of bounds: strike = 5 not in [0, 3]"
        );
    }

    #[test]
    fn test_invalid_coordinate_display() {
        let err = MarketDataError::InvalidCoordinate {
            axis: "expiry",
            x: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Invalid expiry coordinate: NaN");
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = MarketDataError::InsufficientData { got: 0, need: 1 };
        assert_eq!(format!("{}", err), "Insufficient data: got 0, need 1");
    }

    #[test]
    fn test_into_pricing_error() {
        let mkt_err = MarketDataError::MissingUnderlying {
            underlying: "Tesla".to_string(),
            field: "volatility grid",
        };
        let pricing_err: PricingError = mkt_err.into();
        match pricing_err {
            PricingError::MissingMarketData(msg) => {
                assert!(msg.contains("Tesla"));
                assert!(msg.contains("volatility grid"));
            }
            _ => panic!("Expected MissingMarketData variant"),
        }
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = MarketDataError::InvalidGrid {
            message: "unsorted".to_string(),
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
