//! Contract error types.
//!
//! This module provides structured error handling for contract
//! construction and payoff evaluation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Contract-related errors.
///
/// # Variants
/// - `Validation`: A construction parameter is outside its permitted set
/// - `Unsupported`: A variant-specific operation on a kind that lacks it
/// - `PathLength`: Price path length differs from the monitoring count
/// - `PriceShape`: Terminal price supplied where a path is required, or vice versa
///
/// # Examples
/// ```
/// use pricer_models::contracts::ContractError;
///
/// let err = ContractError::Validation {
///     parameter: "updown",
///     message: "must be UP or DOWN, got SIDEWAYS".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid updown: must be UP or DOWN, got SIDEWAYS"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// Construction parameter rejected.
    #[error("Invalid {parameter}: {message}")]
    Validation {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Description of the violation
        message: String,
    },

    /// Operation not available for this contract kind.
    #[error("{contract} contract does not support {operation}")]
    Unsupported {
        /// Contract kind the operation was called on
        contract: String,
        /// The unsupported operation
        operation: &'static str,
    },

    /// Price path length does not match the contract timeline.
    #[error("Price path has {got} observations, contract monitors {expected}")]
    PathLength {
        /// Number of monitoring points of the contract
        expected: usize,
        /// Number of prices supplied
        got: usize,
    },

    /// Wrong kind of price input for the contract family.
    #[error("{contract} contract expects {expected}")]
    PriceShape {
        /// Contract kind that received the input
        contract: String,
        /// Description of the expected input
        expected: &'static str,
    },
}

impl ContractError {
    pub(crate) fn validation(parameter: &'static str, message: impl Into<String>) -> Self {
        ContractError::Validation {
            parameter,
            message: message.into(),
        }
    }
}

impl From<ContractError> for PricingError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Unsupported { .. } => PricingError::UnsupportedOperation(err.to_string()),
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ContractError::validation("option type", "must be CALL or PUT, got FWD");
        assert_eq!(
            format!("{}", err),
            "Invalid option type: must be CALL or PUT, got FWD"
        );
    }

    #[test]
    fn test_unsupported_display() {
        let err = ContractError::Unsupported {
            contract: "FORWARD".to_string(),
            operation: "barrier",
        };
        assert_eq!(
            format!("{}", err),
            "FORWARD contract does not support barrier"
        );
    }

    #[test]
    fn test_path_length_display() {
        let err = ContractError::PathLength {
            expected: 9,
            got: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Price path has 4 observations, contract monitors 9"
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let err = ContractError::Unsupported {
            contract: "ASIAN".to_string(),
            operation: "inout",
        };
        match PricingError::from(err) {
            PricingError::UnsupportedOperation(msg) => assert!(msg.contains("inout")),
            other => panic!("Expected UnsupportedOperation, got {:?}", other),
        }

        let err = ContractError::PriceShape {
            contract: "ASIAN".to_string(),
            expected: "a price path",
        };
        match PricingError::from(err) {
            PricingError::InvalidInput(msg) => assert!(msg.contains("price path")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ContractError::validation("inout", "must be IN or OUT");
        let _: &dyn std::error::Error = &err;
    }
}
