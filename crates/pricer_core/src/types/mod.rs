//! Core identity and error types.
//!
//! This module provides:
//! - `underlying`: Identifier of the asset whose price drives a contract
//! - `error`: The pricing error category every domain error converts into
//!
//! # Re-exports
//!
//! - [`Underlying`] from `underlying`
//! - [`PricingError`] from `error`

pub mod error;
pub mod underlying;

pub use error::PricingError;
pub use underlying::Underlying;
