//! Market models supplying pricer inputs.
//!
//! This module provides:
//! - [`MarketModel`]: risk-free rate, spot and volatility grid of one
//!   underlying, with additive bumps for sensitivity runs
//! - [`VolModel`]: how the model answers volatility queries

pub mod market;

pub use market::{MarketModel, VolModel};
