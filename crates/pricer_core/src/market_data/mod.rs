//! Market data collaborators consumed by the market model.
//!
//! This module provides the inputs a market model reads at construction:
//! a risk-free rate, spot prices per underlying, and a volatility grid per
//! underlying.
//!
//! # Architecture
//!
//! All structures are generic over `T: Float` (f64, f32).
//!
//! # Components
//!
//! - [`surfaces`]: Volatility surface trait and the grid implementation ([`VolGrid`])
//! - [`provider`]: Market data provider trait and the in-memory [`StaticMarketData`]
//! - [`error`]: Market data error types ([`MarketDataError`])
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::surfaces::{VolatilitySurface, VolGrid};
//!
//! let grid = VolGrid::new(
//!     &[1.0_f64, 2.0],
//!     &[1.0, 2.0],
//!     &[&[0.20, 0.30][..], &[0.40, 0.50][..]],
//! )
//! .unwrap();
//!
//! assert_eq!(grid.volatility(2.0, 1.0).unwrap(), 0.30);
//! let mid = grid.volatility(1.5, 1.5).unwrap();
//! assert!((mid - 0.35).abs() < 1e-12);
//! ```

pub mod error;
pub mod provider;
pub mod surfaces;

pub use error::MarketDataError;
pub use provider::{MarketDataProvider, StaticMarketData};
pub use surfaces::{VolGrid, VolatilitySurface};
