//! # pricer_core: Foundation Layer for the Contract Payoff Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Underlying identifiers (`types::Underlying`)
//! - Error categories shared by all layers (`types::error`)
//! - Market data collaborators: the provider trait, volatility grids and
//!   the volatility surface trait (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::{MarketDataProvider, StaticMarketData, VolGrid};
//! use pricer_core::market_data::surfaces::VolatilitySurface;
//! use pricer_core::types::Underlying;
//!
//! let grid = VolGrid::new(
//!     &[90.0_f64, 100.0, 110.0],
//!     &[0.5, 1.0],
//!     &[&[0.22, 0.20, 0.21][..], &[0.23, 0.21, 0.22][..]],
//! )
//! .unwrap();
//!
//! let apple = Underlying::new("AAPL");
//! let market = StaticMarketData::new(0.03)
//!     .with_spot(apple.clone(), 100.0)
//!     .with_vol_grid(apple.clone(), grid);
//!
//! assert_eq!(market.spot(&apple).unwrap(), 100.0);
//! let surface = market.vol_grid(&apple).unwrap();
//! assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.21);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Underlying`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
