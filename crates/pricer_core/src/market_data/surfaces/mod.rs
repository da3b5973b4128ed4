//! Volatility surface abstractions.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Generic trait for volatility lookup
//! - [`VolGrid`]: Strike x expiry grid with exact node lookup, bilinear
//!   interpolation between nodes and in-place additive bumps

mod grid;
mod traits;

pub use grid::VolGrid;
pub use traits::VolatilitySurface;
