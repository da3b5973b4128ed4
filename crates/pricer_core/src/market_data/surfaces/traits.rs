//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic volatility surface trait for volatility lookup.
///
/// All implementations must be generic over `T: Float` for AD compatibility.
///
/// # Contract
///
/// - `volatility(strike, expiry)` returns σ(K, T)
/// - `strike_domain()` returns the valid range of strike prices
/// - `expiry_domain()` returns the valid range of expiry times
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, VolGrid};
///
/// let surface = VolGrid::new(&[100.0_f64], &[1.0], &[&[0.2][..]]).unwrap();
/// assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.2);
/// assert_eq!(surface.strike_domain(), (100.0, 100.0));
/// ```
pub trait VolatilitySurface<T: Float> {
    /// Return the volatility for given strike and expiry.
    ///
    /// # Returns
    ///
    /// * `Ok(sigma)` - Volatility at (strike, expiry)
    /// * `Err(MarketDataError::OutOfBounds)` - If outside valid domain
    /// * `Err(MarketDataError::InvalidCoordinate)` - If a coordinate is not finite
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;

    /// Return the valid strike domain as (K_min, K_max).
    fn strike_domain(&self) -> (T, T);

    /// Return the valid expiry domain as (T_min, T_max).
    fn expiry_domain(&self) -> (T, T);
}
