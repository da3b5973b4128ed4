//! Single-underlying market model.
//!
//! A [`MarketModel`] snapshots the risk-free rate, spot price and
//! volatility grid of one underlying from a [`MarketDataProvider`]. The
//! snapshot is owned: the model is mutated only through its additive bump
//! operations and never writes back to the provider.
//!
//! ## Volatility models
//!
//! - [`VolModel::Flat`]: volatility at exactly the requested
//!   `(strike, expiry)` on the grid.
//! - [`VolModel::BlackScholes`]: volatility at `(spot, 1.0)` regardless of
//!   the requested coordinate. A Black-Scholes pricer consumes a single
//!   number, so the model pins it to the at-the-money one-year point.
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::{StaticMarketData, VolGrid};
//! use pricer_models::models::MarketModel;
//!
//! let grid = VolGrid::new(
//!     &[0.5_f64, 1.0, 1.5],
//!     &[1.0, 2.0],
//!     &[&[0.30, 0.25, 0.28][..], &[0.32, 0.27, 0.29][..]],
//! )
//! .unwrap();
//! let market = StaticMarketData::new(0.05).with_spot("OTP", 1.0).with_vol_grid("OTP", grid);
//!
//! let flat = MarketModel::flat_vol(&market, "OTP").unwrap();
//! assert_eq!(flat.volatility(1.5, 2.0).unwrap(), 0.29);
//!
//! let mut bs = MarketModel::black_scholes(&market, "OTP").unwrap();
//! assert_eq!(bs.volatility(1.5, 2.0).unwrap(), 0.25);
//!
//! bs.bump_spot(0.5);
//! assert_eq!(bs.volatility(1.5, 2.0).unwrap(), 0.28);
//! ```

use std::fmt;

use num_traits::Float;
use pricer_core::market_data::{MarketDataError, MarketDataProvider, VolGrid, VolatilitySurface};
use pricer_core::types::Underlying;
use tracing::debug;

/// Volatility lookup rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VolModel {
    /// Grid lookup at the requested strike and expiry
    #[default]
    Flat,
    /// Grid lookup at spot and one year, ignoring the requested coordinate
    BlackScholes,
}

impl fmt::Display for VolModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolModel::Flat => f.write_str("flat"),
            VolModel::BlackScholes => f.write_str("black_scholes"),
        }
    }
}

/// Market snapshot for one underlying.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
#[derive(Debug, Clone, PartialEq)]
pub struct MarketModel<T: Float> {
    underlying: Underlying,
    risk_free_rate: T,
    spot: T,
    vol_grid: VolGrid<T>,
    vol_model: VolModel,
}

impl<T: Float> MarketModel<T> {
    /// Snapshots the market data of `underlying` from `provider`.
    ///
    /// # Errors
    /// `MarketDataError::MissingUnderlying` if the provider has no spot or no
    /// volatility grid for the underlying.
    pub fn new<P>(
        provider: &P,
        underlying: impl Into<Underlying>,
        vol_model: VolModel,
    ) -> Result<Self, MarketDataError>
    where
        P: MarketDataProvider<T> + ?Sized,
    {
        let underlying = underlying.into();
        let risk_free_rate = provider.risk_free_rate();
        let spot = provider.spot(&underlying)?;
        let vol_grid = provider.vol_grid(&underlying)?;

        debug!(
            underlying = %underlying,
            vol_model = %vol_model,
            rate = risk_free_rate.to_f64(),
            spot = spot.to_f64(),
            "market model initialised"
        );

        Ok(Self {
            underlying,
            risk_free_rate,
            spot,
            vol_grid,
            vol_model,
        })
    }

    /// Market model answering volatility at the requested coordinate.
    pub fn flat_vol<P>(provider: &P, underlying: impl Into<Underlying>) -> Result<Self, MarketDataError>
    where
        P: MarketDataProvider<T> + ?Sized,
    {
        Self::new(provider, underlying, VolModel::Flat)
    }

    /// Market model answering volatility at `(spot, 1.0)`.
    pub fn black_scholes<P>(
        provider: &P,
        underlying: impl Into<Underlying>,
    ) -> Result<Self, MarketDataError>
    where
        P: MarketDataProvider<T> + ?Sized,
    {
        Self::new(provider, underlying, VolModel::BlackScholes)
    }

    /// Returns the underlying.
    #[inline]
    pub fn underlying(&self) -> &Underlying {
        &self.underlying
    }

    /// Returns the continuously compounded risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> T {
        self.risk_free_rate
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the owned volatility grid.
    #[inline]
    pub fn vol_grid(&self) -> &VolGrid<T> {
        &self.vol_grid
    }

    /// Returns the volatility lookup rule.
    #[inline]
    pub fn vol_model(&self) -> VolModel {
        self.vol_model
    }

    /// Adds `delta` to the risk-free rate.
    pub fn bump_rate(&mut self, delta: T) {
        self.risk_free_rate = self.risk_free_rate + delta;
        debug!(
            underlying = %self.underlying,
            delta = delta.to_f64(),
            rate = self.risk_free_rate.to_f64(),
            "bumped risk-free rate"
        );
    }

    /// Adds `delta` to the spot price.
    pub fn bump_spot(&mut self, delta: T) {
        self.spot = self.spot + delta;
        debug!(
            underlying = %self.underlying,
            delta = delta.to_f64(),
            spot = self.spot.to_f64(),
            "bumped spot"
        );
    }

    /// Adds `delta` to every node of the volatility grid.
    pub fn bump_vol_grid(&mut self, delta: T) {
        self.vol_grid.bump(delta);
        debug!(
            underlying = %self.underlying,
            delta = delta.to_f64(),
            "bumped volatility grid"
        );
    }

    /// Discount factor `exp(−r·tenor)`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::{StaticMarketData, VolGrid};
    /// use pricer_models::models::MarketModel;
    ///
    /// let grid = VolGrid::new(&[1.0_f64], &[1.0], &[&[0.2][..]]).unwrap();
    /// let market = StaticMarketData::new(0.05).with_spot("OTP", 1.0).with_vol_grid("OTP", grid);
    /// let model = MarketModel::flat_vol(&market, "OTP").unwrap();
    ///
    /// assert!((model.discount_factor(2.0) - (-0.1_f64).exp()).abs() < 1e-15);
    /// assert_eq!(model.discount_factor(0.0), 1.0);
    /// ```
    #[inline]
    pub fn discount_factor(&self, tenor: T) -> T {
        (-self.risk_free_rate * tenor).exp()
    }

    /// Volatility for a contract with the given strike and expiry.
    ///
    /// [`VolModel::BlackScholes`] ignores both arguments and queries the
    /// grid at `(spot, 1.0)`.
    ///
    /// # Errors
    /// `MarketDataError::OutOfBounds` or `InvalidCoordinate` when the
    /// queried point lies off the grid.
    pub fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        let (k, t) = self.query_point(strike, expiry);
        self.vol_grid.volatility(k, t)
    }

    /// Batch volatility lookup, one result per `(strike, expiry)` pair.
    pub fn volatilities(&self, coordinates: &[(T, T)]) -> Result<Vec<T>, MarketDataError> {
        let points: Vec<(T, T)> = coordinates
            .iter()
            .map(|&(strike, expiry)| self.query_point(strike, expiry))
            .collect();
        self.vol_grid.vols(&points)
    }

    #[inline]
    fn query_point(&self, strike: T, expiry: T) -> (T, T) {
        match self.vol_model {
            VolModel::Flat => (strike, expiry),
            VolModel::BlackScholes => (self.spot, T::one()),
        }
    }
}

impl<T: Float> VolatilitySurface<T> for MarketModel<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        MarketModel::volatility(self, strike, expiry)
    }

    fn strike_domain(&self) -> (T, T) {
        self.vol_grid.strike_domain()
    }

    fn expiry_domain(&self) -> (T, T) {
        self.vol_grid.expiry_domain()
    }
}
