//! Market data provider collaborator.
//!
//! A market model is initialised from a [`MarketDataProvider`]: one shared
//! risk-free rate plus per-underlying spot prices and volatility grids.
//! [`StaticMarketData`] is the in-memory implementation used by tests and
//! by configuration-driven tools.

use std::collections::HashMap;

use num_traits::Float;

use super::error::MarketDataError;
use super::surfaces::VolGrid;
use crate::types::Underlying;

/// Source of the market inputs a market model is built from.
///
/// Implementations hand out owned copies so the receiving model can bump
/// its values without affecting the provider.
pub trait MarketDataProvider<T: Float> {
    /// Return the continuously compounded risk-free rate.
    fn risk_free_rate(&self) -> T;

    /// Return the spot price of `underlying`.
    fn spot(&self, underlying: &Underlying) -> Result<T, MarketDataError>;

    /// Return an owned copy of the volatility grid of `underlying`.
    fn vol_grid(&self, underlying: &Underlying) -> Result<VolGrid<T>, MarketDataError>;
}

/// In-memory market data keyed by underlying.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{MarketDataError, MarketDataProvider, StaticMarketData};
/// use pricer_core::types::Underlying;
///
/// let market = StaticMarketData::new(0.05_f64).with_spot("OTP", 1.0);
///
/// assert_eq!(market.risk_free_rate(), 0.05);
/// assert_eq!(market.spot(&Underlying::new("OTP")).unwrap(), 1.0);
/// assert!(matches!(
///     market.vol_grid(&Underlying::new("OTP")),
///     Err(MarketDataError::MissingUnderlying { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct StaticMarketData<T: Float> {
    risk_free_rate: T,
    spots: HashMap<Underlying, T>,
    vol_grids: HashMap<Underlying, VolGrid<T>>,
}

impl<T: Float> StaticMarketData<T> {
    /// Create an empty market with the given risk-free rate.
    pub fn new(risk_free_rate: T) -> Self {
        Self {
            risk_free_rate,
            spots: HashMap::new(),
            vol_grids: HashMap::new(),
        }
    }

    /// Set the spot price of `underlying`, replacing any previous value.
    pub fn with_spot(mut self, underlying: impl Into<Underlying>, spot: T) -> Self {
        self.spots.insert(underlying.into(), spot);
        self
    }

    /// Set the volatility grid of `underlying`, replacing any previous grid.
    pub fn with_vol_grid(mut self, underlying: impl Into<Underlying>, grid: VolGrid<T>) -> Self {
        self.vol_grids.insert(underlying.into(), grid);
        self
    }
}

impl<T: Float> MarketDataProvider<T> for StaticMarketData<T> {
    #[inline]
    fn risk_free_rate(&self) -> T {
        self.risk_free_rate
    }

    fn spot(&self, underlying: &Underlying) -> Result<T, MarketDataError> {
        self.spots
            .get(underlying)
            .copied()
            .ok_or_else(|| MarketDataError::MissingUnderlying {
                underlying: underlying.to_string(),
                field: "spot",
            })
    }

    fn vol_grid(&self, underlying: &Underlying) -> Result<VolGrid<T>, MarketDataError> {
        self.vol_grids
            .get(underlying)
            .cloned()
            .ok_or_else(|| MarketDataError::MissingUnderlying {
                underlying: underlying.to_string(),
                field: "volatility grid",
            })
    }
}
