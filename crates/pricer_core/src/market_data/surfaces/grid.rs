//! Grid-based volatility surface.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Volatility grid indexed by strike and expiry.
///
/// Stores a 2D grid of volatilities and answers lookups:
/// - exactly at grid nodes (the stored value is returned unchanged)
/// - between nodes by bilinear interpolation
/// - outside the grid with [`MarketDataError::OutOfBounds`]
///
/// # Grid Layout
///
/// The grid is organised as `values[expiry_idx][strike_idx]`:
/// - Rows correspond to expiry slices
/// - Columns correspond to strikes within each slice
///
/// Axes need at least one point each; a single-point axis only answers
/// queries at exactly that coordinate.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, VolGrid};
///
/// let strikes = [90.0_f64, 100.0, 110.0];
/// let expiries = [0.5, 1.0];
/// let vols = [
///     &[0.22, 0.20, 0.21][..], // 0.5Y expiry
///     &[0.23, 0.21, 0.22][..], // 1.0Y expiry
/// ];
///
/// let mut grid = VolGrid::new(&strikes, &expiries, &vols).unwrap();
/// assert_eq!(grid.volatility(110.0, 0.5).unwrap(), 0.21);
///
/// grid.bump(0.01);
/// assert!((grid.volatility(110.0, 0.5).unwrap() - 0.22).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VolGrid<T: Float> {
    /// Strictly increasing strike axis
    strikes: Vec<T>,
    /// Strictly increasing expiry axis
    expiries: Vec<T>,
    /// Volatility grid: `values[expiry_idx][strike_idx]`
    values: Vec<Vec<T>>,
}

impl<T: Float> VolGrid<T> {
    /// Construct a volatility grid.
    ///
    /// # Arguments
    ///
    /// * `strikes` - Strictly increasing, finite strike axis (at least 1 point)
    /// * `expiries` - Strictly increasing, finite expiry axis (at least 1 point)
    /// * `values` - Volatility grid: `values[expiry_idx][strike_idx]`
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::InsufficientData)` - Empty axis or dimension mismatch
    /// * `Err(MarketDataError::InvalidGrid)` - Unsorted axis or non-finite entry
    pub fn new(strikes: &[T], expiries: &[T], values: &[&[T]]) -> Result<Self, MarketDataError> {
        let rows: Vec<Vec<T>> = values.iter().map(|row| row.to_vec()).collect();
        Self::from_rows(strikes.to_vec(), expiries.to_vec(), rows)
    }

    /// Construct a volatility grid from owned axes and rows.
    ///
    /// Same validation as [`VolGrid::new`]; used when the grid is
    /// deserialised from configuration.
    pub fn from_rows(
        strikes: Vec<T>,
        expiries: Vec<T>,
        values: Vec<Vec<T>>,
    ) -> Result<Self, MarketDataError> {
        validate_axis(&strikes, "strike")?;
        validate_axis(&expiries, "expiry")?;

        if values.len() != expiries.len() {
            return Err(MarketDataError::InsufficientData {
                got: values.len(),
                need: expiries.len(),
            });
        }

        for (j, row) in values.iter().enumerate() {
            if row.len() != strikes.len() {
                return Err(MarketDataError::InsufficientData {
                    got: row.len(),
                    need: strikes.len(),
                });
            }
            if let Some(i) = row.iter().position(|v| !v.is_finite()) {
                return Err(MarketDataError::InvalidGrid {
                    message: format!("non-finite volatility at expiry row {}, strike column {}", j, i),
                });
            }
        }

        Ok(Self {
            strikes,
            expiries,
            values,
        })
    }

    /// Return the strike axis.
    #[inline]
    pub fn strikes(&self) -> &[T] {
        &self.strikes
    }

    /// Return the expiry axis.
    #[inline]
    pub fn expiries(&self) -> &[T] {
        &self.expiries
    }

    /// Return the volatility values as `values[expiry_idx][strike_idx]`.
    #[inline]
    pub fn values(&self) -> &[Vec<T>] {
        &self.values
    }

    /// Add `delta` to every grid value in place.
    ///
    /// Used by finite-difference sensitivity runs; a bump followed by the
    /// opposite bump restores the grid up to floating-point rounding.
    pub fn bump(&mut self, delta: T) {
        for row in self.values.iter_mut() {
            for value in row.iter_mut() {
                *value = *value + delta;
            }
        }
    }

    /// Look up the volatility at each `(strike, expiry)` coordinate.
    ///
    /// Fails on the first coordinate that cannot be resolved.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::VolGrid;
    ///
    /// let grid = VolGrid::new(&[1.0_f64, 2.0], &[1.0], &[&[0.2, 0.4][..]]).unwrap();
    /// let vols = grid.vols(&[(1.0, 1.0), (2.0, 1.0)]).unwrap();
    /// assert_eq!(vols, vec![0.2, 0.4]);
    /// ```
    pub fn vols(&self, coordinates: &[(T, T)]) -> Result<Vec<T>, MarketDataError> {
        coordinates
            .iter()
            .map(|&(strike, expiry)| self.interpolate(strike, expiry))
            .collect()
    }

    fn interpolate(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        let (i0, i1, u) = bracket(&self.strikes, strike, "strike")?;
        let (j0, j1, v) = bracket(&self.expiries, expiry, "expiry")?;

        let near = lerp(self.values[j0][i0], self.values[j0][i1], u);
        let far = lerp(self.values[j1][i0], self.values[j1][i1], u);
        Ok(lerp(near, far, v))
    }
}

impl<T: Float> VolatilitySurface<T> for VolGrid<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        self.interpolate(strike, expiry)
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        domain(&self.strikes)
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        domain(&self.expiries)
    }
}

fn validate_axis<T: Float>(axis: &[T], name: &'static str) -> Result<(), MarketDataError> {
    if axis.is_empty() {
        return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
    }
    if let Some(x) = axis.iter().find(|x| !x.is_finite()) {
        return Err(MarketDataError::InvalidGrid {
            message: format!(
                "non-finite {} node {}",
                name,
                x.to_f64().unwrap_or(f64::NAN)
            ),
        });
    }
    if axis.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MarketDataError::InvalidGrid {
            message: format!("{} axis must be strictly increasing", name),
        });
    }
    Ok(())
}

#[inline]
fn domain<T: Float>(axis: &[T]) -> (T, T) {
    (axis[0], axis[axis.len() - 1])
}

/// Locate `x` on `axis`: returns (lower index, upper index, weight of upper).
///
/// Exact node hits return the same index twice with zero weight so the
/// stored value passes through untouched.
fn bracket<T: Float>(
    axis: &[T],
    x: T,
    name: &'static str,
) -> Result<(usize, usize, T), MarketDataError> {
    if !x.is_finite() {
        return Err(MarketDataError::InvalidCoordinate {
            axis: name,
            x: x.to_f64().unwrap_or(f64::NAN),
        });
    }

    let (min, max) = domain(axis);
    let out_of_bounds = || MarketDataError::OutOfBounds {
        axis: name,
        x: x.to_f64().unwrap_or(f64::NAN),
        min: min.to_f64().unwrap_or(f64::NAN),
        max: max.to_f64().unwrap_or(f64::NAN),
    };

    if x < min || x > max {
        return Err(out_of_bounds());
    }

    if let Some(i) = axis.iter().position(|&node| node == x) {
        return Ok((i, i, T::zero()));
    }

    let i = axis
        .windows(2)
        .position(|w| w[0] < x && x < w[1])
        .ok_or_else(out_of_bounds)?;
    let weight = (x - axis[i]) / (axis[i + 1] - axis[i]);
    Ok((i, i + 1, weight))
}

#[inline]
fn lerp<T: Float>(a: T, b: T, w: T) -> T {
    if w.is_zero() {
        a
    } else {
        (T::one() - w) * a + w * b
    }
}
