//! Identity parameters shared by every contract.

use num_traits::Float;
use pricer_core::types::Underlying;

use super::enums::{LongShort, PutCallFwd};
use super::error::ContractError;

/// Contract identity: underlying, option direction, position, strike,
/// expiry and monitoring count.
///
/// The position sign and the monitoring count as `T` are derived once at
/// construction. Which option directions are permitted is decided by the
/// contract variant wrapping these parameters, not here.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::contracts::{ContractParams, LongShort, PutCallFwd};
///
/// let params =
///     ContractParams::new("OTP", PutCallFwd::Call, LongShort::Short, 1.0_f64, 2.0, 1).unwrap();
/// assert_eq!(params.sign(), -1.0);
/// assert_eq!(params.underlying().as_str(), "OTP");
///
/// // Expiry must be positive
/// assert!(ContractParams::new("OTP", PutCallFwd::Call, LongShort::Long, 1.0_f64, 0.0, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContractParams<T: Float> {
    underlying: Underlying,
    option_type: PutCallFwd,
    longshort: LongShort,
    strike: T,
    expiry: T,
    num_mon: usize,
    num_mon_t: T,
    sign: T,
}

impl<T: Float> ContractParams<T> {
    /// Creates validated contract parameters.
    ///
    /// # Errors
    /// `ContractError::Validation` if the strike is not finite, the expiry
    /// is not finite and positive, or `num_mon` is zero or not
    /// representable in `T`.
    pub fn new(
        underlying: impl Into<Underlying>,
        option_type: PutCallFwd,
        longshort: LongShort,
        strike: T,
        expiry: T,
        num_mon: usize,
    ) -> Result<Self, ContractError> {
        if !strike.is_finite() {
            return Err(ContractError::validation(
                "strike",
                format!("must be finite, got {}", to_f64(strike)),
            ));
        }

        if !expiry.is_finite() || expiry <= T::zero() {
            return Err(ContractError::validation(
                "expiry",
                format!("must be finite and positive, got {}", to_f64(expiry)),
            ));
        }

        if num_mon == 0 {
            return Err(ContractError::validation(
                "num_mon",
                "at least one monitoring point is required",
            ));
        }

        // Every count up to num_mon must be exact in T for the timeline to
        // stay strictly increasing and end at expiry.
        let exact = |n: usize| T::from(n).filter(|t| t.to_usize() == Some(n));
        let num_mon_t = match (exact(num_mon - 1), exact(num_mon)) {
            (Some(_), Some(t)) => t,
            _ => {
                return Err(ContractError::validation(
                    "num_mon",
                    format!("{} is not exactly representable", num_mon),
                ))
            }
        };

        Ok(Self {
            underlying: underlying.into(),
            option_type,
            longshort,
            strike,
            expiry,
            num_mon,
            num_mon_t,
            sign: longshort.sign(),
        })
    }

    /// Returns the underlying.
    #[inline]
    pub fn underlying(&self) -> &Underlying {
        &self.underlying
    }

    /// Returns the option direction.
    #[inline]
    pub fn option_type(&self) -> PutCallFwd {
        self.option_type
    }

    /// Returns the position.
    #[inline]
    pub fn longshort(&self) -> LongShort {
        self.longshort
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the number of monitoring points.
    #[inline]
    pub fn num_mon(&self) -> usize {
        self.num_mon
    }

    /// Returns +1 for long, -1 for short.
    #[inline]
    pub fn sign(&self) -> T {
        self.sign
    }

    /// Single observation at expiry.
    pub fn vanilla_timeline(&self) -> Vec<T> {
        vec![self.expiry]
    }

    /// `num_mon` equally spaced observations `k / num_mon * expiry`,
    /// `k = 1..=num_mon`. The last element is exactly `expiry`.
    pub fn monitoring_timeline(&self) -> Vec<T> {
        let mut k = T::zero();
        (0..self.num_mon)
            .map(|_| {
                k = k + T::one();
                k / self.num_mon_t * self.expiry
            })
            .collect()
    }

    /// Rejects option directions other than PUT and CALL.
    pub(crate) fn require_option(self, contract: &str) -> Result<Self, ContractError> {
        if self.option_type.is_option() {
            Ok(self)
        } else {
            Err(ContractError::validation(
                "option type",
                format!(
                    "{} contract must be CALL or PUT, got {}",
                    contract, self.option_type
                ),
            ))
        }
    }
}

/// Lossy conversion used for error messages only.
#[inline]
pub(crate) fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
