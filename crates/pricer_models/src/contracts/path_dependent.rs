//! Path-dependent contracts observing the underlying at every monitoring point.
//!
//! Both contracts monitor `num_mon` equally spaced times ending at expiry
//! and require a price path of exactly that length.

use std::fmt;

use num_traits::Float;
use pricer_core::types::Underlying;

use super::enums::{ContractType, InOut, LongShort, PutCallFwd, UpDown};
use super::error::ContractError;
use super::generic::GenericContract;
use super::params::{to_f64, ContractParams};
use super::payoff::{average_payoff, barrier_payoff, Barrier, PayoffType};
use super::summary::ContractSummary;
use super::traits::{ContractTrait, PathDependentContract};

/// Arithmetic-average Asian option.
///
/// Payoff is `s·max(mean(path) − K, 0)` for a call and
/// `s·max(K − mean(path), 0)` for a put.
///
/// # Examples
/// ```
/// use pricer_models::contracts::{AsianContract, LongShort, PathDependentContract, PutCallFwd};
///
/// let asian =
///     AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8_f64, 2.0, 9).unwrap();
/// let path = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
/// assert!((asian.payoff(&path).unwrap() - 0.2).abs() < 1e-12);
///
/// // Path length must match the monitoring count
/// assert!(asian.payoff(&path[..4]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AsianContract<T: Float> {
    params: ContractParams<T>,
}

impl<T: Float> AsianContract<T> {
    /// Creates an Asian option averaging over `num_mon` observations.
    pub fn new(
        underlying: impl Into<Underlying>,
        option_type: PutCallFwd,
        longshort: LongShort,
        strike: T,
        expiry: T,
        num_mon: usize,
    ) -> Result<Self, ContractError> {
        let params = ContractParams::new(underlying, option_type, longshort, strike, expiry, num_mon)?
            .require_option(ContractType::Asian.label())?;
        Ok(Self { params })
    }
}

impl<T: Float> ContractTrait<T> for AsianContract<T> {
    #[inline]
    fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    #[inline]
    fn contract_type(&self) -> ContractType {
        ContractType::Asian
    }

    fn timeline(&self) -> Vec<T> {
        self.params.monitoring_timeline()
    }

    fn to_generic(&self) -> GenericContract<T> {
        GenericContract::from_parts(ContractType::Asian, self.params.clone(), None)
    }

    fn summary(&self) -> ContractSummary {
        ContractSummary::from_params(ContractType::Asian.to_string(), &self.params)
    }
}

impl<T: Float> PathDependentContract<T> for AsianContract<T> {
    fn payoff(&self, prices: &[T]) -> Result<T, ContractError> {
        self.check_path(prices)?;
        let kernel = PayoffType::for_contract(ContractType::Asian, self.params.option_type());
        Ok(average_payoff(
            kernel,
            self.params.sign(),
            prices,
            self.params.strike(),
        ))
    }
}

/// European barrier option with discrete monitoring.
///
/// The barrier is breached when any observed price touches or crosses the
/// level in the barrier direction. A knock-in pays the vanilla payoff on
/// the last observed price only if breached, a knock-out only if never
/// breached.
///
/// # Examples
/// ```
/// use pricer_models::contracts::{
///     Barrier, EuropeanBarrierContract, InOut, LongShort, PutCallFwd, UpDown,
/// };
///
/// let barrier = Barrier::new(2.7_f64, UpDown::Up, InOut::In);
/// let trade = EuropeanBarrierContract::new(
///     "Deutsche Bank", PutCallFwd::Call, LongShort::Long, 1.5, 2.0, 4, barrier,
/// )
/// .unwrap();
///
/// assert!(!trade.is_breached(&[1.0, 2.0, 2.5, 2.0]));
/// assert!(trade.is_breached(&[1.0, 2.0, 3.5, 2.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanBarrierContract<T: Float> {
    params: ContractParams<T>,
    barrier: Barrier<T>,
}

impl<T: Float> EuropeanBarrierContract<T> {
    /// Creates a barrier option monitored at `num_mon` points.
    ///
    /// # Errors
    /// `ContractError::Validation` for a non-option direction, a NaN
    /// barrier level, or invalid identity parameters.
    pub fn new(
        underlying: impl Into<Underlying>,
        option_type: PutCallFwd,
        longshort: LongShort,
        strike: T,
        expiry: T,
        num_mon: usize,
        barrier: Barrier<T>,
    ) -> Result<Self, ContractError> {
        let params = ContractParams::new(underlying, option_type, longshort, strike, expiry, num_mon)?
            .require_option(ContractType::Barrier.label())?;

        if barrier.level().is_nan() {
            return Err(ContractError::validation(
                "barrier",
                format!("level must be a number, got {}", to_f64(barrier.level())),
            ));
        }

        Ok(Self { params, barrier })
    }

    /// Returns the barrier specification.
    #[inline]
    pub fn barrier_spec(&self) -> &Barrier<T> {
        &self.barrier
    }

    /// Returns the barrier level.
    #[inline]
    pub fn barrier(&self) -> T {
        self.barrier.level()
    }

    /// Returns the barrier direction.
    #[inline]
    pub fn updown(&self) -> UpDown {
        self.barrier.updown()
    }

    /// Returns the barrier activation.
    #[inline]
    pub fn inout(&self) -> InOut {
        self.barrier.inout()
    }

    /// Returns whether any observed price breaches the barrier.
    ///
    /// Accepts paths of any length.
    #[inline]
    pub fn is_breached(&self, prices: &[T]) -> bool {
        self.barrier.is_breached(prices)
    }
}

impl<T: Float> ContractTrait<T> for EuropeanBarrierContract<T> {
    #[inline]
    fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    #[inline]
    fn contract_type(&self) -> ContractType {
        ContractType::Barrier
    }

    fn timeline(&self) -> Vec<T> {
        self.params.monitoring_timeline()
    }

    fn to_generic(&self) -> GenericContract<T> {
        GenericContract::from_parts(ContractType::Barrier, self.params.clone(), Some(self.barrier))
    }

    fn summary(&self) -> ContractSummary {
        ContractSummary::from_params(ContractType::Barrier.to_string(), &self.params)
            .with_barrier(&self.barrier)
    }
}

impl<T: Float> PathDependentContract<T> for EuropeanBarrierContract<T> {
    fn payoff(&self, prices: &[T]) -> Result<T, ContractError> {
        self.check_path(prices)?;
        let kernel = PayoffType::for_contract(ContractType::Barrier, self.params.option_type());
        Ok(barrier_payoff(
            kernel,
            &self.barrier,
            self.params.sign(),
            prices,
            self.params.strike(),
        ))
    }
}

impl<T: Float> fmt::Display for AsianContract<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

impl<T: Float> fmt::Display for EuropeanBarrierContract<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VALUES: [f64; 9] = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

    fn knock_in(longshort: LongShort) -> EuropeanBarrierContract<f64> {
        EuropeanBarrierContract::new(
            "Deutsche Bank",
            PutCallFwd::Call,
            longshort,
            1.5,
            2.0,
            9,
            Barrier::new(2.7, UpDown::Up, InOut::In),
        )
        .unwrap()
    }

    // ==========================================================
    // Asian
    // ==========================================================

    #[test]
    fn test_asian_reference_payoff() {
        let asian =
            AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 9).unwrap();
        assert_relative_eq!(asian.payoff(&VALUES).unwrap(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_asian_put_out_of_the_money() {
        let asian =
            AsianContract::new("Microsoft", PutCallFwd::Put, LongShort::Long, 0.8, 2.0, 9).unwrap();
        assert_eq!(asian.payoff(&VALUES).unwrap(), 0.0);
    }

    #[test]
    fn test_asian_short_negates() {
        let long =
            AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 9).unwrap();
        let short =
            AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Short, 0.8, 2.0, 9).unwrap();
        assert_eq!(short.payoff(&VALUES).unwrap(), -long.payoff(&VALUES).unwrap());
    }

    #[test]
    fn test_asian_path_length_mismatch() {
        let asian =
            AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 9).unwrap();
        assert_eq!(
            asian.payoff(&VALUES[..8]),
            Err(ContractError::PathLength {
                expected: 9,
                got: 8
            })
        );
        assert!(asian.payoff(&[]).is_err());
    }

    #[test]
    fn test_asian_timeline() {
        let asian =
            AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 4).unwrap();
        let timeline = asian.timeline();
        assert_eq!(timeline.len(), 4);
        assert_relative_eq!(timeline[0], 0.5);
        assert_eq!(timeline[3], 2.0);
    }

    #[test]
    fn test_asian_rejects_fwd() {
        let result = AsianContract::new("X", PutCallFwd::Fwd, LongShort::Long, 1.0_f64, 1.0, 3);
        assert!(matches!(result, Err(ContractError::Validation { .. })));
    }

    // ==========================================================
    // Barrier
    // ==========================================================

    #[test]
    fn test_barrier_accessors() {
        let trade = knock_in(LongShort::Long);
        assert_eq!(trade.barrier(), 2.7);
        assert_eq!(trade.updown(), UpDown::Up);
        assert_eq!(trade.inout(), InOut::In);
        assert_eq!(trade.num_mon(), 9);
    }

    #[test]
    fn test_barrier_breach_reference_paths() {
        let trade = knock_in(LongShort::Long);
        assert!(!trade.is_breached(&[1.0, 2.0, 2.5, 2.0]));
        assert!(trade.is_breached(&[1.0, 2.0, 3.5, 2.0]));
    }

    #[test]
    fn test_knock_in_payoff() {
        let trade = knock_in(LongShort::Long);
        // Breached at 3.0, last price 3.0
        assert_eq!(trade.payoff(&VALUES).unwrap(), 1.5);

        let mut quiet = VALUES;
        quiet[8] = 2.6;
        assert_eq!(trade.payoff(&quiet).unwrap(), 0.0);
    }

    #[test]
    fn test_knock_out_payoff() {
        let trade = EuropeanBarrierContract::new(
            "Deutsche Bank",
            PutCallFwd::Call,
            LongShort::Long,
            1.5,
            2.0,
            9,
            Barrier::new(2.7, UpDown::Up, InOut::Out),
        )
        .unwrap();
        assert_eq!(trade.payoff(&VALUES).unwrap(), 0.0);

        let mut quiet = VALUES;
        quiet[8] = 2.6;
        assert_relative_eq!(trade.payoff(&quiet).unwrap(), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_down_and_in_put() {
        let trade = EuropeanBarrierContract::new(
            "X",
            PutCallFwd::Put,
            LongShort::Long,
            2.0,
            1.0,
            3,
            Barrier::new(0.5, UpDown::Down, InOut::In),
        )
        .unwrap();
        assert_eq!(trade.payoff(&[1.0, 0.5, 1.25]).unwrap(), 0.75);
        assert_eq!(trade.payoff(&[1.0, 0.75, 1.25]).unwrap(), 0.0);
    }

    #[test]
    fn test_barrier_short_negates() {
        let long = knock_in(LongShort::Long);
        let short = knock_in(LongShort::Short);
        assert_eq!(short.payoff(&VALUES).unwrap(), -long.payoff(&VALUES).unwrap());
    }

    #[test]
    fn test_barrier_path_length_mismatch() {
        let trade = knock_in(LongShort::Long);
        assert!(matches!(
            trade.payoff(&[1.0, 2.0, 3.5, 2.0]),
            Err(ContractError::PathLength {
                expected: 9,
                got: 4
            })
        ));
    }

    #[test]
    fn test_barrier_rejects_nan_level() {
        let result = EuropeanBarrierContract::new(
            "X",
            PutCallFwd::Call,
            LongShort::Long,
            1.0,
            1.0,
            1,
            Barrier::new(f64::NAN, UpDown::Up, InOut::In),
        );
        assert!(matches!(
            result,
            Err(ContractError::Validation {
                parameter: "barrier",
                ..
            })
        ));
    }

    #[test]
    fn test_barrier_summary() {
        let summary = knock_in(LongShort::Long).summary();
        assert_eq!(summary.contract, "BARRIER");
        assert_eq!(summary.barrier, Some(2.7));
        assert_eq!(summary.updown, Some(UpDown::Up));
        assert_eq!(summary.inout, Some(InOut::In));
    }
}
