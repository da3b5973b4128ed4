//! Type-erased generic contract.
//!
//! [`GenericContract`] carries the union of all variant fields and decides
//! which of them are meaningful from its [`ContractType`] tag. It is only
//! created by converting a concrete contract, and its payoff dispatches on
//! the tag through the same kernels the concrete contracts use, so the two
//! forms agree bit-for-bit.

use std::fmt;

use num_traits::Float;
use tracing::debug;

use super::enums::{ContractType, InOut, UpDown};
use super::error::ContractError;
use super::params::{to_f64, ContractParams};
use super::payoff::{average_payoff, barrier_payoff, terminal_payoff, Barrier, PayoffType};
use super::summary::ContractSummary;
use super::traits::ContractTrait;
use super::PriceInput;

/// Tagged union of every contract variant.
///
/// # Examples
/// ```
/// use pricer_models::contracts::{
///     ContractTrait, ContractType, EuropeanContract, LongShort, PriceInput, PutCallFwd,
///     VanillaContract,
/// };
///
/// let trade = EuropeanContract::new("OTP", PutCallFwd::Call, LongShort::Long, 1.0_f64, 2.0).unwrap();
/// let generic = trade.to_generic();
///
/// assert_eq!(generic.contract_type(), ContractType::European);
/// assert_eq!(generic.payoff(PriceInput::Spot(2.5)).unwrap(), trade.payoff(2.5));
///
/// // Barrier fields are not available on a European contract
/// assert!(generic.barrier().is_err());
/// assert!(generic.barrier_level().is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenericContract<T: Float> {
    kind: ContractType,
    params: ContractParams<T>,
    barrier: Option<Barrier<T>>,
}

impl<T: Float> GenericContract<T> {
    pub(crate) fn from_parts(
        kind: ContractType,
        params: ContractParams<T>,
        barrier: Option<Barrier<T>>,
    ) -> Self {
        debug!(
            contract = %kind,
            underlying = %params.underlying(),
            "converted contract to generic form"
        );
        Self {
            kind,
            params,
            barrier,
        }
    }

    /// Returns the barrier level, or +inf when the kind has no barrier.
    #[inline]
    pub fn barrier_level(&self) -> T {
        self.barrier
            .as_ref()
            .map_or_else(T::infinity, |barrier| barrier.level())
    }

    /// Returns the barrier level.
    ///
    /// # Errors
    /// `ContractError::Unsupported` unless the kind is BARRIER.
    pub fn barrier(&self) -> Result<T, ContractError> {
        self.barrier_spec("barrier").map(|b| b.level())
    }

    /// Returns the barrier direction.
    ///
    /// # Errors
    /// `ContractError::Unsupported` unless the kind is BARRIER.
    pub fn updown(&self) -> Result<UpDown, ContractError> {
        self.barrier_spec("updown").map(|b| b.updown())
    }

    /// Returns the barrier activation.
    ///
    /// # Errors
    /// `ContractError::Unsupported` unless the kind is BARRIER.
    pub fn inout(&self) -> Result<InOut, ContractError> {
        self.barrier_spec("inout").map(|b| b.inout())
    }

    /// Returns whether any observed price breaches the barrier.
    ///
    /// # Errors
    /// `ContractError::Unsupported` unless the kind is BARRIER.
    pub fn is_breached(&self, prices: &[T]) -> Result<bool, ContractError> {
        self.barrier_spec("is_breached")
            .map(|b| b.is_breached(prices))
    }

    fn barrier_spec(&self, operation: &'static str) -> Result<&Barrier<T>, ContractError> {
        self.barrier
            .as_ref()
            .ok_or_else(|| self.unsupported(operation))
    }

    fn unsupported(&self, operation: &'static str) -> ContractError {
        ContractError::Unsupported {
            contract: self.kind.to_string(),
            operation,
        }
    }

    fn shape_error(&self) -> ContractError {
        ContractError::PriceShape {
            contract: self.kind.to_string(),
            expected: if self.kind.is_path_dependent() {
                "a price path"
            } else {
                "a terminal price"
            },
        }
    }

    fn path<'a>(&self, input: PriceInput<'a, T>) -> Result<&'a [T], ContractError> {
        match input {
            PriceInput::Path(prices) if prices.len() == self.params.num_mon() => Ok(prices),
            PriceInput::Path(prices) => Err(ContractError::PathLength {
                expected: self.params.num_mon(),
                got: prices.len(),
            }),
            PriceInput::Spot(_) => Err(self.shape_error()),
        }
    }

    /// Computes the signed payoff, dispatching on the contract kind.
    ///
    /// FORWARD, EUROPEAN, AMERICAN and DIGITAL take a terminal price;
    /// ASIAN and BARRIER take the monitored path.
    ///
    /// # Errors
    /// - `ContractError::PriceShape` for the wrong kind of input
    /// - `ContractError::PathLength` for a path not matching `num_mon`
    pub fn payoff(&self, input: PriceInput<'_, T>) -> Result<T, ContractError> {
        let kernel = PayoffType::for_contract(self.kind, self.params.option_type());
        let sign = self.params.sign();
        let strike = self.params.strike();

        match self.kind {
            ContractType::Forward
            | ContractType::European
            | ContractType::American
            | ContractType::Digital => match input {
                PriceInput::Spot(spot) => Ok(terminal_payoff(kernel, sign, spot, strike)),
                PriceInput::Path(_) => Err(self.shape_error()),
            },
            ContractType::Asian => {
                let prices = self.path(input)?;
                Ok(average_payoff(kernel, sign, prices, strike))
            }
            ContractType::Barrier => {
                let prices = self.path(input)?;
                let barrier = self.barrier_spec("payoff")?;
                Ok(barrier_payoff(kernel, barrier, sign, prices, strike))
            }
        }
    }
}

impl<T: Float> ContractTrait<T> for GenericContract<T> {
    #[inline]
    fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    #[inline]
    fn contract_type(&self) -> ContractType {
        self.kind
    }

    fn timeline(&self) -> Vec<T> {
        if self.kind.is_path_dependent() {
            self.params.monitoring_timeline()
        } else {
            self.params.vanilla_timeline()
        }
    }

    fn to_generic(&self) -> GenericContract<T> {
        self.clone()
    }

    fn summary(&self) -> ContractSummary {
        let mut summary = ContractSummary::from_params(format!("Generic, {}", self.kind), &self.params);
        match &self.barrier {
            Some(barrier) => summary = summary.with_barrier(barrier),
            None => summary.barrier = Some(to_f64(self.barrier_level())),
        }
        summary
    }
}

impl<T: Float> fmt::Display for GenericContract<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{
        AsianContract, EuropeanBarrierContract, EuropeanContract, ForwardContract, LongShort,
        PathDependentContract, PutCallFwd, VanillaContract,
    };

    const VALUES: [f64; 9] = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

    fn barrier_trade() -> EuropeanBarrierContract<f64> {
        EuropeanBarrierContract::new(
            "Deutsche Bank",
            PutCallFwd::Call,
            LongShort::Long,
            1.5,
            2.0,
            9,
            Barrier::new(2.7, UpDown::Up, InOut::In),
        )
        .unwrap()
    }

    // ==========================================================
    // Dispatch
    // ==========================================================

    #[test]
    fn test_forward_dispatch() {
        let forward = ForwardContract::new("Apple", LongShort::Short, 1.0, 2.0).unwrap();
        let generic = forward.to_generic();
        for s in VALUES {
            assert_eq!(generic.payoff(PriceInput::Spot(s)).unwrap(), forward.payoff(s));
        }
    }

    #[test]
    fn test_asian_dispatch() {
        let asian =
            AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 9).unwrap();
        let generic = asian.to_generic();
        assert_eq!(
            generic.payoff(PriceInput::Path(&VALUES)).unwrap(),
            asian.payoff(&VALUES).unwrap()
        );
    }

    #[test]
    fn test_barrier_dispatch_and_breach() {
        let trade = barrier_trade();
        let generic = trade.to_generic();
        assert_eq!(
            generic.payoff(PriceInput::Path(&VALUES)).unwrap(),
            trade.payoff(&VALUES).unwrap()
        );
        assert!(!generic.is_breached(&[1.0, 2.0, 2.5, 2.0]).unwrap());
        assert!(generic.is_breached(&[1.0, 2.0, 3.5, 2.0]).unwrap());
    }

    // ==========================================================
    // Errors
    // ==========================================================

    #[test]
    fn test_wrong_shape() {
        let european =
            EuropeanContract::new("OTP", PutCallFwd::Call, LongShort::Long, 1.0, 2.0).unwrap();
        match european.to_generic().payoff(PriceInput::Path(&VALUES)) {
            Err(ContractError::PriceShape { contract, expected }) => {
                assert_eq!(contract, "EUROPEAN");
                assert_eq!(expected, "a terminal price");
            }
            other => panic!("Expected PriceShape, got {:?}", other),
        }

        let generic = barrier_trade().to_generic();
        assert!(matches!(
            generic.payoff(PriceInput::Spot(3.0)),
            Err(ContractError::PriceShape {
                expected: "a price path",
                ..
            })
        ));
    }

    #[test]
    fn test_wrong_path_length() {
        let generic = barrier_trade().to_generic();
        assert_eq!(
            generic.payoff(PriceInput::Path(&VALUES[1..])),
            Err(ContractError::PathLength {
                expected: 9,
                got: 8
            })
        );
    }

    #[test]
    fn test_barrier_accessors_on_non_barrier_kind() {
        let generic = AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 9)
            .unwrap()
            .to_generic();
        match generic.inout() {
            Err(ContractError::Unsupported {
                contract,
                operation,
            }) => {
                assert_eq!(contract, "ASIAN");
                assert_eq!(operation, "inout");
            }
            other => panic!("Expected Unsupported, got {:?}", other),
        }
        assert!(generic.updown().is_err());
        assert!(generic.barrier().is_err());
        assert!(generic.is_breached(&VALUES).is_err());
        assert_eq!(generic.barrier_level(), f64::INFINITY);
    }

    // ==========================================================
    // Identity and dump
    // ==========================================================

    #[test]
    fn test_barrier_accessors() {
        let generic = barrier_trade().to_generic();
        assert_eq!(generic.barrier().unwrap(), 2.7);
        assert_eq!(generic.updown().unwrap(), UpDown::Up);
        assert_eq!(generic.inout().unwrap(), InOut::In);
        assert_eq!(generic.barrier_level(), 2.7);
    }

    #[test]
    fn test_timeline_follows_kind() {
        let asian =
            AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 9).unwrap();
        assert_eq!(asian.to_generic().timeline(), asian.timeline());

        let forward = ForwardContract::new("Apple", LongShort::Short, 1.0, 2.0).unwrap();
        assert_eq!(forward.to_generic().timeline(), vec![2.0]);
    }

    #[test]
    fn test_summary_label() {
        let forward = ForwardContract::new("Apple", LongShort::Short, 1.0, 2.0).unwrap();
        let summary = forward.to_generic().summary();
        assert_eq!(summary.contract, "Generic, FORWARD");
        assert_eq!(summary.barrier, Some(f64::INFINITY));
        assert_eq!(summary.updown, None);
        assert_eq!(summary.inout, None);
    }

    #[test]
    fn test_to_generic_is_idempotent() {
        let generic = barrier_trade().to_generic();
        assert_eq!(generic.to_generic(), generic);
    }
}
