//! Contract taxonomy and payoff evaluation.
//!
//! This module provides:
//! - Classification enums ([`ContractType`], [`PutCallFwd`], [`LongShort`],
//!   [`UpDown`], [`InOut`])
//! - Vanilla contracts ([`ForwardContract`], [`EuropeanContract`],
//!   [`AmericanContract`], [`EuropeanDigitalContract`])
//! - Path-dependent contracts ([`AsianContract`], [`EuropeanBarrierContract`])
//! - The type-erased [`GenericContract`]
//! - [`Contract`]: static dispatch enum over every concrete variant
//!
//! ## Usage
//!
//! Construct a contract, query its timeline, obtain prices at those times
//! from a path generator, then evaluate the payoff:
//!
//! ```
//! use pricer_models::contracts::{
//!     AsianContract, Contract, ContractTrait, LongShort, PriceInput, PutCallFwd,
//! };
//!
//! let contract: Contract<f64> =
//!     AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 9)
//!         .unwrap()
//!         .into();
//!
//! let timeline = contract.timeline();
//! assert_eq!(timeline.len(), 9);
//!
//! let path = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
//! let concrete = contract.payoff(PriceInput::Path(&path)).unwrap();
//! let generic = contract.to_generic().payoff(PriceInput::Path(&path)).unwrap();
//! assert_eq!(concrete, generic);
//! ```

mod enums;
mod error;
mod generic;
mod params;
mod path_dependent;
mod payoff;
mod summary;
mod traits;
mod vanilla;

use std::fmt;

use num_traits::Float;

pub use enums::{ContractFamily, ContractType, InOut, LongShort, PutCallFwd, UpDown};
pub use error::ContractError;
pub use generic::GenericContract;
pub use params::ContractParams;
pub use path_dependent::{AsianContract, EuropeanBarrierContract};
pub use payoff::{arithmetic_mean, Barrier, PayoffType};
pub use summary::ContractSummary;
pub use traits::{ContractTrait, PathDependentContract, VanillaContract};
pub use vanilla::{AmericanContract, EuropeanContract, EuropeanDigitalContract, ForwardContract};

/// Price observation handed to a payoff.
///
/// Vanilla contracts take the terminal spot; path-dependent contracts
/// take one price per timeline point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceInput<'a, T: Float> {
    /// Terminal price at expiry
    Spot(T),
    /// Prices at every monitoring point, in timeline order
    Path(&'a [T]),
}

/// Static dispatch enum over every concrete contract.
///
/// # Examples
/// ```
/// use pricer_models::contracts::{
///     Contract, ContractTrait, ContractType, ForwardContract, LongShort, PriceInput,
/// };
///
/// let contract = Contract::from(ForwardContract::new("Apple", LongShort::Short, 1.0_f64, 2.0).unwrap());
/// assert_eq!(contract.contract_type(), ContractType::Forward);
/// assert_eq!(contract.payoff(PriceInput::Spot(0.5)).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Contract<T: Float> {
    /// Forward contract
    Forward(ForwardContract<T>),
    /// European vanilla option
    European(EuropeanContract<T>),
    /// American vanilla option
    American(AmericanContract<T>),
    /// European digital option
    Digital(EuropeanDigitalContract<T>),
    /// Asian option
    Asian(AsianContract<T>),
    /// European barrier option
    Barrier(EuropeanBarrierContract<T>),
}

impl<T: Float> Contract<T> {
    /// Computes the signed payoff.
    ///
    /// # Errors
    /// - `ContractError::PriceShape` if a vanilla contract receives a path or
    ///   a path-dependent contract receives a single price
    /// - `ContractError::PathLength` if the path length differs from `num_mon`
    pub fn payoff(&self, input: PriceInput<'_, T>) -> Result<T, ContractError> {
        match (self, input) {
            (Contract::Forward(c), PriceInput::Spot(spot)) => Ok(c.payoff(spot)),
            (Contract::European(c), PriceInput::Spot(spot)) => Ok(c.payoff(spot)),
            (Contract::American(c), PriceInput::Spot(spot)) => Ok(c.payoff(spot)),
            (Contract::Digital(c), PriceInput::Spot(spot)) => Ok(c.payoff(spot)),
            (Contract::Asian(c), PriceInput::Path(prices)) => c.payoff(prices),
            (Contract::Barrier(c), PriceInput::Path(prices)) => c.payoff(prices),
            _ => Err(ContractError::PriceShape {
                contract: self.contract_type().to_string(),
                expected: if self.contract_type().is_path_dependent() {
                    "a price path"
                } else {
                    "a terminal price"
                },
            }),
        }
    }

    /// Returns the barrier option, if this is one.
    pub fn as_barrier(&self) -> Option<&EuropeanBarrierContract<T>> {
        match self {
            Contract::Barrier(c) => Some(c),
            _ => None,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $c:ident => $body:expr) => {
        match $self {
            Contract::Forward($c) => $body,
            Contract::European($c) => $body,
            Contract::American($c) => $body,
            Contract::Digital($c) => $body,
            Contract::Asian($c) => $body,
            Contract::Barrier($c) => $body,
        }
    };
}

impl<T: Float> ContractTrait<T> for Contract<T> {
    fn params(&self) -> &ContractParams<T> {
        dispatch!(self, c => c.params())
    }

    fn contract_type(&self) -> ContractType {
        dispatch!(self, c => c.contract_type())
    }

    fn timeline(&self) -> Vec<T> {
        dispatch!(self, c => c.timeline())
    }

    fn to_generic(&self) -> GenericContract<T> {
        dispatch!(self, c => c.to_generic())
    }

    fn summary(&self) -> ContractSummary {
        dispatch!(self, c => c.summary())
    }
}

impl<T: Float> fmt::Display for Contract<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

impl<T: Float> From<ForwardContract<T>> for Contract<T> {
    fn from(c: ForwardContract<T>) -> Self {
        Contract::Forward(c)
    }
}

impl<T: Float> From<EuropeanContract<T>> for Contract<T> {
    fn from(c: EuropeanContract<T>) -> Self {
        Contract::European(c)
    }
}

impl<T: Float> From<AmericanContract<T>> for Contract<T> {
    fn from(c: AmericanContract<T>) -> Self {
        Contract::American(c)
    }
}

impl<T: Float> From<EuropeanDigitalContract<T>> for Contract<T> {
    fn from(c: EuropeanDigitalContract<T>) -> Self {
        Contract::Digital(c)
    }
}

impl<T: Float> From<AsianContract<T>> for Contract<T> {
    fn from(c: AsianContract<T>) -> Self {
        Contract::Asian(c)
    }
}

impl<T: Float> From<EuropeanBarrierContract<T>> for Contract<T> {
    fn from(c: EuropeanBarrierContract<T>) -> Self {
        Contract::Barrier(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [f64; 9] = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

    fn book() -> Vec<Contract<f64>> {
        vec![
            ForwardContract::new("Apple", LongShort::Short, 1.0, 2.0)
                .unwrap()
                .into(),
            EuropeanContract::new("OTP", PutCallFwd::Call, LongShort::Long, 1.0, 2.0)
                .unwrap()
                .into(),
            AmericanContract::new("Tesla", PutCallFwd::Call, LongShort::Long, 1.0, 2.0)
                .unwrap()
                .into(),
            EuropeanDigitalContract::new("Mol", PutCallFwd::Call, LongShort::Long, 1.0, 2.0)
                .unwrap()
                .into(),
            AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, 9)
                .unwrap()
                .into(),
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
            .into(),
        ]
    }

    fn input_for(contract: &Contract<f64>) -> PriceInput<'static, f64> {
        if contract.contract_type().is_path_dependent() {
            PriceInput::Path(&VALUES)
        } else {
            PriceInput::Spot(2.5)
        }
    }

    #[test]
    fn test_dispatch_matches_generic() {
        for contract in book() {
            let input = input_for(&contract);
            assert_eq!(
                contract.payoff(input).unwrap(),
                contract.to_generic().payoff(input).unwrap(),
                "{}",
                contract
            );
        }
    }

    #[test]
    fn test_kinds() {
        let kinds: Vec<ContractType> = book().iter().map(|c| c.contract_type()).collect();
        assert_eq!(kinds, ContractType::ALL.to_vec());
    }

    #[test]
    fn test_shape_mismatch() {
        for contract in book() {
            let wrong = if contract.contract_type().is_path_dependent() {
                PriceInput::Spot(2.5)
            } else {
                PriceInput::Path(&VALUES)
            };
            assert!(matches!(
                contract.payoff(wrong),
                Err(ContractError::PriceShape { .. })
            ));
        }
    }

    #[test]
    fn test_as_barrier() {
        let book = book();
        assert!(book[5].as_barrier().is_some());
        assert!(book[0].as_barrier().is_none());
    }

    #[test]
    fn test_family_accessor() {
        let book = book();
        assert_eq!(book[1].family(), ContractFamily::Vanilla);
        assert_eq!(book[4].family(), ContractFamily::PathDependent);
        assert_eq!(book[4].underlying().as_str(), "Microsoft");
    }
}
