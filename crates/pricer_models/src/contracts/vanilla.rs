//! Vanilla contracts observing a single terminal price.
//!
//! This module provides:
//! - [`ForwardContract`]: linear payoff `s·(S − K)`
//! - [`EuropeanContract`]: `s·max(S − K, 0)` / `s·max(K − S, 0)`
//! - [`AmericanContract`]: same terminal payoff as European; early exercise
//!   is not modelled
//! - [`EuropeanDigitalContract`]: `s·1[S > K]` / `s·1[S < K]`
//!
//! Every vanilla timeline is `[expiry]`.

use std::fmt;

use num_traits::Float;
use pricer_core::types::Underlying;

use super::enums::{ContractType, LongShort, PutCallFwd};
use super::error::ContractError;
use super::generic::GenericContract;
use super::params::ContractParams;
use super::payoff::{terminal_payoff, PayoffType};
use super::summary::ContractSummary;
use super::traits::{ContractTrait, VanillaContract};

/// Forward contract.
///
/// The option direction is always FWD.
///
/// # Examples
/// ```
/// use pricer_models::contracts::{ForwardContract, LongShort, VanillaContract};
///
/// let forward = ForwardContract::new("Apple", LongShort::Short, 1.0_f64, 2.0).unwrap();
/// assert_eq!(forward.payoff(0.5), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardContract<T: Float> {
    params: ContractParams<T>,
}

impl<T: Float> ForwardContract<T> {
    /// Creates a forward contract.
    pub fn new(
        underlying: impl Into<Underlying>,
        longshort: LongShort,
        strike: T,
        expiry: T,
    ) -> Result<Self, ContractError> {
        let params = ContractParams::new(underlying, PutCallFwd::Fwd, longshort, strike, expiry, 1)?;
        Ok(Self { params })
    }
}

impl<T: Float> ContractTrait<T> for ForwardContract<T> {
    #[inline]
    fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    #[inline]
    fn contract_type(&self) -> ContractType {
        ContractType::Forward
    }

    fn timeline(&self) -> Vec<T> {
        self.params.vanilla_timeline()
    }

    fn to_generic(&self) -> GenericContract<T> {
        GenericContract::from_parts(ContractType::Forward, self.params.clone(), None)
    }

    fn summary(&self) -> ContractSummary {
        ContractSummary::from_params(ContractType::Forward.to_string(), &self.params)
    }
}

impl<T: Float> VanillaContract<T> for ForwardContract<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        terminal_payoff(PayoffType::Linear, self.params.sign(), spot, self.params.strike())
    }
}

/// European vanilla option.
///
/// # Examples
/// ```
/// use pricer_models::contracts::{EuropeanContract, LongShort, PutCallFwd, VanillaContract};
///
/// let call = EuropeanContract::new("OTP", PutCallFwd::Call, LongShort::Long, 1.0_f64, 2.0).unwrap();
/// assert_eq!(call.payoff(2.5), 1.5);
///
/// // FWD is not an option direction
/// assert!(EuropeanContract::new("OTP", PutCallFwd::Fwd, LongShort::Long, 1.0_f64, 2.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanContract<T: Float> {
    params: ContractParams<T>,
}

impl<T: Float> EuropeanContract<T> {
    /// Creates a European option; `option_type` must be CALL or PUT.
    pub fn new(
        underlying: impl Into<Underlying>,
        option_type: PutCallFwd,
        longshort: LongShort,
        strike: T,
        expiry: T,
    ) -> Result<Self, ContractError> {
        let params = ContractParams::new(underlying, option_type, longshort, strike, expiry, 1)?
            .require_option(ContractType::European.label())?;
        Ok(Self { params })
    }
}

impl<T: Float> ContractTrait<T> for EuropeanContract<T> {
    #[inline]
    fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    #[inline]
    fn contract_type(&self) -> ContractType {
        ContractType::European
    }

    fn timeline(&self) -> Vec<T> {
        self.params.vanilla_timeline()
    }

    fn to_generic(&self) -> GenericContract<T> {
        GenericContract::from_parts(ContractType::European, self.params.clone(), None)
    }

    fn summary(&self) -> ContractSummary {
        ContractSummary::from_params(ContractType::European.to_string(), &self.params)
    }
}

impl<T: Float> VanillaContract<T> for EuropeanContract<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        let kernel = PayoffType::for_contract(ContractType::European, self.params.option_type());
        terminal_payoff(kernel, self.params.sign(), spot, self.params.strike())
    }
}

/// American vanilla option.
///
/// Only the exercise-at-expiry payoff is modelled, which makes it
/// numerically identical to [`EuropeanContract`]; the two differ in kind.
#[derive(Debug, Clone, PartialEq)]
pub struct AmericanContract<T: Float> {
    params: ContractParams<T>,
}

impl<T: Float> AmericanContract<T> {
    /// Creates an American option; `option_type` must be CALL or PUT.
    pub fn new(
        underlying: impl Into<Underlying>,
        option_type: PutCallFwd,
        longshort: LongShort,
        strike: T,
        expiry: T,
    ) -> Result<Self, ContractError> {
        let params = ContractParams::new(underlying, option_type, longshort, strike, expiry, 1)?
            .require_option(ContractType::American.label())?;
        Ok(Self { params })
    }
}

impl<T: Float> ContractTrait<T> for AmericanContract<T> {
    #[inline]
    fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    #[inline]
    fn contract_type(&self) -> ContractType {
        ContractType::American
    }

    fn timeline(&self) -> Vec<T> {
        self.params.vanilla_timeline()
    }

    fn to_generic(&self) -> GenericContract<T> {
        GenericContract::from_parts(ContractType::American, self.params.clone(), None)
    }

    fn summary(&self) -> ContractSummary {
        ContractSummary::from_params(ContractType::American.to_string(), &self.params)
    }
}

impl<T: Float> VanillaContract<T> for AmericanContract<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        let kernel = PayoffType::for_contract(ContractType::American, self.params.option_type());
        terminal_payoff(kernel, self.params.sign(), spot, self.params.strike())
    }
}

/// European cash-or-nothing digital option paying one unit.
///
/// The comparison is strict, so spot equal to strike pays nothing for
/// either direction.
///
/// # Examples
/// ```
/// use pricer_models::contracts::{EuropeanDigitalContract, LongShort, PutCallFwd, VanillaContract};
///
/// let digital =
///     EuropeanDigitalContract::new("Mol", PutCallFwd::Call, LongShort::Long, 1.0_f64, 2.0).unwrap();
/// assert_eq!(digital.payoff(1.0), 0.0);
/// assert_eq!(digital.payoff(1.5), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanDigitalContract<T: Float> {
    params: ContractParams<T>,
}

impl<T: Float> EuropeanDigitalContract<T> {
    /// Creates a digital option; `option_type` must be CALL or PUT.
    pub fn new(
        underlying: impl Into<Underlying>,
        option_type: PutCallFwd,
        longshort: LongShort,
        strike: T,
        expiry: T,
    ) -> Result<Self, ContractError> {
        let params = ContractParams::new(underlying, option_type, longshort, strike, expiry, 1)?
            .require_option(ContractType::Digital.label())?;
        Ok(Self { params })
    }
}

impl<T: Float> ContractTrait<T> for EuropeanDigitalContract<T> {
    #[inline]
    fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    #[inline]
    fn contract_type(&self) -> ContractType {
        ContractType::Digital
    }

    fn timeline(&self) -> Vec<T> {
        self.params.vanilla_timeline()
    }

    fn to_generic(&self) -> GenericContract<T> {
        GenericContract::from_parts(ContractType::Digital, self.params.clone(), None)
    }

    fn summary(&self) -> ContractSummary {
        ContractSummary::from_params(ContractType::Digital.to_string(), &self.params)
    }
}

impl<T: Float> VanillaContract<T> for EuropeanDigitalContract<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        let kernel = PayoffType::for_contract(ContractType::Digital, self.params.option_type());
        terminal_payoff(kernel, self.params.sign(), spot, self.params.strike())
    }
}

macro_rules! display_via_summary {
    ($($contract:ident),+) => {
        $(
            impl<T: Float> fmt::Display for $contract<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.summary())
                }
            }
        )+
    };
}

display_via_summary!(
    ForwardContract,
    EuropeanContract,
    AmericanContract,
    EuropeanDigitalContract
);
