//! Contract trait definitions.
//!
//! [`ContractTrait`] is the interface every contract shares: identity
//! accessors, the observation timeline, conversion to the generic form
//! and a structured summary. Payoff evaluation lives in the two family
//! traits because its input differs: [`VanillaContract`] observes a
//! single terminal price, [`PathDependentContract`] observes the whole
//! monitored path.
//!
//! Dispatch over a heterogeneous set of contracts goes through the
//! [`Contract`](super::Contract) enum rather than `Box<dyn ContractTrait>`.

use num_traits::Float;
use pricer_core::types::Underlying;

use super::enums::{ContractFamily, ContractType, LongShort, PutCallFwd};
use super::error::ContractError;
use super::generic::GenericContract;
use super::params::ContractParams;
use super::summary::ContractSummary;

/// Core trait for all contracts.
///
/// # Required Methods
///
/// - [`params`](ContractTrait::params) - Shared identity parameters
/// - [`contract_type`](ContractTrait::contract_type) - Contract kind
/// - [`timeline`](ContractTrait::timeline) - Observation times
/// - [`to_generic`](ContractTrait::to_generic) - Type-erased copy
/// - [`summary`](ContractTrait::summary) - Structured dump
///
/// All identity accessors are provided in terms of `params`.
pub trait ContractTrait<T: Float> {
    /// Return the shared identity parameters.
    fn params(&self) -> &ContractParams<T>;

    /// Return the contract kind.
    fn contract_type(&self) -> ContractType;

    /// Return the observation times, strictly increasing, ending at expiry.
    fn timeline(&self) -> Vec<T>;

    /// Convert into the generic representation.
    fn to_generic(&self) -> GenericContract<T>;

    /// Return a structured dump for diagnostics.
    fn summary(&self) -> ContractSummary;

    /// Return the contract family.
    #[inline]
    fn family(&self) -> ContractFamily {
        self.contract_type().family()
    }

    /// Return the underlying.
    #[inline]
    fn underlying<'a>(&'a self) -> &'a Underlying
    where
        T: 'a,
    {
        self.params().underlying()
    }

    /// Return the option direction.
    #[inline]
    fn option_type(&self) -> PutCallFwd {
        self.params().option_type()
    }

    /// Return the position.
    #[inline]
    fn longshort(&self) -> LongShort {
        self.params().longshort()
    }

    /// Return the strike.
    #[inline]
    fn strike(&self) -> T {
        self.params().strike()
    }

    /// Return the time to expiry.
    #[inline]
    fn expiry(&self) -> T {
        self.params().expiry()
    }

    /// Return the number of monitoring points.
    #[inline]
    fn num_mon(&self) -> usize {
        self.params().num_mon()
    }

    /// Return +1 for long and -1 for short.
    #[inline]
    fn sign(&self) -> T {
        self.params().sign()
    }
}

/// Contracts observing a single terminal price at expiry.
pub trait VanillaContract<T: Float>: ContractTrait<T> {
    /// Compute the signed payoff for the terminal price.
    fn payoff(&self, spot: T) -> T;
}

/// Contracts observing the underlying at every monitoring point.
pub trait PathDependentContract<T: Float>: ContractTrait<T> {
    /// Compute the signed payoff for the observed path.
    ///
    /// # Errors
    /// `ContractError::PathLength` if `prices.len() != num_mon()`.
    fn payoff(&self, prices: &[T]) -> Result<T, ContractError>;

    /// Reject paths whose length differs from the monitoring count.
    #[inline]
    fn check_path(&self, prices: &[T]) -> Result<(), ContractError> {
        if prices.len() == self.num_mon() {
            Ok(())
        } else {
            Err(ContractError::PathLength {
                expected: self.num_mon(),
                got: prices.len(),
            })
        }
    }
}
