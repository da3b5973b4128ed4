//! # Pricer Models (L2: Business Logic)
//!
//! Contract taxonomy, payoff evaluation and the market model.
//!
//! This crate provides:
//! - Contract definitions (forward, European/American vanilla, digital,
//!   Asian, European barrier) sharing one [`ContractTrait`](contracts::ContractTrait)
//! - A type-erased [`GenericContract`](contracts::GenericContract) whose
//!   payoff agrees bit-for-bit with the concrete contract it came from
//! - A single-underlying [`MarketModel`](models::MarketModel) with
//!   additive bumps for sensitivity runs
//!
//! ## Design Principles
//!
//! - **Enum-based contracts** for static dispatch
//! - **Exact payoff kernels** shared by the concrete and generic forms
//! - **Validation at construction**, fallible payoffs only where the price
//!   input can be malformed
//!
//! ## Example
//!
//! ```
//! use pricer_models::contracts::{
//!     ContractTrait, EuropeanContract, LongShort, PriceInput, PutCallFwd, VanillaContract,
//! };
//!
//! let call = EuropeanContract::new("OTP", PutCallFwd::Call, LongShort::Long, 1.0_f64, 2.0).unwrap();
//! assert_eq!(call.timeline(), vec![2.0]);
//! assert_eq!(call.payoff(2.5), 1.5);
//! assert_eq!(call.to_generic().payoff(PriceInput::Spot(2.5)).unwrap(), 1.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod contracts;
pub mod models;
