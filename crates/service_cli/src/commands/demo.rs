//! Demo command: the showcase book.
//!
//! Builds six trades, one per contract type, prints each dump, evaluates
//! it over a sample price path, then repeats the evaluation through the
//! generic form.
//!
//! # Expected Output
//!
//! ```text
//! {contract: FORWARD, underlying: Apple, type: FWD, longshort: SHORT, strike: 1, expiry: 2}
//! payoff: [2.0, 1.5, 1.0, 0.5, 0.0, -0.5, -1.0, -1.5, -2.0]
//! {contract: Generic, FORWARD, underlying: Apple, ...}
//! payoff: [2.0, 1.5, 1.0, 0.5, 0.0, -0.5, -1.0, -1.5, -2.0]
//! ...
//! ```

use pricer_models::contracts::{
    AmericanContract, AsianContract, Barrier, Contract, ContractTrait, EuropeanBarrierContract,
    EuropeanContract, EuropeanDigitalContract, ForwardContract, InOut, LongShort, PutCallFwd,
    UpDown,
};
use tracing::info;

use super::payoff::evaluate;
use crate::Result;

/// Sample path shared by every trade in the book.
pub const SAMPLE_PATH: [f64; 9] = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

/// Paths used for the barrier breach check: one stays below 2.7, one crosses it.
const BREACH_PATHS: [[f64; 4]; 2] = [[1.0, 2.0, 2.5, 2.0], [1.0, 2.0, 3.5, 2.0]];

/// Builds the showcase book.
///
/// Path-dependent trades monitor once per sample path entry.
pub fn book() -> Result<Vec<Contract<f64>>> {
    let num_mon = SAMPLE_PATH.len();

    Ok(vec![
        ForwardContract::new("Apple", LongShort::Short, 1.0, 2.0)?.into(),
        EuropeanContract::new("OTP", PutCallFwd::Call, LongShort::Long, 1.0, 2.0)?.into(),
        AmericanContract::new("Tesla", PutCallFwd::Call, LongShort::Long, 1.0, 2.0)?.into(),
        EuropeanDigitalContract::new("Mol", PutCallFwd::Call, LongShort::Long, 1.0, 2.0)?.into(),
        AsianContract::new("Microsoft", PutCallFwd::Call, LongShort::Long, 0.8, 2.0, num_mon)?
            .into(),
        EuropeanBarrierContract::new(
            "Deutsche Bank",
            PutCallFwd::Call,
            LongShort::Long,
            1.5,
            2.0,
            num_mon,
            Barrier::new(2.7, UpDown::Up, InOut::In),
        )?
        .into(),
    ])
}

/// Runs the showcase.
pub fn run() -> Result<()> {
    let book = book()?;
    info!(trades = book.len(), "evaluating showcase book");

    for contract in &book {
        let evaluation = evaluate(contract, &SAMPLE_PATH)?;
        let generic = contract.to_generic();

        println!("{}", contract);
        if let Some(barrier) = contract.as_barrier() {
            let checks: Vec<bool> = BREACH_PATHS.iter().map(|p| barrier.is_breached(p)).collect();
            println!("breached: {:?}", checks);
        }
        println!("payoff: {:?}", evaluation.concrete);

        println!("{}", generic);
        if contract.as_barrier().is_some() {
            let checks = BREACH_PATHS
                .iter()
                .map(|p| generic.is_breached(p))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            println!("breached: {:?}", checks);
        }
        println!("payoff: {:?}", evaluation.generic);
        println!();
    }

    Ok(())
}
