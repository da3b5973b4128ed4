//! Property tests over randomly generated contracts and price paths.
//!
//! Covers sign symmetry, concrete/generic fidelity, timeline shape and
//! the digital boundary.

use pricer_models::contracts::{
    AmericanContract, AsianContract, Barrier, Contract, ContractTrait, EuropeanBarrierContract,
    EuropeanContract, EuropeanDigitalContract, ForwardContract, InOut, LongShort, PriceInput,
    PutCallFwd, UpDown, VanillaContract,
};
use proptest::prelude::*;

fn option_type_strategy() -> impl Strategy<Value = PutCallFwd> {
    prop_oneof![Just(PutCallFwd::Call), Just(PutCallFwd::Put)]
}

fn barrier_strategy() -> impl Strategy<Value = Barrier<f64>> {
    (
        0.1..10.0_f64,
        prop_oneof![Just(UpDown::Up), Just(UpDown::Down)],
        prop_oneof![Just(InOut::In), Just(InOut::Out)],
    )
        .prop_map(|(level, updown, inout)| Barrier::new(level, updown, inout))
}

/// Build one of the six kinds from shared parameters.
fn build(
    kind: usize,
    option_type: PutCallFwd,
    longshort: LongShort,
    strike: f64,
    expiry: f64,
    num_mon: usize,
    barrier: Barrier<f64>,
) -> Contract<f64> {
    match kind {
        0 => ForwardContract::new("X", longshort, strike, expiry)
            .unwrap()
            .into(),
        1 => EuropeanContract::new("X", option_type, longshort, strike, expiry)
            .unwrap()
            .into(),
        2 => AmericanContract::new("X", option_type, longshort, strike, expiry)
            .unwrap()
            .into(),
        3 => EuropeanDigitalContract::new("X", option_type, longshort, strike, expiry)
            .unwrap()
            .into(),
        4 => AsianContract::new("X", option_type, longshort, strike, expiry, num_mon)
            .unwrap()
            .into(),
        _ => EuropeanBarrierContract::new(
            "X",
            option_type,
            longshort,
            strike,
            expiry,
            num_mon,
            barrier,
        )
        .unwrap()
        .into(),
    }
}

fn input<'a>(contract: &Contract<f64>, path: &'a [f64]) -> PriceInput<'a, f64> {
    if contract.contract_type().is_path_dependent() {
        PriceInput::Path(path)
    } else {
        PriceInput::Spot(path[path.len() - 1])
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_short_is_negated_long(
        kind in 0usize..6,
        option_type in option_type_strategy(),
        strike in 0.1..10.0_f64,
        expiry in 0.1..5.0_f64,
        barrier in barrier_strategy(),
        path in prop::collection::vec(0.0..12.0_f64, 1..20),
    ) {
        let num_mon = path.len();
        let long = build(kind, option_type, LongShort::Long, strike, expiry, num_mon, barrier);
        let short = build(kind, option_type, LongShort::Short, strike, expiry, num_mon, barrier);

        let long_payoff = long.payoff(input(&long, &path)).unwrap();
        let short_payoff = short.payoff(input(&short, &path)).unwrap();
        prop_assert_eq!(short_payoff, -long_payoff);
    }

    #[test]
    fn test_generic_payoff_is_bit_identical(
        kind in 0usize..6,
        option_type in option_type_strategy(),
        longshort in prop_oneof![Just(LongShort::Long), Just(LongShort::Short)],
        strike in 0.1..10.0_f64,
        expiry in 0.1..5.0_f64,
        barrier in barrier_strategy(),
        path in prop::collection::vec(0.0..12.0_f64, 1..20),
    ) {
        let num_mon = path.len();
        let contract = build(kind, option_type, longshort, strike, expiry, num_mon, barrier);
        let generic = contract.to_generic();

        let concrete = contract.payoff(input(&contract, &path)).unwrap();
        let converted = generic.payoff(input(&contract, &path)).unwrap();
        prop_assert_eq!(concrete.to_bits(), converted.to_bits());
        prop_assert_eq!(generic.timeline(), contract.timeline());
    }

    #[test]
    fn test_timeline_shape(
        kind in 0usize..6,
        option_type in option_type_strategy(),
        expiry in 0.01..30.0_f64,
        num_mon in 1usize..400,
        barrier in barrier_strategy(),
    ) {
        let contract = build(kind, option_type, LongShort::Long, 1.0, expiry, num_mon, barrier);
        let timeline = contract.timeline();

        if contract.contract_type().is_path_dependent() {
            prop_assert_eq!(timeline.len(), num_mon);
        } else {
            prop_assert_eq!(timeline.len(), 1);
        }
        prop_assert!(timeline.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(timeline[timeline.len() - 1], expiry);
        prop_assert!(timeline[0] > 0.0);
    }

    #[test]
    fn test_digital_pays_nothing_at_strike(
        strike in -10.0..10.0_f64,
        option_type in option_type_strategy(),
    ) {
        let digital = EuropeanDigitalContract::new("X", option_type, LongShort::Long, strike, 1.0)
            .unwrap();
        prop_assert_eq!(digital.payoff(strike), 0.0);
    }

    #[test]
    fn test_wrong_path_length_is_rejected(
        num_mon in 2usize..20,
        option_type in option_type_strategy(),
        barrier in barrier_strategy(),
    ) {
        let contract = build(5, option_type, LongShort::Long, 1.0, 1.0, num_mon, barrier);
        let short_path = vec![1.0; num_mon - 1];
        prop_assert!(contract.payoff(PriceInput::Path(&short_path)).is_err());
        prop_assert!(contract.to_generic().payoff(PriceInput::Path(&short_path)).is_err());
    }
}
