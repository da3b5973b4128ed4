//! Payoff command implementation
//!
//! Builds one contract from textual arguments and evaluates it in concrete
//! and generic form.

use clap::Args;
use pricer_models::contracts::{
    AmericanContract, AsianContract, Barrier, Contract, ContractTrait, ContractType,
    EuropeanBarrierContract, EuropeanContract, EuropeanDigitalContract, ForwardContract, InOut,
    LongShort, PriceInput, PutCallFwd, UpDown,
};
use tracing::info;

use crate::{CliError, Result};

/// Arguments of the `payoff` command
#[derive(Debug, Clone, Args)]
pub struct PayoffArgs {
    /// Contract type (forward, european, american, digital, asian, barrier)
    #[arg(long)]
    pub contract: String,

    /// Underlying ticker
    #[arg(short, long)]
    pub underlying: String,

    /// Option type (CALL, PUT); ignored for forwards
    #[arg(long, default_value = "CALL")]
    pub option_type: String,

    /// Position (LONG, SHORT)
    #[arg(long, default_value = "LONG")]
    pub longshort: String,

    /// Strike price
    #[arg(long, allow_hyphen_values = true)]
    pub strike: f64,

    /// Expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Monitoring points for path-dependent contracts
    #[arg(long, default_value_t = 1)]
    pub num_mon: usize,

    /// Barrier level (barrier contracts only)
    #[arg(long)]
    pub barrier: Option<f64>,

    /// Barrier direction (UP, DOWN)
    #[arg(long)]
    pub updown: Option<String>,

    /// Barrier effect (IN, OUT)
    #[arg(long)]
    pub inout: Option<String>,

    /// Comma-separated prices: terminal spots for vanilla contracts,
    /// the monitored path otherwise
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub prices: Vec<f64>,
}

/// Concrete and generic payoffs of one contract
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub timeline: Vec<f64>,
    pub concrete: Vec<f64>,
    pub generic: Vec<f64>,
}

/// Build the contract described by `args`.
pub fn build_contract(args: &PayoffArgs) -> Result<Contract<f64>> {
    let kind: ContractType = args.contract.parse()?;
    let longshort: LongShort = args.longshort.parse()?;
    let underlying = args.underlying.as_str();

    let contract = match kind {
        ContractType::Forward => {
            ForwardContract::new(underlying, longshort, args.strike, args.expiry)?.into()
        }
        ContractType::European => {
            let option_type: PutCallFwd = args.option_type.parse()?;
            EuropeanContract::new(underlying, option_type, longshort, args.strike, args.expiry)?
                .into()
        }
        ContractType::American => {
            let option_type: PutCallFwd = args.option_type.parse()?;
            AmericanContract::new(underlying, option_type, longshort, args.strike, args.expiry)?
                .into()
        }
        ContractType::Digital => {
            let option_type: PutCallFwd = args.option_type.parse()?;
            EuropeanDigitalContract::new(
                underlying,
                option_type,
                longshort,
                args.strike,
                args.expiry,
            )?
            .into()
        }
        ContractType::Asian => {
            let option_type: PutCallFwd = args.option_type.parse()?;
            AsianContract::new(
                underlying,
                option_type,
                longshort,
                args.strike,
                args.expiry,
                args.num_mon,
            )?
            .into()
        }
        ContractType::Barrier => {
            let option_type: PutCallFwd = args.option_type.parse()?;
            EuropeanBarrierContract::new(
                underlying,
                option_type,
                longshort,
                args.strike,
                args.expiry,
                args.num_mon,
                barrier_from_args(args)?,
            )?
            .into()
        }
    };

    Ok(contract)
}

fn barrier_from_args(args: &PayoffArgs) -> Result<Barrier<f64>> {
    let missing = |flag: &str| CliError::InvalidArgument(format!("barrier contracts need --{}", flag));

    let level = args.barrier.ok_or_else(|| missing("barrier"))?;
    let updown: UpDown = args.updown.as_deref().ok_or_else(|| missing("updown"))?.parse()?;
    let inout: InOut = args.inout.as_deref().ok_or_else(|| missing("inout"))?.parse()?;
    Ok(Barrier::new(level, updown, inout))
}

/// Evaluate `contract` over `prices` in both forms.
///
/// Vanilla contracts are evaluated once per price; path-dependent
/// contracts take `prices` as their monitored path.
pub fn evaluate(contract: &Contract<f64>, prices: &[f64]) -> Result<Evaluation> {
    let generic = contract.to_generic();

    let inputs: Vec<PriceInput<'_, f64>> = if contract.contract_type().is_path_dependent() {
        vec![PriceInput::Path(prices)]
    } else {
        prices.iter().map(|&s| PriceInput::Spot(s)).collect()
    };

    let concrete = inputs
        .iter()
        .map(|&input| contract.payoff(input))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let converted = inputs
        .iter()
        .map(|&input| generic.payoff(input))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Evaluation {
        timeline: contract.timeline(),
        concrete,
        generic: converted,
    })
}

/// Run the payoff command
pub fn run(args: &PayoffArgs) -> Result<()> {
    info!(contract = %args.contract, underlying = %args.underlying, "building contract");

    let contract = build_contract(args)?;
    let evaluation = evaluate(&contract, &args.prices)?;

    println!("{}", contract);
    println!("timeline: {:?}", evaluation.timeline);
    println!("payoff:   {:?}", evaluation.concrete);
    println!("{}", contract.to_generic());
    println!("payoff:   {:?}", evaluation.generic);

    if let Some(barrier) = contract.as_barrier() {
        println!("breached: {}", barrier.is_breached(&args.prices));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::contracts::ContractError;

    fn payoff_args(contract: &str) -> PayoffArgs {
        PayoffArgs {
            contract: contract.to_string(),
            underlying: "OTP".to_string(),
            option_type: "CALL".to_string(),
            longshort: "LONG".to_string(),
            strike: 1.0,
            expiry: 2.0,
            num_mon: 1,
            barrier: None,
            updown: None,
            inout: None,
            prices: vec![0.5, 1.0, 1.5],
        }
    }

    #[test]
    fn test_vanilla_evaluation() {
        let args = payoff_args("european");
        let contract = build_contract(&args).unwrap();
        let evaluation = evaluate(&contract, &args.prices).unwrap();

        assert_eq!(evaluation.timeline, vec![2.0]);
        assert_eq!(evaluation.concrete, vec![0.0, 0.0, 0.5]);
        assert_eq!(evaluation.concrete, evaluation.generic);
    }

    #[test]
    fn test_forward_ignores_option_type() {
        let mut args = payoff_args("forward");
        args.option_type = "anything".to_string();
        args.longshort = "short".to_string();
        let contract = build_contract(&args).unwrap();
        let evaluation = evaluate(&contract, &args.prices).unwrap();
        assert_eq!(evaluation.concrete, vec![0.5, 0.0, -0.5]);
    }

    #[test]
    fn test_asian_uses_prices_as_path() {
        let mut args = payoff_args("asian");
        args.num_mon = 3;
        args.strike = 0.8;
        let contract = build_contract(&args).unwrap();
        let evaluation = evaluate(&contract, &args.prices).unwrap();

        assert_eq!(evaluation.timeline.len(), 3);
        assert_eq!(evaluation.concrete.len(), 1);
        approx::assert_relative_eq!(evaluation.concrete[0], 0.2, epsilon = 1e-12);
        assert_eq!(evaluation.concrete, evaluation.generic);
    }

    #[test]
    fn test_barrier_requires_flags() {
        let mut args = payoff_args("barrier");
        args.num_mon = 3;
        assert!(matches!(
            build_contract(&args),
            Err(CliError::InvalidArgument(_))
        ));

        args.barrier = Some(1.2);
        args.updown = Some("up".to_string());
        args.inout = Some("in".to_string());
        let contract = build_contract(&args).unwrap();
        let evaluation = evaluate(&contract, &args.prices).unwrap();
        assert_eq!(evaluation.concrete, vec![0.5]);
    }

    #[test]
    fn test_invalid_enum_is_validation_error() {
        let mut args = payoff_args("european");
        args.longshort = "flat".to_string();
        match build_contract(&args) {
            Err(CliError::Contract(ContractError::Validation { parameter, .. })) => {
                assert_eq!(parameter, "longshort")
            }
            other => panic!("Expected validation error, got {:?}", other),
        }

        assert!(matches!(
            build_contract(&payoff_args("swaption")),
            Err(CliError::Contract(ContractError::Validation { .. }))
        ));
    }

    #[test]
    fn test_wrong_path_length() {
        let mut args = payoff_args("asian");
        args.num_mon = 4;
        let contract = build_contract(&args).unwrap();
        assert!(matches!(
            evaluate(&contract, &args.prices),
            Err(CliError::Contract(ContractError::PathLength { .. }))
        ));
    }
}
