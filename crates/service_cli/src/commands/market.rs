//! Market command implementation
//!
//! Snapshots one underlying from the configured market data into a
//! market model and reports its discount factor and volatility.

use clap::Args;
use pricer_models::models::{MarketModel, VolModel};
use tracing::info;

use crate::config::MarketSettings;
use crate::{CliError, Result};

/// Arguments of the `market` command
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    /// Underlying ticker
    #[arg(short, long)]
    pub underlying: String,

    /// Volatility model (flat, black-scholes)
    #[arg(short, long, default_value = "flat")]
    pub model: String,

    /// Discounting tenor in years
    #[arg(long, default_value_t = 1.0)]
    pub tenor: f64,

    /// Strike of the volatility query; defaults to spot
    #[arg(long)]
    pub strike: Option<f64>,

    /// Expiry of the volatility query
    #[arg(long, default_value_t = 1.0)]
    pub expiry: f64,

    /// Additive bump to the risk-free rate
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub rate_bump: f64,

    /// Additive bump to spot
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub spot_bump: f64,

    /// Additive bump to every grid volatility
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub vol_bump: f64,
}

/// Figures reported by the market command
#[derive(Debug, Clone, PartialEq)]
pub struct MarketReport {
    pub risk_free_rate: f64,
    pub spot: f64,
    pub discount_factor: f64,
    pub volatility: f64,
}

/// Parse a volatility model name.
pub fn parse_vol_model(name: &str) -> Result<VolModel> {
    match name.to_lowercase().replace(['-', ' '], "_").as_str() {
        "flat" => Ok(VolModel::Flat),
        "black_scholes" | "bs" => Ok(VolModel::BlackScholes),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown volatility model: {}. Supported: flat, black-scholes",
            other
        ))),
    }
}

/// Build the bumped market model and evaluate it.
pub fn snapshot(args: &MarketArgs, settings: &MarketSettings) -> Result<MarketReport> {
    let provider = settings.to_market_data()?;
    let vol_model = parse_vol_model(&args.model)?;

    let mut model = MarketModel::new(&provider, args.underlying.as_str(), vol_model)?;
    if args.rate_bump != 0.0 {
        model.bump_rate(args.rate_bump);
    }
    if args.spot_bump != 0.0 {
        model.bump_spot(args.spot_bump);
    }
    if args.vol_bump != 0.0 {
        model.bump_vol_grid(args.vol_bump);
    }

    let strike = args.strike.unwrap_or_else(|| model.spot());
    Ok(MarketReport {
        risk_free_rate: model.risk_free_rate(),
        spot: model.spot(),
        discount_factor: model.discount_factor(args.tenor),
        volatility: model.volatility(strike, args.expiry)?,
    })
}

/// Run the market command
pub fn run(args: &MarketArgs, settings: &MarketSettings) -> Result<()> {
    info!(underlying = %args.underlying, model = %args.model, "building market model");

    let report = snapshot(args, settings)?;

    println!("underlying:      {}", args.underlying);
    println!("model:           {}", parse_vol_model(&args.model)?);
    println!("risk-free rate:  {:.6}", report.risk_free_rate);
    println!("spot:            {:.6}", report.spot);
    println!("discount factor: {:.6} (tenor {})", report.discount_factor, args.tenor);
    println!("volatility:      {:.6}", report.volatility);

    Ok(())
}
