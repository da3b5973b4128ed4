//! Payoff CLI - Command Line Front End for the Contract Payoff Engine
//!
//! # Commands
//!
//! - `payoff demo` - Evaluate the showcase book in concrete and generic form
//! - `payoff payoff --contract <type> ...` - Build one contract and evaluate it
//! - `payoff market --underlying <ticker>` - Snapshot a market model from configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires `pricer_models` contracts and
//! market models to configuration loaded through the `config` crate.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use crate::config::{CliSettings, LogLevel};

/// Contract payoff engine CLI
#[derive(Parser)]
#[command(name = "payoff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./payoff.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the showcase book over a sample price path
    Demo,

    /// Build one contract and evaluate its payoff
    Payoff(commands::payoff::PayoffArgs),

    /// Build a market model from configured market data
    Market(commands::market::MarketArgs),
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = CliSettings::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        settings.log_level
    };
    init_tracing(level.as_filter_str());

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Demo => commands::demo::run(),
        Commands::Payoff(args) => commands::payoff::run(&args),
        Commands::Market(args) => commands::market::run(&args, &settings.market),
    }
}
