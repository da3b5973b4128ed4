//! CLI configuration management
//!
//! Settings are layered, lowest priority first:
//! 1. Built-in defaults
//! 2. A TOML file (`payoff.toml`, or the path given with `--config`)
//! 3. Environment variables prefixed `PAYOFF_`, nested keys joined by `__`

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ::config::{Config, Environment, File, FileFormat};
use pricer_core::market_data::{StaticMarketData, VolGrid};
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "payoff.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "PAYOFF";

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Top-level CLI settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    /// Default tracing level; `RUST_LOG` still wins when set
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Market data served to the `market` command
    pub market: MarketSettings,
}

/// Market data section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketSettings {
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Per-underlying spot and volatility grid
    pub underlyings: Vec<UnderlyingSettings>,
}

/// Market data for one underlying
#[derive(Debug, Clone, Deserialize)]
pub struct UnderlyingSettings {
    /// Ticker
    pub name: String,
    /// Spot price
    pub spot: f64,
    /// Volatility grid
    pub vol_grid: VolGridSettings,
}

/// Raw volatility grid: `values[expiry_idx][strike_idx]`
#[derive(Debug, Clone, Deserialize)]
pub struct VolGridSettings {
    pub strikes: Vec<f64>,
    pub expiries: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.05,
            underlyings: vec![UnderlyingSettings {
                name: "OTP".to_string(),
                spot: 1.0,
                vol_grid: VolGridSettings {
                    strikes: vec![0.5, 1.0, 1.5, 2.0],
                    expiries: vec![0.5, 1.0, 2.0],
                    values: vec![
                        vec![0.24, 0.22, 0.21, 0.22],
                        vec![0.23, 0.21, 0.20, 0.21],
                        vec![0.22, 0.20, 0.19, 0.20],
                    ],
                },
            }],
        }
    }
}

impl MarketSettings {
    /// Build a market data provider, validating every grid.
    pub fn to_market_data(&self) -> Result<StaticMarketData<f64>> {
        let mut market = StaticMarketData::new(self.risk_free_rate);
        for entry in &self.underlyings {
            let grid = VolGrid::from_rows(
                entry.vol_grid.strikes.clone(),
                entry.vol_grid.expiries.clone(),
                entry.vol_grid.values.clone(),
            )?;
            market = market
                .with_spot(entry.name.as_str(), entry.spot)
                .with_vol_grid(entry.name.as_str(), grid);
        }
        Ok(market)
    }
}

impl CliSettings {
    /// Load settings from all sources.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if required && !file.exists() {
            return Err(CliError::FileNotFound(file.display().to_string()));
        }

        let settings: CliSettings = Config::builder()
            .add_source(
                File::from(file.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        debug!(
            file = %file.display(),
            log_level = %settings.log_level,
            underlyings = settings.market.underlyings.len(),
            "settings loaded"
        );
        Ok(settings)
    }
}
