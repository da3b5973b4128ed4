//! Structured contract dump for diagnostics.

use std::fmt;

use num_traits::Float;
use pricer_core::types::Underlying;

use super::enums::{InOut, LongShort, PutCallFwd, UpDown};
use super::params::{to_f64, ContractParams};
use super::payoff::Barrier;

/// Flat, serialisable view of a contract.
///
/// Numeric fields are stored as `f64` so summaries of contracts over any
/// float type print and serialise the same way.
/// The barrier block is present only for barrier contracts and for the
/// generic form, which always reports it (level `inf` and no direction or
/// activation when the kind has no barrier).
///
/// # Examples
/// ```
/// use pricer_models::contracts::{ContractTrait, EuropeanContract, LongShort, PutCallFwd};
///
/// let trade = EuropeanContract::new("OTP", PutCallFwd::Call, LongShort::Long, 1.0_f64, 2.0).unwrap();
/// assert_eq!(
///     trade.summary().to_string(),
///     "{contract: EUROPEAN, underlying: OTP, type: CALL, longshort: LONG, strike: 1, expiry: 2}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractSummary {
    /// Contract label, prefixed with `Generic, ` for the generic form
    pub contract: String,
    /// Underlying name
    pub underlying: Underlying,
    /// Option direction
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub option_type: PutCallFwd,
    /// Position
    pub longshort: LongShort,
    /// Strike
    pub strike: f64,
    /// Time to expiry
    pub expiry: f64,
    /// Number of monitoring points
    pub num_mon: usize,
    /// Barrier level, when reported
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none", with = "barrier_level")
    )]
    pub barrier: Option<f64>,
    /// Barrier direction
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub updown: Option<UpDown>,
    /// Barrier activation
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub inout: Option<InOut>,
}

impl ContractSummary {
    pub(crate) fn from_params<T: Float>(contract: String, params: &ContractParams<T>) -> Self {
        Self {
            contract,
            underlying: params.underlying().clone(),
            option_type: params.option_type(),
            longshort: params.longshort(),
            strike: to_f64(params.strike()),
            expiry: to_f64(params.expiry()),
            num_mon: params.num_mon(),
            barrier: None,
            updown: None,
            inout: None,
        }
    }

    pub(crate) fn with_barrier<T: Float>(mut self, barrier: &Barrier<T>) -> Self {
        self.barrier = Some(to_f64(barrier.level()));
        self.updown = Some(barrier.updown());
        self.inout = Some(barrier.inout());
        self
    }
}

/// Non-finite levels travel as strings (`"inf"`), which JSON numbers cannot hold.
#[cfg(feature = "serde")]
mod barrier_level {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Level {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(level: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match level {
            Some(x) if x.is_finite() => serializer.serialize_f64(*x),
            Some(x) => Level::Text(x.to_string()).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Level>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Level::Number(x)) => Ok(Some(x)),
            Some(Level::Text(s)) => s
                .parse::<f64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid barrier level '{}'", s))),
        }
    }
}

struct OrNone<'a, D>(&'a Option<D>);

impl<D: fmt::Display> fmt::Display for OrNone<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for ContractSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{contract: {}, underlying: {}, type: {}, longshort: {}, strike: {}, expiry: {}",
            self.contract, self.underlying, self.option_type, self.longshort, self.strike, self.expiry
        )?;
        if self.num_mon > 1 {
            write!(f, ", num_mon: {}", self.num_mon)?;
        }
        if let Some(barrier) = self.barrier {
            write!(
                f,
                ", barrier: {}, updown: {}, inout: {}",
                barrier,
                OrNone(&self.updown),
                OrNone(&self.inout)
            )?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ContractParams<f64> {
        ContractParams::new("Deutsche Bank", PutCallFwd::Call, LongShort::Long, 1.5, 2.0, 9)
            .unwrap()
    }

    #[test]
    fn test_display_with_barrier() {
        let summary = ContractSummary::from_params("BARRIER".to_string(), &params())
            .with_barrier(&Barrier::new(2.7, UpDown::Up, InOut::In));
        assert_eq!(
            summary.to_string(),
            "{contract: BARRIER, underlying: Deutsche Bank, type: CALL, longshort: LONG, \
             strike: 1.5, expiry: 2, num_mon: 9, barrier: 2.7, updown: UP, inout: IN}"
        );
    }

    #[test]
    fn test_display_missing_barrier_fields() {
        let mut summary = ContractSummary::from_params("Generic, ASIAN".to_string(), &params());
        summary.barrier = Some(f64::INFINITY);
        assert!(summary
            .to_string()
            .ends_with("barrier: inf, updown: None, inout: None}"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_skips_absent_barrier() {
        let summary = ContractSummary::from_params("ASIAN".to_string(), &params());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["contract"], "ASIAN");
        assert_eq!(json["type"], "CALL");
        assert_eq!(json["longshort"], "LONG");
        assert_eq!(json["underlying"], "Deutsche Bank");
        assert!(json.get("barrier").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_generic_summary_survives_json() {
        use crate::contracts::{ContractTrait, ForwardContract};

        let forward = ForwardContract::new("OTP", LongShort::Long, 1.0_f64, 2.0).unwrap();
        let summary = forward.to_generic().summary();
        assert_eq!(summary.barrier, Some(f64::INFINITY));

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""barrier":"inf""#));

        let back: ContractSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
        assert_eq!(back.to_string(), summary.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_finite_barrier_stays_numeric() {
        let summary = ContractSummary::from_params("BARRIER".to_string(), &params())
            .with_barrier(&Barrier::new(2.7, UpDown::Down, InOut::Out));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["barrier"], 2.7);

        let back: ContractSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);

        let bad = r#"{"contract":"X","underlying":"X","type":"CALL","longshort":"LONG",
            "strike":1.0,"expiry":1.0,"num_mon":1,"barrier":"high"}"#;
        assert!(serde_json::from_str::<ContractSummary>(bad).is_err());
    }
}
