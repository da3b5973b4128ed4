//! Contract classification enums.
//!
//! Every enum parses case-insensitively from its textual label and
//! displays as the same upper-case label. A parse failure is a
//! [`ContractError::Validation`] naming the rejected parameter, so text
//! arriving from a CLI or configuration file fails exactly like a bad
//! constructor argument.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::ContractError;

/// Kind of contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ContractType {
    /// Linear forward
    Forward,
    /// European vanilla option
    European,
    /// American vanilla option (early exercise not modelled)
    American,
    /// European cash-or-nothing digital option
    Digital,
    /// Arithmetic-average Asian option
    Asian,
    /// European barrier option
    Barrier,
}

impl ContractType {
    /// All contract kinds in declaration order.
    pub const ALL: [ContractType; 6] = [
        ContractType::Forward,
        ContractType::European,
        ContractType::American,
        ContractType::Digital,
        ContractType::Asian,
        ContractType::Barrier,
    ];

    /// Returns the upper-case label.
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Forward => "FORWARD",
            ContractType::European => "EUROPEAN",
            ContractType::American => "AMERICAN",
            ContractType::Digital => "DIGITAL",
            ContractType::Asian => "ASIAN",
            ContractType::Barrier => "BARRIER",
        }
    }

    /// Returns the family this kind belongs to.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::contracts::{ContractFamily, ContractType};
    ///
    /// assert_eq!(ContractType::Digital.family(), ContractFamily::Vanilla);
    /// assert_eq!(ContractType::Barrier.family(), ContractFamily::PathDependent);
    /// ```
    pub fn family(&self) -> ContractFamily {
        match self {
            ContractType::Forward
            | ContractType::European
            | ContractType::American
            | ContractType::Digital => ContractFamily::Vanilla,
            ContractType::Asian | ContractType::Barrier => ContractFamily::PathDependent,
        }
    }

    /// Returns whether payoff needs the full observed path.
    #[inline]
    pub fn is_path_dependent(&self) -> bool {
        self.family() == ContractFamily::PathDependent
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContractType {
    type Err = ContractError;

    /// Parses a contract kind (case-insensitive).
    ///
    /// Accepts the short labels and the long `...OPTION` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['_', '-', ' '], "").as_str() {
            "FORWARD" | "FWD" => Ok(ContractType::Forward),
            "EUROPEAN" | "EUROPEANOPTION" => Ok(ContractType::European),
            "AMERICAN" | "AMERICANOPTION" => Ok(ContractType::American),
            "DIGITAL" | "EUROPEANDIGITAL" | "EUROPEANDIGITALOPTION" => Ok(ContractType::Digital),
            "ASIAN" | "ASIANOPTION" => Ok(ContractType::Asian),
            "BARRIER" | "EUROPEANBARRIER" | "EUROPEANBARRIEROPTION" => Ok(ContractType::Barrier),
            _ => Err(ContractError::validation(
                "contract type",
                format!("unknown contract type {}", s),
            )),
        }
    }
}

/// Contract family: single terminal observation or a monitored path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContractFamily {
    /// Timeline is `[expiry]`
    Vanilla,
    /// Timeline is `num_mon` equally spaced points ending at expiry
    PathDependent,
}

impl fmt::Display for ContractFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractFamily::Vanilla => f.write_str("VANILLA"),
            ContractFamily::PathDependent => f.write_str("PATH_DEPENDENT"),
        }
    }
}

/// Option direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum PutCallFwd {
    /// Put option
    Put,
    /// Call option
    Call,
    /// Forward (linear payoff)
    Fwd,
}

impl PutCallFwd {
    /// Returns whether this is an option direction (PUT or CALL).
    #[inline]
    pub fn is_option(&self) -> bool {
        matches!(self, PutCallFwd::Put | PutCallFwd::Call)
    }
}

impl fmt::Display for PutCallFwd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutCallFwd::Put => f.write_str("PUT"),
            PutCallFwd::Call => f.write_str("CALL"),
            PutCallFwd::Fwd => f.write_str("FWD"),
        }
    }
}

impl FromStr for PutCallFwd {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PUT" => Ok(PutCallFwd::Put),
            "CALL" => Ok(PutCallFwd::Call),
            "FWD" | "FORWARD" => Ok(PutCallFwd::Fwd),
            _ => Err(ContractError::validation(
                "option type",
                format!("must be PUT, CALL or FWD, got {}", s),
            )),
        }
    }
}

/// Position held in the contract.
///
/// # Examples
/// ```
/// use pricer_models::contracts::LongShort;
///
/// assert_eq!(LongShort::Long.sign::<f64>(), 1.0);
/// assert_eq!(LongShort::Short.sign::<f64>(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LongShort {
    /// Long position
    Long,
    /// Short position
    Short,
}

impl LongShort {
    /// Returns +1 for long and -1 for short.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            LongShort::Long => T::one(),
            LongShort::Short => -T::one(),
        }
    }

    /// Returns the opposite position.
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            LongShort::Long => LongShort::Short,
            LongShort::Short => LongShort::Long,
        }
    }
}

impl fmt::Display for LongShort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongShort::Long => f.write_str("LONG"),
            LongShort::Short => f.write_str("SHORT"),
        }
    }
}

impl FromStr for LongShort {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LONG" => Ok(LongShort::Long),
            "SHORT" => Ok(LongShort::Short),
            _ => Err(ContractError::validation(
                "longshort",
                format!("must be LONG or SHORT, got {}", s),
            )),
        }
    }
}

/// Barrier direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum UpDown {
    /// Breached when a price reaches the barrier from below
    Up,
    /// Breached when a price reaches the barrier from above
    Down,
}

impl fmt::Display for UpDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpDown::Up => f.write_str("UP"),
            UpDown::Down => f.write_str("DOWN"),
        }
    }
}

impl FromStr for UpDown {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UP" => Ok(UpDown::Up),
            "DOWN" => Ok(UpDown::Down),
            _ => Err(ContractError::validation(
                "updown",
                format!("must be UP or DOWN, got {}", s),
            )),
        }
    }
}

/// Barrier activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum InOut {
    /// Knock-in: pays only if the barrier was breached
    In,
    /// Knock-out: pays only if the barrier was never breached
    Out,
}

impl fmt::Display for InOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InOut::In => f.write_str("IN"),
            InOut::Out => f.write_str("OUT"),
        }
    }
}

impl FromStr for InOut {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "IN" => Ok(InOut::In),
            "OUT" => Ok(InOut::Out),
            _ => Err(ContractError::validation(
                "inout",
                format!("must be IN or OUT, got {}", s),
            )),
        }
    }
}
