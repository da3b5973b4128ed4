//! Underlying asset identifiers.
//!
//! An [`Underlying`] names the asset (ticker or free-form name) whose price
//! drives a contract's payoff and keys the market data lookups.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::Underlying;
//!
//! let tesla: Underlying = "Tesla".parse().unwrap();
//! assert_eq!(tesla.as_str(), "Tesla");
//! assert_eq!(tesla, Underlying::new("Tesla"));
//! ```

use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of an underlying asset.
///
/// Compared by exact name; no case folding is applied since tickers such as
/// `"OTP"` and names such as `"Deutsche Bank"` are used verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Underlying(String);

impl Underlying {
    /// Create an underlying identifier from any string-like name.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Underlying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Underlying {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Underlying {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Underlying {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Underlying {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Underlying {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
