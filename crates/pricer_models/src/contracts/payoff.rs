//! Exact payoff kernels.
//!
//! Both the concrete contracts and [`GenericContract`](super::GenericContract)
//! evaluate through the functions in this module, with the operations
//! applied in the same order, so a contract and its generic form return
//! bit-identical payoffs.

use num_traits::Float;

use super::enums::{ContractType, InOut, PutCallFwd, UpDown};

/// Terminal payoff shape.
///
/// Unlike a smoothed kernel, every variant is evaluated exactly:
/// digitals pay `1[x > 0]`, so both the digital call and the digital put
/// pay zero when spot equals strike.
///
/// # Examples
/// ```
/// use pricer_models::contracts::PayoffType;
///
/// assert_eq!(PayoffType::Call.evaluate(2.5_f64, 1.0), 1.5);
/// assert_eq!(PayoffType::Put.evaluate(2.5_f64, 1.0), 0.0);
/// assert_eq!(PayoffType::DigitalCall.evaluate(1.0_f64, 1.0), 0.0);
/// assert_eq!(PayoffType::Linear.evaluate(0.5_f64, 1.0), -0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoffType {
    /// S - K
    Linear,
    /// max(S - K, 0)
    Call,
    /// max(K - S, 0)
    Put,
    /// 1 if S > K else 0
    DigitalCall,
    /// 1 if S < K else 0
    DigitalPut,
}

impl PayoffType {
    /// Selects the kernel for a contract kind and option direction.
    pub fn for_contract(kind: ContractType, option_type: PutCallFwd) -> Self {
        match (kind, option_type) {
            (ContractType::Forward, _) | (_, PutCallFwd::Fwd) => PayoffType::Linear,
            (ContractType::Digital, PutCallFwd::Call) => PayoffType::DigitalCall,
            (ContractType::Digital, PutCallFwd::Put) => PayoffType::DigitalPut,
            (_, PutCallFwd::Call) => PayoffType::Call,
            (_, PutCallFwd::Put) => PayoffType::Put,
        }
    }

    /// Evaluates the unsigned payoff for a terminal (or averaged) price.
    #[inline]
    pub fn evaluate<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            PayoffType::Linear => spot - strike,
            PayoffType::Call => (spot - strike).max(zero),
            PayoffType::Put => (strike - spot).max(zero),
            PayoffType::DigitalCall => indicator(spot - strike > zero),
            PayoffType::DigitalPut => indicator(strike - spot > zero),
        }
    }
}

#[inline]
fn indicator<T: Float>(condition: bool) -> T {
    if condition {
        T::one()
    } else {
        T::zero()
    }
}

/// Arithmetic mean of the observed prices.
///
/// Returns NaN for an empty slice.
///
/// # Examples
/// ```
/// use pricer_models::contracts::arithmetic_mean;
///
/// assert_eq!(arithmetic_mean(&[-1.0_f64, 0.0, 1.0, 2.0, 3.0]), 1.0);
/// ```
#[inline]
pub fn arithmetic_mean<T: Float>(prices: &[T]) -> T {
    let (sum, count) = prices
        .iter()
        .fold((T::zero(), T::zero()), |(sum, count), &p| {
            (sum + p, count + T::one())
        });
    sum / count
}

/// Barrier level, direction and activation.
///
/// # Examples
/// ```
/// use pricer_models::contracts::{Barrier, InOut, UpDown};
///
/// let barrier = Barrier::new(2.7_f64, UpDown::Up, InOut::In);
/// assert!(!barrier.is_breached(&[1.0, 2.0, 2.5, 2.0]));
/// assert!(barrier.is_breached(&[1.0, 2.0, 3.5, 2.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier<T: Float> {
    level: T,
    updown: UpDown,
    inout: InOut,
}

impl<T: Float> Barrier<T> {
    /// Creates a barrier specification.
    pub fn new(level: T, updown: UpDown, inout: InOut) -> Self {
        Self {
            level,
            updown,
            inout,
        }
    }

    /// Returns the barrier level.
    #[inline]
    pub fn level(&self) -> T {
        self.level
    }

    /// Returns the barrier direction.
    #[inline]
    pub fn updown(&self) -> UpDown {
        self.updown
    }

    /// Returns the barrier activation.
    #[inline]
    pub fn inout(&self) -> InOut {
        self.inout
    }

    /// UP: any price at or above the level. DOWN: any price at or below it.
    pub fn is_breached(&self, prices: &[T]) -> bool {
        match self.updown {
            UpDown::Up => prices.iter().any(|&p| p >= self.level),
            UpDown::Down => prices.iter().any(|&p| p <= self.level),
        }
    }

    /// 1 for a breached knock-in or an unbreached knock-out, 0 otherwise.
    #[inline]
    pub fn multiplier(&self, breached: bool) -> T {
        match self.inout {
            InOut::In => indicator(breached),
            InOut::Out => indicator(!breached),
        }
    }
}

/// Signed terminal payoff.
#[inline]
pub(crate) fn terminal_payoff<T: Float>(kernel: PayoffType, sign: T, spot: T, strike: T) -> T {
    sign * kernel.evaluate(spot, strike)
}

/// Signed arithmetic-average payoff.
#[inline]
pub(crate) fn average_payoff<T: Float>(kernel: PayoffType, sign: T, prices: &[T], strike: T) -> T {
    sign * kernel.evaluate(arithmetic_mean(prices), strike)
}

/// Signed barrier payoff on the last observed price.
#[inline]
pub(crate) fn barrier_payoff<T: Float>(
    kernel: PayoffType,
    barrier: &Barrier<T>,
    sign: T,
    prices: &[T],
    strike: T,
) -> T {
    let multiplier = barrier.multiplier(barrier.is_breached(prices));
    let last = prices.last().copied().unwrap_or_else(T::nan);
    multiplier * sign * kernel.evaluate(last, strike)
}
