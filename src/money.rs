//! Decimal-safe money arithmetic.
//!
//! [`Money`] wraps a [`Decimal`] that is always held at a scale of 2 (cents).
//! Every operation that can produce sub-cent precision (scalar multiplication,
//! percentages, pro-rata splits) computes at full `rust_decimal` precision and
//! rounds exactly once, half-up, back to cents. Addition and subtraction of
//! cent values are exact.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of decimal places carried by [`Money`].
pub const MONEY_SCALE: u32 = 2;

/// Rounds a decimal to cents using round-half-up (away from zero on a tie).
fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// A monetary amount with a fixed scale of two decimal places.
///
/// # Example
///
/// ```
/// use payroll_engine::money::Money;
/// use rust_decimal::Decimal;
///
/// let salary = Money::new(Decimal::new(60000, 2)); // 600.00
/// let tax = (salary - Money::new(Decimal::new(500, 0))).multiply(Decimal::new(10, 2));
/// assert_eq!(tax.to_string(), "10.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, MONEY_SCALE));

    /// Creates a money value, rounding half-up to cents.
    pub fn new(value: Decimal) -> Self {
        Money(round_to_cents(value))
    }

    /// Creates a money value from an integer number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Creates a money value from an optional decimal; `None` is zero.
    pub fn from_opt(value: Option<Decimal>) -> Self {
        value.map(Money::new).unwrap_or(Money::ZERO)
    }

    /// Returns the underlying decimal (always scale 2).
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount as an integer number of cents.
    pub fn to_cents(&self) -> i128 {
        self.0.mantissa()
    }

    /// Multiplies by a scalar and rounds the product once.
    pub fn multiply(self, factor: Decimal) -> Money {
        Money::new(self.0 * factor)
    }

    /// Returns `percent`% of this amount (e.g. `percent = 4` for 4%).
    pub fn percent_of(self, percent: Decimal) -> Money {
        Money::new(self.0 * percent / Decimal::ONE_HUNDRED)
    }

    /// Returns `self × numerator ÷ denominator`, rounded once.
    ///
    /// A zero denominator yields zero.
    pub fn pro_rata(self, numerator: Decimal, denominator: Decimal) -> Money {
        if denominator.is_zero() {
            return Money::ZERO;
        }
        Money::new(self.0 * numerator / denominator)
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    pub fn abs(self) -> Money {
        Money(self.0.abs())
    }

    /// Returns the amount clamped at zero from below.
    pub fn non_negative(self) -> Money {
        self.max(Money::ZERO)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}

/// Deserializes an optional decimal, treating `null` as zero.
///
/// Use with `#[serde(default, deserialize_with = "crate::money::null_as_zero")]`.
pub fn null_as_zero<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Money::from_opt)
}
