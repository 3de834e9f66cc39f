//! Rupee money type with precise decimal arithmetic
//!
//! All monetary values in the ledger are rupee amounts backed by
//! rust_decimal, so repeated small entries never accumulate binary
//! floating-point drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A rupee amount stored with paise (two decimal place) precision
///
/// The ledger is single-currency; amounts carry no currency tag. Values
/// round to two decimal places on construction so sums over arbitrarily
/// many entries stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new amount, rounding to paise precision
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(2))
    }

    /// Creates an amount from whole rupees
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::new(rupees, 0))
    }

    /// Creates an amount from paise (minor units)
    pub fn from_paise(paise: i64) -> Self {
        Self(Decimal::new(paise, 2))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiplies by a scalar (e.g., a rate)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.0 / divisor))
    }

    /// Formats the amount with Indian digit grouping, e.g. `1,20,500`
    ///
    /// The last three integer digits form one group; the remaining digits
    /// group in pairs. Paise are shown only when non-zero.
    pub fn to_inr_string(&self) -> String {
        let rounded = self.0.round_dp(2);
        let negative = rounded.is_sign_negative();
        let abs = rounded.abs();
        let int_part = abs.trunc();
        let frac = abs.fract();

        let grouped = group_indian(&int_part.to_string());

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&grouped);
        if !frac.is_zero() {
            // round() yields scale 0, so the mantissa is the paise count
            let paise = (frac * dec!(100)).round().mantissa();
            out.push_str(&format!(".{paise:02}"));
        }
        out
    }
}

/// Groups an unsigned digit string in the Indian style: last three digits,
/// then pairs.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.to_inr_string())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_sum_matches_paise_sum(amounts in prop::collection::vec(-1_000_000i64..1_000_000i64, 1..200)) {
            let total: Money = amounts.iter().map(|p| Money::from_paise(*p)).sum();
            let expected: i64 = amounts.iter().sum();
            prop_assert_eq!(total, Money::from_paise(expected));
        }

        #[test]
        fn money_arithmetic_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_paise(a);
            let mb = Money::from_paise(b);
            let mc = Money::from_paise(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn grouping_round_trips_digits(n in 0i64..10_000_000_000i64) {
            let grouped = Money::from_rupees(n).to_inr_string();
            let stripped: String = grouped.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(stripped, n.to_string());
        }
    }
}
