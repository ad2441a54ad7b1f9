//! Prices and computed money amounts.
//!
//! Catalog prices are whole currency units (rubles). Computed amounts
//! ([`Amount`]) follow the storefront's floating-point heritage: once any
//! operand is not a number, every result derived from it is not a number
//! either.

use core::fmt;
use core::ops::{Add, Sub};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::quantity::Quantity;

/// A catalog price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Currency sign shown after every price.
    pub const CURRENCY_SIGN: &'static str = "₽";

    /// Create a new price.
    #[must_use]
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Returns the price in whole currency units.
    #[must_use]
    pub const fn units(self) -> i64 {
        self.0
    }

    /// Price of `qty` items. Not a number when the quantity is not a number.
    #[must_use]
    pub fn times(self, qty: Quantity) -> Amount {
        qty.get()
            .map_or(Amount::NotANumber, |q| Amount::Value(self.0.saturating_mul(q)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, Self::CURRENCY_SIGN)
    }
}

/// A computed money amount (subtotal, discount, payable total).
///
/// Amounts are signed and unclamped: a discount larger than the subtotal
/// yields a negative payable total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Amount {
    /// A whole number of currency units.
    Value(i64),
    /// The result of arithmetic over a quantity that is not a number.
    #[default]
    NotANumber,
}

impl Amount {
    /// Zero currency units.
    pub const ZERO: Self = Self::Value(0);

    /// Returns the value, or `None` when not a number.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotANumber => None,
        }
    }

    /// Returns true if this amount is not a number.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::NotANumber)
    }

    /// Multiply by `rate` and round to whole units, halves toward positive
    /// infinity (`round(-0.5) == 0`, `round(0.5) == 1`).
    #[must_use]
    pub fn scaled_rounded(self, rate: Decimal) -> Self {
        let Self::Value(v) = self else {
            return Self::NotANumber;
        };
        let scaled = Decimal::from(v) * rate;
        (scaled + Decimal::new(5, 1))
            .floor()
            .to_i64()
            .map_or(Self::NotANumber, Self::Value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Value(a), Self::Value(b)) => Self::Value(a.saturating_add(b)),
            _ => Self::NotANumber,
        }
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Value(a), Self::Value(b)) => Self::Value(a.saturating_sub(b)),
            _ => Self::NotANumber,
        }
    }
}

impl core::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}
