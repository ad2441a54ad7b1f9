//! Cart line quantities.
//!
//! A quantity is a signed integer with no lower bound, or "not a number" when
//! it was set from text that does not start with an integer. Not-a-number is
//! persisted as JSON `null`, which is how JSON encodes `NaN`. Changing a
//! stored quantity reads that `null` back as zero.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A cart line quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Option<i64>);

impl Quantity {
    /// A single item.
    pub const ONE: Self = Self(Some(1));

    /// The quantity produced by unparsable input.
    pub const NOT_A_NUMBER: Self = Self(None);

    /// Create a quantity from an integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// Parse `text` as an integer the way HTML form input is parsed.
    ///
    /// Unparsable text yields [`Quantity::NOT_A_NUMBER`]. See [`parse_int`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(parse_int(text))
    }

    /// Parse `text`, falling back to `fallback` when it is not a number.
    #[must_use]
    pub fn parse_or(text: &str, fallback: Self) -> Self {
        parse_int(text).map_or(fallback, Self::new)
    }

    /// Returns the integer value, or `None` when not a number.
    #[must_use]
    pub const fn get(self) -> Option<i64> {
        self.0
    }

    /// Returns true if this quantity is not a number.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0.is_none()
    }

    /// Add another quantity. Not a number if either side is.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Self(Some(a.saturating_add(b))),
            _ => Self::NOT_A_NUMBER,
        }
    }

    /// The stored value, with not-a-number read as zero.
    #[must_use]
    pub const fn or_zero(self) -> Self {
        Self(Some(self.badge_units()))
    }

    /// One more. No upper bound. Not-a-number counts as zero.
    #[must_use]
    pub fn incremented(self) -> Self {
        self.or_zero().plus(Self::ONE)
    }

    /// One less. No lower bound; zero and negative values are kept.
    /// Not-a-number counts as zero.
    #[must_use]
    pub fn decremented(self) -> Self {
        self.or_zero().plus(Self::new(-1))
    }

    /// Contribution to the cart badge: the stored value, zero when not a number.
    #[must_use]
    pub const fn badge_units(self) -> i64 {
        match self.0 {
            Some(value) => value,
            None => 0,
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("NaN"),
        }
    }
}

/// Parse the leading integer of `text` in base 10.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is accepted, then
/// the longest run of ASCII digits is taken and everything after it ignored
/// (`"12abc"` is 12, `"3.7"` is 3). Returns `None` when no digit follows.
/// Values beyond the `i64` range saturate.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = rest.strip_prefix('-').map_or_else(
        || (false, rest.strip_prefix('+').unwrap_or(rest)),
        |unsigned| (true, unsigned),
    );

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = rest.get(..digits_len)?;

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
