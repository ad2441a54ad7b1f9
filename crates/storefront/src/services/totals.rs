//! Cart totals and coupons.
//!
//! Coupons are free text. Any code is "applied", but only two literal codes
//! change the numbers:
//!
//! | code     | discount                       |
//! |----------|--------------------------------|
//! | `SAVE10` | `round(subtotal × 0.10)`       |
//! | `FREE`   | [`FREE_DISCOUNT`], unclamped   |
//!
//! The payable total is never clamped, so `FREE` on a small cart goes
//! negative.

use rust_decimal::Decimal;
use thiserror::Error;

use qa_playground_core::Amount;

use crate::chaos::Chaos;
use crate::models::CartLine;

/// Ten percent off.
pub const SAVE10: &str = "SAVE10";

/// A fixed, absurdly large discount.
pub const FREE: &str = "FREE";

/// Discount granted by [`FREE`].
pub const FREE_DISCOUNT: i64 = 999_999;

/// Rate applied by [`SAVE10`].
const SAVE10_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Subtotal, discount, and payable total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Amount,
    pub discount: Amount,
    pub payable: Amount,
}

/// Compute totals for `lines` with the active `coupon`.
///
/// A line whose quantity is not a number makes the subtotal (and everything
/// derived from it) not a number.
#[must_use]
pub fn recalc(lines: &[CartLine], coupon: Option<&str>) -> Totals {
    let subtotal: Amount = lines.iter().map(CartLine::line_total).sum();

    let discount = match coupon {
        Some(SAVE10) => subtotal.scaled_rounded(SAVE10_RATE),
        Some(FREE) => Amount::Value(FREE_DISCOUNT),
        _ => Amount::ZERO,
    };

    Totals {
        subtotal,
        discount,
        payable: subtotal - discount,
    }
}

/// Coupon application failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponError {
    /// Chaos mode simulated an outage.
    #[error("Could not apply the coupon. Please retry.")]
    Unavailable,
}

/// Apply a coupon code.
///
/// The code is trimmed and stored verbatim; unknown codes succeed with no
/// effect. Returns the stored code.
///
/// # Errors
///
/// Returns `CouponError::Unavailable` when chaos fires; the active coupon is
/// left unchanged.
pub fn apply_coupon(
    chaos: &mut Chaos,
    coupon: &mut Option<String>,
    code: &str,
) -> Result<String, CouponError> {
    let code = code.trim();

    if chaos.maybe_chaos() {
        return Err(CouponError::Unavailable);
    }

    *coupon = Some(code.to_string());
    Ok(code.to_string())
}
