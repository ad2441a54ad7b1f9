//! Checkout gate.
//!
//! Checkout only validates: a logged-in session, a non-empty cart, then a
//! chaos roll standing in for the payment provider. No order is created.

use thiserror::Error;

use crate::chaos::Chaos;
use crate::models::UserSummary;
use crate::store::Store;

/// Checkout failures, checked in declaration order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// No user is logged in.
    #[error("Log in to place an order.")]
    NotLoggedIn,

    /// The cart has no lines.
    #[error("Cart is empty.")]
    EmptyCart,

    /// Chaos mode simulated a payment failure.
    #[error("Payment failed. Please try again.")]
    PaymentFailed,
}

/// Run the checkout gate. Returns the buyer on success.
///
/// A cart whose lines all have zero or negative quantities still counts as
/// non-empty.
///
/// # Errors
///
/// Returns the first failed check; nothing is changed either way.
pub fn checkout(store: &Store, chaos: &mut Chaos) -> Result<UserSummary, CheckoutError> {
    let user = store.session().user.ok_or(CheckoutError::NotLoggedIn)?;

    if store.cart().is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    if chaos.maybe_chaos() {
        return Err(CheckoutError::PaymentFailed);
    }

    Ok(user)
}
