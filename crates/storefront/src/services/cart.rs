//! Cart service.
//!
//! Every operation reads the whole cart from the store, changes one line,
//! and writes the whole cart back. Quantities are intentionally loose:
//!
//! - adding with unparsable quantity text adds 1;
//! - decrementing has no floor;
//! - setting from unparsable text stores "not a number", which then poisons
//!   the totals.

use thiserror::Error;

use qa_playground_core::{ProductId, Quantity};

use crate::chaos::Chaos;
use crate::models::{CartLine, badge_count};
use crate::services::SAVE_FAILED;
use crate::store::{Store, StoreError};

use super::catalog::Catalog;
use super::totals::{self, Totals};

/// Cart operation failures.
#[derive(Debug, Error)]
pub enum CartError {
    /// Chaos mode simulated an outage while adding an item.
    #[error("Could not add to cart. Please try again.")]
    Unavailable,

    /// Store write failed.
    #[error("{}", SAVE_FAILED)]
    Store(#[from] StoreError),
}

/// Cart service.
pub struct CartService<'a> {
    store: &'a mut Store,
    chaos: &'a mut Chaos,
    catalog: &'a Catalog,
    coupon: &'a mut Option<String>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    pub const fn new(
        store: &'a mut Store,
        chaos: &'a mut Chaos,
        catalog: &'a Catalog,
        coupon: &'a mut Option<String>,
    ) -> Self {
        Self {
            store,
            chaos,
            catalog,
            coupon,
        }
    }

    /// Current cart lines.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.store.cart()
    }

    /// Cart badge number.
    #[must_use]
    pub fn badge_count(&self) -> i64 {
        badge_count(&self.store.cart())
    }

    /// Totals for the current cart and coupon.
    #[must_use]
    pub fn totals(&self) -> Totals {
        totals::recalc(&self.store.cart(), self.coupon.as_deref())
    }

    /// Add `qty_text` of a product, merging into its existing line.
    ///
    /// Returns the quantity added, or `None` if the product id is unknown
    /// (silently ignored, no chaos draw).
    ///
    /// # Errors
    ///
    /// Returns `CartError::Unavailable` when chaos fires (the cart is left
    /// unchanged) and `CartError::Store` if the cart cannot be saved.
    pub fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        qty_text: &str,
    ) -> Result<Option<Quantity>, CartError> {
        let qty = Quantity::parse_or(qty_text, Quantity::ONE);

        let mut cart = self.store.cart();
        let Some(product) = self.catalog.find(product_id) else {
            return Ok(None);
        };

        if self.chaos.maybe_chaos() {
            return Err(CartError::Unavailable);
        }

        match cart.iter_mut().find(|line| &line.id == product_id) {
            Some(existing) => existing.qty = existing.qty.or_zero().plus(qty),
            None => cart.push(CartLine::new(product, qty)),
        }
        self.store.set_cart(&cart)?;

        Ok(Some(qty))
    }

    /// Add one to a line. Returns the new quantity, or `None` if no such line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the cart cannot be saved.
    pub fn inc_qty(&mut self, id: &ProductId) -> Result<Option<Quantity>, CartError> {
        self.update_line(id, Quantity::incremented)
    }

    /// Subtract one from a line, with no floor. Returns the new quantity, or
    /// `None` if no such line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the cart cannot be saved.
    pub fn dec_qty(&mut self, id: &ProductId) -> Result<Option<Quantity>, CartError> {
        self.update_line(id, Quantity::decremented)
    }

    /// Set a line's quantity to the parse of `text`, storing "not a number"
    /// verbatim when it does not parse. Returns the stored quantity, or
    /// `None` if no such line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the cart cannot be saved.
    pub fn set_qty(&mut self, id: &ProductId, text: &str) -> Result<Option<Quantity>, CartError> {
        let qty = Quantity::parse(text);
        self.update_line(id, |_| qty)
    }

    /// Drop a line. Returns true if a line was removed.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the cart cannot be saved.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<bool, CartError> {
        let mut cart = self.store.cart();
        let before = cart.len();
        cart.retain(|line| &line.id != id);
        self.store.set_cart(&cart)?;
        Ok(cart.len() != before)
    }

    /// Empty the cart and drop the active coupon.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the cart cannot be saved; the coupon is
    /// still cleared.
    pub fn clear(&mut self) -> Result<(), CartError> {
        *self.coupon = None;
        self.store.set_cart(&[])?;
        Ok(())
    }

    fn update_line(
        &mut self,
        id: &ProductId,
        change: impl FnOnce(Quantity) -> Quantity,
    ) -> Result<Option<Quantity>, CartError> {
        let mut cart = self.store.cart();
        let Some(line) = cart.iter_mut().find(|line| &line.id == id) else {
            return Ok(None);
        };

        line.qty = change(line.qty);
        let qty = line.qty;
        self.store.set_cart(&cart)?;
        Ok(Some(qty))
    }
}
