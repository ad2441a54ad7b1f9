//! Cart route handlers.
//!
//! Adding happens from the catalog and redirects back there; every other
//! cart command redirects to the cart section.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::navigation::Route;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    /// Raw quantity text; unparsable text adds one.
    #[serde(default)]
    pub qty: String,
}

/// Set quantity form data.
#[derive(Debug, Deserialize)]
pub struct SetQtyForm {
    #[serde(default)]
    pub qty: String,
}

/// Coupon form data.
#[derive(Debug, Deserialize)]
pub struct CouponForm {
    #[serde(default)]
    pub code: String,
}

fn to_cart() -> Redirect {
    Redirect::to(Route::Cart.path())
}

/// Add a product to the cart.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    if state
        .playground()?
        .add_to_cart(&form.product_id, &form.qty)
        .is_none()
    {
        tracing::debug!(product_id = %form.product_id, "Unknown product ignored");
    }
    Ok(Redirect::to(Route::Catalog.path()))
}

/// Increment a line.
#[instrument(skip(state))]
pub async fn inc(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect> {
    state.playground()?.inc_qty(&id);
    Ok(to_cart())
}

/// Decrement a line.
#[instrument(skip(state))]
pub async fn dec(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect> {
    state.playground()?.dec_qty(&id);
    Ok(to_cart())
}

/// Set a line's quantity from raw text.
#[instrument(skip(state))]
pub async fn set_qty(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SetQtyForm>,
) -> Result<Redirect> {
    state.playground()?.set_qty(&id, &form.qty);
    Ok(to_cart())
}

/// Remove a line.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect> {
    state.playground()?.remove_item(&id);
    Ok(to_cart())
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Redirect> {
    state.playground()?.clear_cart();
    Ok(to_cart())
}

/// Apply a coupon code.
#[instrument(skip(state))]
pub async fn apply_coupon(
    State(state): State<AppState>,
    Form(form): Form<CouponForm>,
) -> Result<Redirect> {
    state.playground()?.apply_coupon(&form.code);
    Ok(to_cart())
}

/// Run checkout.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Redirect> {
    let notice = state.playground()?.checkout();
    tracing::info!(ok = notice.is_ok(), "Checkout attempt");
    Ok(to_cart())
}
