//! HTTP route handlers for the playground.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home section
//! GET  /catalog?q=&category=   - Catalog section (runs a search when given)
//! GET  /cart                   - Cart section
//! GET  /auth                   - Auth section
//! GET  /feedback               - Feedback section
//! GET  /{route}                - Unknown route: no section shown (404)
//! GET  /health                 - Health check
//!
//! # Header
//! POST /theme                  - Toggle light/dark theme
//! POST /chaos                  - Toggle chaos mode
//!
//! # Auth
//! POST /auth/register          - Register
//! POST /auth/login             - Log in
//! POST /auth/logout            - Log out
//!
//! # Cart
//! POST /cart/add               - Add to cart (product_id, qty)
//! POST /cart/{id}/inc          - Increment line
//! POST /cart/{id}/dec          - Decrement line
//! POST /cart/{id}/qty          - Set line quantity (qty)
//! POST /cart/{id}/remove       - Remove line
//! POST /cart/clear             - Clear cart and coupon
//! POST /cart/coupon            - Apply coupon (code)
//! POST /checkout               - Checkout
//!
//! # Feedback
//! POST /feedback               - Send feedback (lastname, topic, message)
//! ```
//!
//! Every POST answers `303 See Other` pointing at the page that owns the
//! form, where the outcome is shown.

pub mod auth;
pub mod cart;
pub mod feedback;
pub mod pages;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::auth))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::cart))
        .route("/add", post(cart::add))
        .route("/clear", post(cart::clear))
        .route("/coupon", post(cart::apply_coupon))
        .route("/{id}/inc", post(cart::inc))
        .route("/{id}/dec", post(cart::dec))
        .route("/{id}/qty", post(cart::set_qty))
        .route("/{id}/remove", post(cart::remove))
}

/// Create all routes for the playground.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(pages::health))
        .route("/catalog", get(pages::catalog))
        .route("/feedback", get(pages::feedback).post(feedback::send))
        // Header toggles
        .route("/theme", post(settings::toggle_theme))
        .route("/chaos", post(settings::toggle_chaos))
        .nest("/auth", auth_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", post(cart::checkout))
        // Anything else is an unknown section
        .route("/{route}", get(pages::other))
}

/// The complete application with request tracing, ready to serve.
pub fn app(state: AppState) -> Router {
    routes().layer(TraceLayer::new_for_http()).with_state(state)
}
