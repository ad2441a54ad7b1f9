//! The playground application.
//!
//! [`Playground`] owns the store, the in-memory domain state and the event
//! log, and exposes one method per UI command. Each command runs a service,
//! records what happened in the event log, remembers the message shown next
//! to the form that triggered it, and returns that message.

use qa_playground_core::{CategoryFilter, ProductId};

use crate::chaos::Chaos;
use crate::error::{clear_sentry_user, report_store_error, set_sentry_user};
use crate::events::EventLog;
use crate::models::{UserSummary, badge_count};
use crate::navigation::{Navigation, Route};
use crate::services::auth::{AuthError, AuthService, Registration};
use crate::services::cart::{CartError, CartService};
use crate::services::checkout::{self, CheckoutError};
use crate::services::feedback::{self, FeedbackError, FeedbackForm};
use crate::services::totals::{self, Totals};
use crate::services::{Catalog, Notice, SAVE_FAILED, Theme};
use crate::store::{Store, StoreError};
use crate::views::{AuthView, CartView, CatalogView, FeedbackView, NO_USER, PageView};

const REGISTERED: &str = "Account created! Now log in.";
const LOGGED_IN: &str = "Success! Welcome.";
const LOGGED_OUT: &str = "You have logged out.";
const ORDER_PLACED: &str = "Order placed! Thank you 🙂";

/// In-memory state that does not survive a restart.
#[derive(Debug)]
pub struct DomainState {
    /// Raw route name; may name no section at all.
    pub route: String,
    /// Read from the store once at startup; kept in step on every toggle.
    pub theme: Theme,
    pub chaos: Chaos,
    pub coupon: Option<String>,
    pub catalog: Catalog,
}

impl DomainState {
    /// Fresh state on the home route with chaos off and no coupon.
    #[must_use]
    pub fn new(chaos: Chaos, theme: Theme) -> Self {
        Self {
            route: Route::Home.as_str().to_string(),
            theme,
            chaos,
            coupon: None,
            catalog: Catalog::default(),
        }
    }
}

/// Current catalog search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub query: String,
    /// Raw category text; `all` unless changed.
    pub category: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: "all".to_string(),
        }
    }
}

/// The last message shown next to each form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    pub login: Option<Notice>,
    pub register: Option<Notice>,
    pub catalog: Option<Notice>,
    pub cart: Option<Notice>,
    pub coupon: Option<Notice>,
    pub checkout: Option<Notice>,
    pub feedback: Option<Notice>,
}

/// The playground application.
#[derive(Debug)]
pub struct Playground {
    store: Store,
    state: DomainState,
    events: EventLog,
    notices: Notices,
    search: CatalogQuery,
    alert: Option<String>,
}

impl Playground {
    /// Start the application on the home route with the saved theme.
    #[must_use]
    pub fn new(store: Store, chaos: Chaos) -> Self {
        let theme = Theme::load(&store);
        let mut playground = Self {
            store,
            state: DomainState::new(chaos, theme),
            events: EventLog::default(),
            notices: Notices::default(),
            search: CatalogQuery::default(),
            alert: None,
        };
        playground.navigate(Route::Home.as_str());
        playground.events.record("App started");
        playground
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub const fn state(&self) -> &DomainState {
        &self.state
    }

    /// Mutable access to the domain state, for tests and seeding.
    pub const fn state_mut(&mut self) -> &mut DomainState {
        &mut self.state
    }

    #[must_use]
    pub const fn events(&self) -> &EventLog {
        &self.events
    }

    #[must_use]
    pub const fn notices(&self) -> &Notices {
        &self.notices
    }

    #[must_use]
    pub const fn search_input(&self) -> &CatalogQuery {
        &self.search
    }

    /// Current raw route name.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.state.route
    }

    // =========================================================================
    // Router
    // =========================================================================

    /// Switch to `route`. Entering the catalog re-runs the current search.
    pub fn navigate(&mut self, route: &str) {
        self.state.route = route.to_string();

        match Route::parse(route) {
            Some(Route::Catalog) => {
                self.render_catalog();
            }
            Some(_) => {}
            None => tracing::debug!(route, "Unknown route, no section shown"),
        }
    }

    /// Run a catalog search and keep its input for the next render.
    pub fn search(&mut self, query: &str, category: &str) -> Notice {
        self.search = CatalogQuery {
            query: query.to_string(),
            category: category.to_string(),
        };
        self.render_catalog()
    }

    fn render_catalog(&mut self) -> Notice {
        let filter = CategoryFilter::parse(&self.search.category);
        let notice = self
            .state
            .catalog
            .search(&self.search.query, &filter)
            .notice();
        self.notices.catalog = Some(notice.clone());
        notice
    }

    // =========================================================================
    // Header toggles
    // =========================================================================

    /// The theme in effect.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.state.theme
    }

    /// Flip and save the theme. Returns the theme now in effect, which is
    /// unchanged when the save fails.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.state.theme.toggled();
        if let Err(err) = next.save(&mut self.store) {
            self.save_failed("Theme switch", &err);
            return self.state.theme;
        }
        self.state.theme = next;
        self.events.record(format!("Theme switched to {next}"));
        next
    }

    /// Flip chaos mode. Returns the new state.
    pub fn toggle_chaos(&mut self) -> bool {
        let enabled = self.state.chaos.toggle();
        self.events.record(format!(
            "Chaos mode {}",
            if enabled { "enabled" } else { "disabled" }
        ));
        enabled
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Register a user.
    pub fn register(&mut self, form: &Registration) -> Notice {
        let outcome = AuthService::new(&mut self.store, &mut self.state.chaos).register(form);

        let notice = match outcome {
            Ok(user) => {
                self.events
                    .record(format!("Register success ({})", user.email));
                Notice::ok(REGISTERED)
            }
            Err(AuthError::EmailTaken) => {
                self.events.record(format!(
                    "Register failed: email exists ({})",
                    form.email.trim()
                ));
                Notice::err(AuthError::EmailTaken.to_string())
            }
            Err(err) => self.auth_failed("Register", err),
        };

        self.notices.register = Some(notice.clone());
        notice
    }

    /// Log in.
    pub fn login(&mut self, email: &str, password: &str) -> Notice {
        let outcome =
            AuthService::new(&mut self.store, &mut self.state.chaos).login(email, password);
        let email = email.trim();

        let notice = match outcome {
            Ok(user) => {
                set_sentry_user(&user.email);
                self.events.record(format!("Login success ({email})"));
                Notice::ok(LOGGED_IN)
            }
            Err(err) => {
                match err {
                    AuthError::Unavailable => {
                        self.events.record("Login failed: chaos outage");
                    }
                    AuthError::UserNotFound => {
                        self.events
                            .record(format!("Login failed: user not found ({email})"));
                    }
                    AuthError::WrongPassword => {
                        self.events
                            .record(format!("Login failed: wrong password ({email})"));
                    }
                    _ => {}
                }
                self.auth_failed("Login", err)
            }
        };

        self.notices.login = Some(notice.clone());
        notice
    }

    /// Log out. Always succeeds unless the store refuses the write.
    pub fn logout(&mut self) -> Notice {
        let outcome = AuthService::new(&mut self.store, &mut self.state.chaos).logout();

        let notice = match outcome {
            Ok(()) => {
                clear_sentry_user();
                self.events.record("Logout");
                Notice::ok(LOGGED_OUT)
            }
            Err(err) => self.auth_failed("Logout", err),
        };

        self.notices.login = Some(notice.clone());
        notice
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<UserSummary> {
        self.store.session().user
    }

    fn auth_failed(&mut self, action: &str, err: AuthError) -> Notice {
        match err {
            AuthError::Store(err) => self.save_failed(action, &err),
            other => Notice::err(other.to_string()),
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    fn cart(&mut self) -> CartService<'_> {
        CartService::new(
            &mut self.store,
            &mut self.state.chaos,
            &self.state.catalog,
            &mut self.state.coupon,
        )
    }

    /// Sum of stored quantities for the header badge.
    #[must_use]
    pub fn badge_count(&self) -> i64 {
        badge_count(&self.store.cart())
    }

    /// Totals for the current cart and coupon.
    #[must_use]
    pub fn totals(&self) -> Totals {
        totals::recalc(&self.store.cart(), self.state.coupon.as_deref())
    }

    /// Add a product to the cart.
    ///
    /// Returns `None` for an unknown product id. A chaos outage or a failed
    /// save raises the one-shot alert.
    pub fn add_to_cart(&mut self, product_id: &str, qty_text: &str) -> Option<Notice> {
        let product_id = ProductId::from(product_id);
        let outcome = self.cart().add_to_cart(&product_id, qty_text);

        match outcome {
            Ok(Some(qty)) => {
                let text = format!("Added to cart: {product_id} x{qty}");
                self.events.record(text.clone());
                Some(Notice::ok(text))
            }
            Ok(None) => None,
            Err(CartError::Unavailable) => {
                self.events.record("Add to cart failed: chaos");
                let text = CartError::Unavailable.to_string();
                self.alert = Some(text.clone());
                Some(Notice::err(text))
            }
            Err(CartError::Store(err)) => {
                let notice = self.save_failed("Add to cart", &err);
                self.alert = Some(notice.text.clone());
                Some(notice)
            }
        }
    }

    /// Add one to a cart line.
    pub fn inc_qty(&mut self, id: &str) -> Option<Notice> {
        let id = ProductId::from(id);
        let outcome = self.cart().inc_qty(&id);
        self.line_changed(outcome.map(|qty| qty.map(|_| format!("Qty inc: {id}"))))
    }

    /// Subtract one from a cart line.
    pub fn dec_qty(&mut self, id: &str) -> Option<Notice> {
        let id = ProductId::from(id);
        let outcome = self.cart().dec_qty(&id);
        self.line_changed(outcome.map(|qty| qty.map(|_| format!("Qty dec: {id}"))))
    }

    /// Set a cart line's quantity from raw text.
    pub fn set_qty(&mut self, id: &str, text: &str) -> Option<Notice> {
        let id = ProductId::from(id);
        let outcome = self.cart().set_qty(&id, text);
        self.line_changed(outcome.map(|qty| qty.map(|_| format!("Qty set: {id}={text}"))))
    }

    /// Remove a cart line. Logged even when the line did not exist.
    pub fn remove_item(&mut self, id: &str) -> Option<Notice> {
        let id = ProductId::from(id);
        let outcome = self.cart().remove_item(&id);
        self.line_changed(outcome.map(|_| Some(format!("Item removed: {id}"))))
    }

    fn line_changed(&mut self, outcome: Result<Option<String>, CartError>) -> Option<Notice> {
        match outcome {
            Ok(Some(text)) => {
                self.events.record(text.clone());
                self.notices.cart = None;
                Some(Notice::ok(text))
            }
            Ok(None) => None,
            Err(err) => {
                let notice = self.cart_failed("Cart update", err);
                self.notices.cart = Some(notice.clone());
                Some(notice)
            }
        }
    }

    /// Empty the cart and drop the coupon.
    pub fn clear_cart(&mut self) -> Notice {
        let outcome = self.cart().clear();
        self.notices.coupon = None;

        match outcome {
            Ok(()) => {
                self.events.record("Cart cleared");
                self.notices.cart = None;
                Notice::ok("Cart cleared")
            }
            Err(err) => {
                let notice = self.cart_failed("Cart clear", err);
                self.notices.cart = Some(notice.clone());
                notice
            }
        }
    }

    fn cart_failed(&mut self, action: &str, err: CartError) -> Notice {
        match err {
            CartError::Store(err) => self.save_failed(action, &err),
            CartError::Unavailable => Notice::err(CartError::Unavailable.to_string()),
        }
    }

    /// Apply a coupon code.
    pub fn apply_coupon(&mut self, code: &str) -> Notice {
        let notice = match totals::apply_coupon(&mut self.state.chaos, &mut self.state.coupon, code)
        {
            Ok(code) => {
                let text = format!("Coupon applied: {code}");
                self.events.record(text.clone());
                Notice::ok(text)
            }
            Err(err) => {
                self.events.record("Coupon apply failed: chaos");
                Notice::err(err.to_string())
            }
        };

        self.notices.coupon = Some(notice.clone());
        notice
    }

    // =========================================================================
    // Checkout and feedback
    // =========================================================================

    /// Place an order.
    pub fn checkout(&mut self) -> Notice {
        let notice = match checkout::checkout(&self.store, &mut self.state.chaos) {
            Ok(user) => {
                self.events
                    .record(format!("Checkout success by {}", user.email));
                Notice::ok(ORDER_PLACED)
            }
            Err(err) => {
                self.events.record(match err {
                    CheckoutError::NotLoggedIn => "Checkout failed: not logged in",
                    CheckoutError::EmptyCart => "Checkout failed: empty cart",
                    CheckoutError::PaymentFailed => "Checkout failed: chaos payment",
                });
                Notice::err(err.to_string())
            }
        };

        self.notices.checkout = Some(notice.clone());
        notice
    }

    /// Send the feedback form.
    pub fn send_feedback(&mut self, form: &FeedbackForm) -> Notice {
        let notice = match feedback::send(&mut self.state.chaos, form) {
            Ok(text) => {
                self.events.record(format!(
                    "Feedback sent: last=\"{}\", topic=\"{}\"",
                    form.lastname, form.topic
                ));
                Notice::ok(text)
            }
            Err(err) => {
                self.events.record(match err {
                    FeedbackError::TopicRequired => "Feedback failed: no topic",
                    FeedbackError::MessageTooShort => "Feedback failed: too short message",
                    FeedbackError::Unavailable => "Feedback failed: chaos",
                });
                Notice::err(err.to_string())
            }
        };

        self.notices.feedback = Some(notice.clone());
        notice
    }

    fn save_failed(&mut self, action: &str, err: &StoreError) -> Notice {
        report_store_error(action, err);
        self.events
            .record(format!("{action} failed: could not save"));
        Notice::err(SAVE_FAILED)
    }

    // =========================================================================
    // Page
    // =========================================================================

    /// Build the page for the current state. Consumes the pending alert.
    pub fn page(&mut self) -> PageView {
        let nav = Navigation::for_route(&self.state.route);
        self.page_with(nav)
    }

    /// Build the page as it looks on `route` without switching to it.
    ///
    /// The stored route is left alone, so the next toggle still returns to
    /// the section the user was on.
    pub fn page_at(&mut self, route: &str) -> PageView {
        self.page_with(Navigation::for_route(route))
    }

    fn page_with(&mut self, nav: Navigation) -> PageView {
        let coupon = self.state.coupon.as_deref();

        let filter = CategoryFilter::parse(&self.search.category);
        let found = self.state.catalog.search(&self.search.query, &filter);
        let catalog = CatalogView::new(
            &self.search.query,
            &filter,
            &found.products,
            self.notices.catalog.clone(),
        );

        let lines = self.store.cart();
        let mut cart = CartView::new(&lines, totals::recalc(&lines, coupon), coupon);
        cart.notice = self.notices.cart.clone().into();
        cart.coupon_notice = self.notices.coupon.clone().into();
        cart.checkout_notice = self.notices.checkout.clone().into();

        let auth = AuthView {
            current_user: self
                .current_user()
                .map_or_else(|| NO_USER.to_string(), |user| user.to_string()),
            login_notice: self.notices.login.clone().into(),
            register_notice: self.notices.register.clone().into(),
        };

        PageView {
            theme: self.state.theme.as_str(),
            chaos_on: self.state.chaos.is_enabled(),
            chaos_label: self.state.chaos.label(),
            nav: nav.items(),
            show_home: nav.is_visible(Route::Home),
            show_catalog: nav.is_visible(Route::Catalog),
            show_cart: nav.is_visible(Route::Cart),
            show_auth: nav.is_visible(Route::Auth),
            show_feedback: nav.is_visible(Route::Feedback),
            cart_count: badge_count(&lines),
            catalog,
            cart,
            auth,
            feedback: FeedbackView::new(self.notices.feedback.clone()),
            events: self.events.iter().map(ToString::to_string).collect(),
            alert: self.alert.take(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chaos::FixedSource;
    use crate::services::NoticeKind;
    use crate::store::{FileStore, MemoryStore};

    fn playground() -> Playground {
        Playground::new(Store::in_memory(), Chaos::new(FixedSource::always_fail()))
    }

    fn ann() -> Registration {
        Registration {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "password1".to_string(),
            age: "30".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_starts_on_home() {
        let mut app = playground();
        assert_eq!(app.route(), "home");
        assert_eq!(app.events().latest(), Some("App started"));

        let page = app.page();
        assert!(page.show_home);
        assert!(!page.show_catalog);
        assert_eq!(page.theme, "dark");
        assert_eq!(page.chaos_label, "Chaos: OFF");
        assert_eq!(page.cart_count, 0);
        assert_eq!(page.auth.current_user, NO_USER);
    }

    #[test]
    fn test_register_and_login() {
        let mut app = playground();
        assert!(app.register(&ann()).is_ok());
        assert_eq!(
            app.events().latest(),
            Some("Register success (ann@example.com)")
        );
        assert_eq!(app.current_user(), None);

        let notice = app.login("ann@example.com", "password1");
        assert_eq!(notice, Notice::ok(LOGGED_IN));
        assert_eq!(app.page().auth.current_user, "Ann <ann@example.com>");

        app.logout();
        assert_eq!(app.current_user(), None);
        assert_eq!(app.events().latest(), Some("Logout"));
    }

    #[test]
    fn test_login_failures_are_logged() {
        let mut app = playground();
        app.register(&ann());

        let notice = app.login("ann@example.com", "nope");
        assert_eq!(notice.kind, NoticeKind::Err);
        assert_eq!(
            app.events().latest(),
            Some("Login failed: wrong password (ann@example.com)")
        );

        app.login("bob@example.com", "nope");
        assert_eq!(
            app.events().latest(),
            Some("Login failed: user not found (bob@example.com)")
        );

        app.toggle_chaos();
        app.login("ann@example.com", "password1");
        assert_eq!(app.events().latest(), Some("Login failed: chaos outage"));
        assert_eq!(app.current_user(), None);
    }

    #[test]
    fn test_catalog_notice_set_on_enter() {
        let mut app = playground();
        assert_eq!(app.notices().catalog, None);

        app.navigate("catalog");
        assert_eq!(app.notices().catalog, Some(Notice::ok("Products found: 6")));

        let notice = app.search("mario", "all");
        assert!(!notice.is_ok());
        assert!(app.page().catalog.products.is_empty());

        app.search("Mario", "games");
        let page = app.page();
        assert_eq!(page.catalog.products.len(), 1);
        assert_eq!(page.catalog.products[0].id, "p2");
        assert_eq!(page.catalog.query, "Mario");
    }

    #[test]
    fn test_unknown_route_shows_nothing() {
        let mut app = playground();
        app.navigate("admin");
        let page = app.page();
        assert!(
            !(page.show_home
                || page.show_catalog
                || page.show_cart
                || page.show_auth
                || page.show_feedback)
        );
        assert!(page.nav.iter().all(|item| !item.active));
    }

    #[test]
    fn test_page_at_leaves_route_alone() {
        let mut app = playground();
        app.navigate("cart");

        let page = app.page_at("favicon.ico");
        assert!(!(page.show_home || page.show_cart));
        assert_eq!(app.route(), "cart");
        assert!(app.page().show_cart);
    }

    #[test]
    fn test_add_to_cart_alert_is_shown_once() {
        let mut app = playground();
        app.toggle_chaos();

        let notice = app.add_to_cart("p1", "1").unwrap();
        assert_eq!(notice.kind, NoticeKind::Err);
        assert_eq!(app.events().latest(), Some("Add to cart failed: chaos"));

        assert!(app.page().alert.is_some());
        assert!(app.page().alert.is_none());
        assert_eq!(app.badge_count(), 0);
    }

    #[test]
    fn test_cart_flow() {
        let mut app = playground();
        assert!(app.add_to_cart("p99", "1").is_none());

        app.add_to_cart("p1", "2");
        app.add_to_cart("p1", "3");
        assert_eq!(app.events().latest(), Some("Added to cart: p1 x3"));
        assert_eq!(app.badge_count(), 5);

        app.inc_qty("p1");
        app.dec_qty("p1");
        assert_eq!(app.events().latest(), Some("Qty dec: p1"));
        assert!(app.inc_qty("p2").is_none());

        app.apply_coupon("SAVE10");
        let page = app.page();
        assert_eq!(page.cart.subtotal, "1995");
        assert_eq!(page.cart.discount, "200");
        assert_eq!(page.cart.payable, "1795");
        assert_eq!(page.cart.coupon_code, "SAVE10");

        app.set_qty("p1", "abc");
        assert_eq!(app.events().latest(), Some("Qty set: p1=abc"));
        assert_eq!(app.page().cart.payable, "NaN");

        app.remove_item("p1");
        assert_eq!(app.events().latest(), Some("Item removed: p1"));

        app.add_to_cart("p4", "1");
        app.clear_cart();
        assert_eq!(app.state().coupon, None);
        assert_eq!(app.notices().coupon, None);
        assert_eq!(app.events().latest(), Some("Cart cleared"));
    }

    #[test]
    fn test_checkout_messages() {
        let mut app = playground();
        assert_eq!(
            app.checkout(),
            Notice::err(CheckoutError::NotLoggedIn.to_string())
        );

        app.register(&ann());
        app.login("ann@example.com", "password1");
        assert_eq!(app.checkout(), Notice::err("Cart is empty."));

        app.add_to_cart("p3", "1");
        assert_eq!(app.checkout(), Notice::ok(ORDER_PLACED));
        assert_eq!(
            app.events().latest(),
            Some("Checkout success by ann@example.com")
        );
    }

    #[test]
    fn test_feedback_log_echoes_lastname() {
        let mut app = playground();
        let form = FeedbackForm {
            lastname: "Smith".to_string(),
            topic: "bug".to_string(),
            message: "Button is misaligned".to_string(),
        };
        assert_eq!(
            app.send_feedback(&form),
            Notice::ok("Sent! Topic: bug. Thank you!")
        );
        assert_eq!(
            app.events().latest(),
            Some("Feedback sent: last=\"Smith\", topic=\"bug\"")
        );
    }

    #[test]
    fn test_theme_and_chaos_toggles() {
        let mut app = playground();
        assert_eq!(app.toggle_theme(), Theme::Light);
        assert_eq!(app.events().latest(), Some("Theme switched to light"));
        assert!(app.toggle_chaos());
        assert_eq!(app.events().latest(), Some("Chaos mode enabled"));

        let page = app.page();
        assert_eq!(page.theme, "light");
        assert!(page.chaos_on);
        assert_eq!(page.chaos_label, "Chaos: ON");
    }

    #[test]
    fn test_theme_is_read_once_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut other = Store::new(FileStore::new(&path));
        Theme::Light.save(&mut other).unwrap();

        let mut app = Playground::new(
            Store::new(FileStore::new(&path)),
            Chaos::new(FixedSource::never_fail()),
        );
        assert_eq!(app.theme(), Theme::Light);

        Theme::Dark.save(&mut other).unwrap();
        assert_eq!(app.page().theme, "light");

        assert_eq!(app.toggle_theme(), Theme::Dark);
        assert_eq!(app.page().theme, "dark");
    }

    #[test]
    fn test_failed_theme_save_keeps_theme() {
        let mut app = Playground::new(
            Store::new(MemoryStore::with_quota(0)),
            Chaos::new(FixedSource::never_fail()),
        );
        assert_eq!(app.toggle_theme(), Theme::Dark);
        assert_eq!(app.page().theme, "dark");
        assert_eq!(
            app.events().latest(),
            Some("Theme switch failed: could not save")
        );
    }

    #[test]
    fn test_save_failure_becomes_generic_notice() {
        let mut app = Playground::new(
            Store::new(MemoryStore::with_quota(8)),
            Chaos::new(FixedSource::never_fail()),
        );
        assert_eq!(app.register(&ann()), Notice::err(SAVE_FAILED));
        assert_eq!(
            app.events().latest(),
            Some("Register failed: could not save")
        );
    }
}
