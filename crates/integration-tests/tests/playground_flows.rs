//! End-to-end flows through the playground's domain layer.
//!
//! Each test drives a [`Playground`] the way the page does: one command per
//! click, then reads back notices, totals, the badge and the event log.

#![allow(clippy::unwrap_used)]

use qa_playground_core::{Amount, Category, Product};
use qa_playground_integration_tests::{PASSWORD, playground, playground_with, registration};
use qa_playground_storefront::Playground;
use qa_playground_storefront::chaos::{Chaos, FixedSource, SeededSource};
use qa_playground_storefront::services::{Catalog, FeedbackForm};
use qa_playground_storefront::store::{FileStore, Store};

fn latest_event(playground: &Playground) -> String {
    playground.events().latest().unwrap().to_string()
}

// ============================================================================
// Auth
// ============================================================================

#[test]
fn test_register_then_login() {
    let mut app = playground();

    let notice = app.register(&registration("Ann", "ann@example.com"));
    assert!(notice.is_ok());
    assert_eq!(notice.text, "Account created! Now log in.");
    assert!(app.current_user().is_none());

    let notice = app.login("ann@example.com", PASSWORD);
    assert!(notice.is_ok());
    assert_eq!(notice.text, "Success! Welcome.");
    assert_eq!(latest_event(&app), "Login success (ann@example.com)");

    let user = app.current_user().unwrap();
    assert_eq!(user.name, "Ann");
    assert_eq!(app.page().auth.current_user, "Ann <ann@example.com>");
}

#[test]
fn test_duplicate_email_is_rejected() {
    let mut app = playground();
    app.register(&registration("Ann", "ann@example.com"));

    let notice = app.register(&registration("Other Ann", "ann@example.com"));
    assert!(!notice.is_ok());
    assert_eq!(notice.text, "This email is already registered.");
    assert_eq!(
        latest_event(&app),
        "Register failed: email exists (ann@example.com)"
    );
    assert_eq!(app.store().users().len(), 1);
}

#[test]
fn test_wrong_password_and_unknown_user_differ() {
    let mut app = playground();
    app.register(&registration("Ann", "ann@example.com"));

    let wrong = app.login("ann@example.com", "not-the-password");
    let missing = app.login("bob@example.com", PASSWORD);

    assert_eq!(wrong.text, "Wrong password.");
    assert_eq!(missing.text, "User not found.");
    assert_ne!(wrong.text, missing.text);
    assert!(app.current_user().is_none());
}

#[test]
fn test_logout_clears_session() {
    let mut app = playground();
    app.register(&registration("Ann", "ann@example.com"));
    app.login("ann@example.com", PASSWORD);

    let notice = app.logout();
    assert_eq!(notice.text, "You have logged out.");
    assert!(app.current_user().is_none());
    assert_eq!(latest_event(&app), "Logout");
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_search_is_case_sensitive() {
    let mut app = playground();

    let notice = app.search("Space", "all");
    assert_eq!(notice.text, "Products found: 1");

    let notice = app.search("space", "all");
    assert!(!notice.is_ok());
    assert_eq!(notice.text, "Nothing found. Try a different query.");
}

#[test]
fn test_search_within_category() {
    let mut app = playground();

    assert_eq!(app.search("", "edu").text, "Products found: 2");
    assert_eq!(app.search("o", "gadgets").text, "Products found: 2");
    assert!(!app.search("", "toys").is_ok());
}

// ============================================================================
// Cart and totals
// ============================================================================

#[test]
fn test_add_to_cart_merges_lines() {
    let mut app = playground();

    app.add_to_cart("p1", "2").unwrap();
    app.add_to_cart("p1", "3").unwrap();

    let cart = app.store().cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.first().unwrap().qty.get(), Some(5));
    assert_eq!(app.badge_count(), 5);
    assert_eq!(app.totals().subtotal, Amount::Value(1995));
}

#[test]
fn test_add_unknown_product_is_ignored() {
    let mut app = playground();
    let before = app.events().len();

    assert!(app.add_to_cart("p99", "1").is_none());
    assert!(app.store().cart().is_empty());
    assert_eq!(app.events().len(), before);
}

#[test]
fn test_save10_and_free_coupons() {
    let mut app = playground();
    app.state_mut().catalog = Catalog::new(vec![Product::new(
        "p1",
        "Half Grand",
        Category::Games,
        500,
    )]);
    app.add_to_cart("p1", "2").unwrap();

    app.apply_coupon("SAVE10");
    let totals = app.totals();
    assert_eq!(totals.subtotal, Amount::Value(1000));
    assert_eq!(totals.discount, Amount::Value(100));
    assert_eq!(totals.payable, Amount::Value(900));

    app.apply_coupon("FREE");
    let totals = app.totals();
    assert_eq!(totals.discount, Amount::Value(999_999));
    assert_eq!(totals.payable, Amount::Value(1000 - 999_999));

    app.apply_coupon("save10");
    assert_eq!(app.totals().discount, Amount::ZERO);
}

#[test]
fn test_non_numeric_quantity_poisons_totals() {
    let mut app = playground();
    app.add_to_cart("p1", "1").unwrap();
    app.add_to_cart("p3", "1").unwrap();

    app.set_qty("p1", "lots").unwrap();

    let totals = app.totals();
    assert!(totals.subtotal.is_nan());
    assert!(totals.payable.is_nan());
    assert_eq!(app.badge_count(), 1);
    assert_eq!(latest_event(&app), "Qty set: p1=lots");

    let page = app.page();
    assert_eq!(page.cart.subtotal, "NaN");
}

#[test]
fn test_non_numeric_quantity_recovers_on_change() {
    let mut app = playground();
    app.add_to_cart("p1", "2").unwrap();
    app.set_qty("p1", "abc").unwrap();
    assert!(app.totals().subtotal.is_nan());

    app.inc_qty("p1").unwrap();
    assert_eq!(app.store().cart().first().unwrap().qty.get(), Some(1));

    app.add_to_cart("p1", "2").unwrap();
    assert_eq!(app.store().cart().first().unwrap().qty.get(), Some(3));
    assert_eq!(app.totals().subtotal, Amount::Value(1197));

    app.set_qty("p1", "abc").unwrap();
    app.dec_qty("p1").unwrap();
    assert_eq!(app.store().cart().first().unwrap().qty.get(), Some(-1));
}

#[test]
fn test_quantity_may_go_negative() {
    let mut app = playground();
    app.add_to_cart("p4", "1").unwrap();

    app.dec_qty("p4").unwrap();
    app.dec_qty("p4").unwrap();

    assert_eq!(app.store().cart().first().unwrap().qty.get(), Some(-1));
    assert_eq!(app.totals().subtotal, Amount::Value(-199));
}

#[test]
fn test_clear_cart_drops_coupon() {
    let mut app = playground();
    app.add_to_cart("p1", "1").unwrap();
    app.apply_coupon("SAVE10");

    app.clear_cart();

    assert!(app.store().cart().is_empty());
    assert_eq!(app.totals().discount, Amount::ZERO);
    assert!(app.notices().coupon.is_none());
}

// ============================================================================
// Checkout
// ============================================================================

#[test]
fn test_checkout_requires_session_then_items() {
    let mut app = playground();
    app.add_to_cart("p1", "1").unwrap();

    let notice = app.checkout();
    assert_eq!(notice.text, "Log in to place an order.");
    assert_eq!(latest_event(&app), "Checkout failed: not logged in");

    app.register(&registration("Ann", "ann@example.com"));
    app.login("ann@example.com", PASSWORD);
    app.clear_cart();

    let notice = app.checkout();
    assert_eq!(notice.text, "Cart is empty.");

    app.add_to_cart("p2", "1").unwrap();
    let notice = app.checkout();
    assert!(notice.is_ok());
    assert_eq!(latest_event(&app), "Checkout success by ann@example.com");
}

// ============================================================================
// Chaos
// ============================================================================

#[test]
fn test_chaos_off_never_fails() {
    let mut app = playground_with(FixedSource::always_fail());
    app.add_to_cart("p1", "1").unwrap();

    for _ in 0..50 {
        assert!(app.apply_coupon("SAVE10").is_ok());
    }
}

#[test]
fn test_chaos_failure_rate_is_about_a_quarter() {
    const TRIALS: u32 = 4000;

    let mut app = playground_with(SeededSource::new(20_240_601));
    assert!(app.toggle_chaos());

    let failures = (0..TRIALS)
        .filter(|_| !app.apply_coupon("SAVE10").is_ok())
        .count();

    let rate = f64::from(u32::try_from(failures).unwrap()) / f64::from(TRIALS);
    assert!((0.20..=0.30).contains(&rate), "failure rate {rate}");
}

#[test]
fn test_chaos_add_to_cart_leaves_cart_unchanged() {
    let mut app = playground_with(FixedSource::always_fail());
    app.toggle_chaos();

    let notice = app.add_to_cart("p1", "2").unwrap();
    assert!(!notice.is_ok());
    assert!(app.store().cart().is_empty());
    assert_eq!(latest_event(&app), "Add to cart failed: chaos");

    let page = app.page();
    assert!(page.alert.is_some());
    assert!(app.page().alert.is_none());
}

// ============================================================================
// Feedback
// ============================================================================

#[test]
fn test_feedback_validation_order() {
    let mut app = playground();

    let mut form = FeedbackForm {
        lastname: "Doe".to_string(),
        topic: String::new(),
        message: "hi".to_string(),
    };
    assert_eq!(app.send_feedback(&form).text, "Choose a topic.");

    form.topic = "bug".to_string();
    assert_eq!(app.send_feedback(&form).text, "Message is too short.");

    form.message = "Button is misaligned".to_string();
    let notice = app.send_feedback(&form);
    assert!(notice.is_ok());
    assert_eq!(notice.text, "Sent! Topic: bug. Thank you!");
    assert_eq!(
        latest_event(&app),
        "Feedback sent: last=\"Doe\", topic=\"bug\""
    );
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_state_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let mut app = Playground::new(
            Store::new(FileStore::new(&path)),
            Chaos::new(FixedSource::never_fail()),
        );
        app.register(&registration("Ann", "ann@example.com"));
        app.login("ann@example.com", PASSWORD);
        app.add_to_cart("p6", "2").unwrap();
        app.toggle_theme();
        app.toggle_chaos();
        app.apply_coupon("SAVE10");
    }

    let app = Playground::new(
        Store::new(FileStore::new(&path)),
        Chaos::new(FixedSource::never_fail()),
    );
    assert_eq!(app.current_user().unwrap().email, "ann@example.com");
    assert_eq!(app.badge_count(), 2);
    assert_eq!(app.theme().as_str(), "light");

    // Chaos and the coupon live in memory only.
    assert!(!app.state().chaos.is_enabled());
    assert_eq!(app.totals().discount, Amount::ZERO);
}
