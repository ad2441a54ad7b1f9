//! Seed the store from a YAML fixture.
//!
//! Users go through registration and the cart through add-to-cart, so seeded
//! data passes the same rules as data typed into the page. Chaos is off.
//!
//! ```yaml
//! users:
//!   - name: Ann
//!     email: ann@example.com
//!     password: password1
//!     age: "30"
//! login: ann@example.com
//! cart:
//!   - product: p1
//!     qty: 2
//! theme: light
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use qa_playground_core::types::ProductId;
use qa_playground_storefront::chaos::Chaos;
use qa_playground_storefront::services::{
    AuthError, AuthService, CartError, CartService, Catalog, Registration, Theme,
};
use qa_playground_storefront::store::{Store, StoreError};

/// Fixture loading and seeding failures.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read fixture {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("cannot register {email}: {source}")]
    Register {
        email: String,
        #[source]
        source: AuthError,
    },

    #[error("cannot log in {email}: {source}")]
    Login {
        email: String,
        #[source]
        source: AuthError,
    },

    #[error("login user {0} is not listed under users")]
    UnknownLoginUser(String),

    #[error("unknown product id: {0}")]
    UnknownProduct(String),

    #[error("cannot add to cart: {0}")]
    Cart(#[from] CartError),

    #[error("unknown theme {0:?} (expected light or dark)")]
    InvalidTheme(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A fixture file.
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<FixtureUser>,
    /// Email of a listed user to log in after registration.
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub cart: Vec<FixtureLine>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// A user to register.
#[derive(Debug, Deserialize)]
pub struct FixtureUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub age: String,
}

/// A cart line to add.
#[derive(Debug, Deserialize)]
pub struct FixtureLine {
    pub product: String,
    #[serde(default)]
    pub qty: QtyInput,
}

/// Quantity as written in YAML: a number or raw text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QtyInput {
    Number(i64),
    Text(String),
}

impl Default for QtyInput {
    fn default() -> Self {
        Self::Number(1)
    }
}

impl QtyInput {
    /// The text a user would have typed.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// What a seeding run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users_created: usize,
    /// Users whose email was already registered.
    pub users_skipped: usize,
    pub cart_lines: usize,
    pub logged_in: Option<String>,
}

/// Read and parse a fixture file.
///
/// # Errors
///
/// Returns `SeedError::Read` or `SeedError::Parse`.
pub fn load(path: &Path) -> Result<Fixture, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Apply a fixture to the store.
///
/// Already-registered emails are skipped, so seeding twice is safe for users;
/// cart quantities add up like repeated add-to-cart clicks.
///
/// # Errors
///
/// Returns the first registration, login, cart, or store failure.
pub fn run(store: &mut Store, fixture: &Fixture) -> Result<SeedSummary, SeedError> {
    let mut chaos = Chaos::default();
    let mut summary = SeedSummary::default();

    for user in &fixture.users {
        let registration = Registration {
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            age: user.age.clone(),
            accepted_terms: true,
        };
        match AuthService::new(store, &mut chaos).register(&registration) {
            Ok(created) => {
                info!(email = %created.email, "Registered user");
                summary.users_created += 1;
            }
            Err(AuthError::EmailTaken) => {
                info!(email = %user.email, "User already registered, skipping");
                summary.users_skipped += 1;
            }
            Err(source) => {
                return Err(SeedError::Register {
                    email: user.email.clone(),
                    source,
                });
            }
        }
    }

    if let Some(email) = &fixture.login {
        let user = fixture
            .users
            .iter()
            .find(|u| u.email.trim() == email.trim())
            .ok_or_else(|| SeedError::UnknownLoginUser(email.clone()))?;
        let session = AuthService::new(store, &mut chaos)
            .login(email, &user.password)
            .map_err(|source| SeedError::Login {
                email: email.clone(),
                source,
            })?;
        info!(user = %session, "Logged in");
        summary.logged_in = Some(session.email);
    }

    let catalog = Catalog::default();
    let mut coupon = None;
    for line in &fixture.cart {
        let product_id = ProductId::from(line.product.as_str());
        let added = CartService::new(store, &mut chaos, &catalog, &mut coupon)
            .add_to_cart(&product_id, &line.qty.as_text())?;
        if added.is_none() {
            return Err(SeedError::UnknownProduct(line.product.clone()));
        }
        summary.cart_lines += 1;
    }

    if let Some(theme) = &fixture.theme {
        let theme = match theme.as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            other => return Err(SeedError::InvalidTheme(other.to_string())),
        };
        theme.save(store)?;
    }

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use qa_playground_storefront::models::badge_count;

    use super::*;

    const DEMO: &str = r"
users:
  - name: Ann
    email: ann@example.com
    password: password1
    age: '30'
  - name: Bob
    email: bob@example.com
    password: hunter2hunter2
login: ann@example.com
cart:
  - product: p1
    qty: 2
  - product: p1
    qty: '3'
  - product: p4
theme: light
";

    #[test]
    fn test_seed_demo_fixture() {
        let fixture: Fixture = serde_yaml::from_str(DEMO).unwrap();
        let mut store = Store::in_memory();

        let summary = run(&mut store, &fixture).unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                users_created: 2,
                users_skipped: 0,
                cart_lines: 3,
                logged_in: Some("ann@example.com".to_string()),
            }
        );

        assert_eq!(store.users().len(), 2);
        assert_eq!(store.users().first().unwrap().age, "30");
        assert_eq!(store.session().user.unwrap().name, "Ann");

        let cart = store.cart();
        assert_eq!(cart.len(), 2);
        assert_eq!(badge_count(&cart), 6);
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_seeding_twice_skips_users() {
        let fixture: Fixture = serde_yaml::from_str(DEMO).unwrap();
        let mut store = Store::in_memory();
        run(&mut store, &fixture).unwrap();

        let summary = run(&mut store, &fixture).unwrap();
        assert_eq!(summary.users_created, 0);
        assert_eq!(summary.users_skipped, 2);
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn test_invalid_user_is_rejected() {
        let fixture: Fixture = serde_yaml::from_str(
            "users:\n  - name: Eve\n    email: eve@example.com\n    password: short\n",
        )
        .unwrap();
        let err = run(&mut Store::in_memory(), &fixture).unwrap_err();
        assert!(matches!(
            err,
            SeedError::Register {
                source: AuthError::PasswordTooShort,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_product_and_login() {
        let fixture: Fixture = serde_yaml::from_str("cart:\n  - product: p42\n").unwrap();
        assert!(matches!(
            run(&mut Store::in_memory(), &fixture),
            Err(SeedError::UnknownProduct(id)) if id == "p42"
        ));

        let fixture: Fixture = serde_yaml::from_str("login: nobody@example.com\n").unwrap();
        assert!(matches!(
            run(&mut Store::in_memory(), &fixture),
            Err(SeedError::UnknownLoginUser(_))
        ));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));
    }
}
