//! Authentication service.
//!
//! Registration and plaintext password login against the user list in the
//! local store. The session is a separate store record; the state machine is
//! anonymous ⇄ authenticated, moved only by [`AuthService::login`] and
//! [`AuthService::logout`].

mod error;

pub use error::AuthError;

use crate::chaos::Chaos;
use crate::models::{Session, User, UserSummary};
use crate::store::Store;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration form input, as typed.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub accepted_terms: bool,
}

/// Authentication service.
pub struct AuthService<'a> {
    store: &'a mut Store,
    chaos: &'a mut Chaos,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    pub const fn new(store: &'a mut Store, chaos: &'a mut Chaos) -> Self {
        Self { store, chaos }
    }

    /// Register a new user. Does not log them in.
    ///
    /// Checks run in a fixed order and the first failure wins: name present,
    /// email present, password length, terms accepted, email unused.
    ///
    /// # Errors
    ///
    /// Returns the first failed check, or `AuthError::Store` if the user list
    /// cannot be saved.
    pub fn register(&mut self, form: &Registration) -> Result<User, AuthError> {
        let email = form.email.trim();

        if form.name.is_empty() {
            return Err(AuthError::NameRequired);
        }
        if email.is_empty() {
            return Err(AuthError::EmailRequired);
        }
        if form.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }
        if !form.accepted_terms {
            return Err(AuthError::TermsNotAccepted);
        }

        let mut users = self.store.users();
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            name: form.name.trim().to_string(),
            email: email.to_string(),
            password: form.password.clone(),
            age: form.age.clone(),
        };
        users.push(user.clone());
        self.store.set_users(&users)?;

        Ok(user)
    }

    /// Log in with email and password.
    ///
    /// The chaos draw happens after the empty-field checks and before the
    /// credential lookup, so an outage never reveals whether the user exists.
    ///
    /// # Errors
    ///
    /// Returns `EmailRequired`/`PasswordRequired` for empty input,
    /// `Unavailable` when chaos fires, `UserNotFound` or `WrongPassword` for
    /// bad credentials, and `Store` if the session cannot be saved.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserSummary, AuthError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(AuthError::EmailRequired);
        }
        if password.is_empty() {
            return Err(AuthError::PasswordRequired);
        }

        if self.chaos.maybe_chaos() {
            return Err(AuthError::Unavailable);
        }

        let users = self.store.users();
        let user = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(AuthError::UserNotFound)?;

        if user.password != password {
            return Err(AuthError::WrongPassword);
        }

        let summary = user.summary();
        self.store
            .set_session(&Session::logged_in(summary.clone()))?;
        Ok(summary)
    }

    /// Log out. Always clears the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the cleared session cannot be saved.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.set_session(&Session::default())?;
        Ok(())
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<UserSummary> {
        self.store.session().user
    }
}
