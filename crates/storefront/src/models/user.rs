//! Registered users.

use serde::{Deserialize, Serialize};

use super::UserSummary;

/// A registered user.
///
/// Passwords are stored and compared in plaintext: this is a test target,
/// not a real shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Whatever was typed into the age field, unvalidated.
    #[serde(default)]
    pub age: String,
}

impl User {
    /// The part of the user kept in the session.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
