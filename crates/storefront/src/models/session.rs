//! Session-related types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Session-stored user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
}

impl fmt::Display for UserSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// The login session. `user` is `None` when nobody is logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserSummary>,
}

impl Session {
    /// A session for `user`.
    #[must_use]
    pub const fn logged_in(user: UserSummary) -> Self {
        Self { user: Some(user) }
    }

    /// Returns true if a user is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
