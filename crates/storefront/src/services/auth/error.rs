//! Authentication error types.

use thiserror::Error;

use crate::services::SAVE_FAILED;
use crate::store::StoreError;

use super::MIN_PASSWORD_LENGTH;

/// Errors that can occur during registration and login.
///
/// The `Display` text is the message shown next to the form.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration name is empty.
    #[error("Enter your name.")]
    NameRequired,

    /// Email is empty after trimming.
    #[error("Enter your email.")]
    EmailRequired,

    /// Registration password is shorter than the minimum.
    #[error("Password is too short (at least {} characters).", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,

    /// Registration terms checkbox is unticked.
    #[error("You must accept the terms.")]
    TermsNotAccepted,

    /// Another user already registered this exact email.
    #[error("This email is already registered.")]
    EmailTaken,

    /// Login password is empty.
    #[error("Enter your password.")]
    PasswordRequired,

    /// Chaos mode simulated an outage.
    #[error("Service temporarily unavailable. Please try again later.")]
    Unavailable,

    /// No user with this exact email.
    #[error("User not found.")]
    UserNotFound,

    /// The password does not match.
    #[error("Wrong password.")]
    WrongPassword,

    /// Store write failed.
    #[error("{}", SAVE_FAILED)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Returns true for input that failed validation before any lookup.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NameRequired
                | Self::EmailRequired
                | Self::PasswordTooShort
                | Self::TermsNotAccepted
                | Self::PasswordRequired
        )
    }
}
