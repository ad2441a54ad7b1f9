//! Domain services.
//!
//! Each service borrows the pieces of application state it needs, performs
//! one command, and returns a typed outcome. Error `Display` strings are the
//! user-facing messages shown next to the relevant form.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod feedback;
pub mod theme;
pub mod totals;

pub use auth::{AuthError, AuthService, Registration};
pub use cart::{CartError, CartService};
pub use catalog::{Catalog, SearchResult};
pub use checkout::CheckoutError;
pub use feedback::{FeedbackError, FeedbackForm};
pub use theme::Theme;
pub use totals::{CouponError, Totals};

use std::fmt;

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Ok,
    Err,
}

impl NoticeKind {
    /// CSS class for the message element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Err => "err",
        }
    }
}

/// A message shown next to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    /// A success message.
    #[must_use]
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Ok,
            text: text.into(),
        }
    }

    /// A failure message.
    #[must_use]
    pub fn err(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Err,
            text: text.into(),
        }
    }

    /// Returns true for success messages.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.kind == NoticeKind::Ok
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Shown instead of the details when a store write fails.
pub const SAVE_FAILED: &str = "Could not save your changes. Please try again.";
