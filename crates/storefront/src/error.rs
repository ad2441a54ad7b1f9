//! Unified error handling with Sentry integration.
//!
//! Domain failures (validation errors, chaos outages) are not errors at this
//! level: they become notices on the page, and so do failed store writes.
//! `AppError` covers what is left over, and captures it to Sentry before
//! responding.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Report a store write failure that was turned into a page notice.
///
/// The user only sees a generic "could not save" message; the details go to
/// the log and Sentry.
pub fn report_store_error(action: &str, err: &StoreError) {
    let event_id = sentry::capture_error(err);
    tracing::error!(
        action,
        error = %err,
        sentry_event_id = %event_id,
        "Store write failed"
    );
}

/// Set the Sentry user context after a successful login.
pub fn set_sentry_user(email: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: Some(email.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context on logout.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Mirror a playground event into the Sentry breadcrumb trail.
pub fn add_event_breadcrumb(text: &str) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some("playground".to_string()),
        message: Some(text.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Internal("poisoned".to_string());
        assert_eq!(err.to_string(), "Internal error: poisoned");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
