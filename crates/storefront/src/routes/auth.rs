//! Authentication route handlers.
//!
//! Registration, login and logout against the playground's local user list.
//! Outcomes are shown next to the forms on the auth section.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::navigation::Route;
use crate::services::Registration;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Registration form data.
///
/// `terms` is present only when the checkbox is ticked.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub age: String,
    pub terms: Option<String>,
}

impl From<RegisterForm> for Registration {
    fn from(form: RegisterForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            password: form.password,
            age: form.age,
            accepted_terms: form.terms.is_some(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Register a new account.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    let registration = Registration::from(form);
    let notice = state.playground()?.register(&registration);
    tracing::info!(ok = notice.is_ok(), "Register attempt");
    Ok(Redirect::to(Route::Auth.path()))
}

/// Log in.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Result<Redirect> {
    let notice = state.playground()?.login(&form.email, &form.password);
    tracing::info!(ok = notice.is_ok(), "Login attempt");
    Ok(Redirect::to(Route::Auth.path()))
}

/// Log out.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<Redirect> {
    state.playground()?.logout();
    Ok(Redirect::to(Route::Auth.path()))
}
