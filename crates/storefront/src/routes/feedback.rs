//! Feedback form handler.

use axum::{Form, extract::State, response::Redirect};
use tracing::instrument;

use crate::error::Result;
use crate::navigation::Route;
use crate::services::FeedbackForm;
use crate::state::AppState;

/// Send feedback.
#[instrument(skip(state, form), fields(topic = %form.topic))]
pub async fn send(State(state): State<AppState>, Form(form): Form<FeedbackForm>) -> Result<Redirect> {
    state.playground()?.send_feedback(&form);
    Ok(Redirect::to(Route::Feedback.path()))
}
