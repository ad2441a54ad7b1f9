//! Header toggles: theme and chaos mode.
//!
//! Both redirect back to whichever section is current.

use axum::{extract::State, response::Redirect};
use tracing::instrument;

use crate::error::Result;
use crate::navigation::path_for;
use crate::state::AppState;

/// Flip the light/dark theme.
#[instrument(skip(state))]
pub async fn toggle_theme(State(state): State<AppState>) -> Result<Redirect> {
    let mut playground = state.playground()?;
    let theme = playground.toggle_theme();
    tracing::debug!(%theme, "Theme toggled");
    Ok(Redirect::to(&path_for(playground.route())))
}

/// Flip chaos mode.
#[instrument(skip(state))]
pub async fn toggle_chaos(State(state): State<AppState>) -> Result<Redirect> {
    let mut playground = state.playground()?;
    let enabled = playground.toggle_chaos();
    tracing::info!(enabled, "Chaos mode toggled");
    Ok(Redirect::to(&path_for(playground.route())))
}
