//! Page rendering.
//!
//! Every section lives on one page; the path only decides which section is
//! visible. A GET is a navigation event.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::navigation::Route;
use crate::state::AppState;
use crate::views::PageView;

/// The storefront page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct PageTemplate {
    pub page: PageView,
}

/// Catalog search parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Navigate to `route` and render the page.
fn render(state: &AppState, route: &str) -> Result<PageTemplate> {
    let mut playground = state.playground()?;
    playground.navigate(route);
    Ok(PageTemplate {
        page: playground.page(),
    })
}

/// Home section.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<PageTemplate> {
    render(&state, Route::Home.as_str())
}

/// Catalog section, optionally running a search first.
#[instrument(skip(state))]
pub async fn catalog(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<PageTemplate> {
    if query.q.is_some() || query.category.is_some() {
        let mut playground = state.playground()?;
        let current = playground.search_input().clone();
        let notice = playground.search(
            query.q.as_deref().unwrap_or(&current.query),
            query.category.as_deref().unwrap_or(&current.category),
        );
        tracing::debug!(notice = %notice, "Catalog searched");
    }

    render(&state, Route::Catalog.as_str())
}

/// Cart section.
#[instrument(skip(state))]
pub async fn cart(State(state): State<AppState>) -> Result<PageTemplate> {
    render(&state, Route::Cart.as_str())
}

/// Auth section.
#[instrument(skip(state))]
pub async fn auth(State(state): State<AppState>) -> Result<PageTemplate> {
    render(&state, Route::Auth.as_str())
}

/// Feedback section.
#[instrument(skip(state))]
pub async fn feedback(State(state): State<AppState>) -> Result<PageTemplate> {
    render(&state, Route::Feedback.as_str())
}

/// Any other path: the page renders with every section hidden.
///
/// Browsers fetch paths like `/favicon.ico` on their own, so this does not
/// count as navigation and the current route is kept.
#[instrument(skip(state))]
pub async fn other(State(state): State<AppState>, Path(route): Path<String>) -> Result<Response> {
    let page = state.playground()?.page_at(&route);
    tracing::debug!(route, "No section for path");
    Ok((StatusCode::NOT_FOUND, PageTemplate { page }).into_response())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
