//! Route definitions for the HTTP API.

pub mod hello;
pub mod notes;
pub mod summarize;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(hello::routes())
        .merge(notes::routes())
        .merge(summarize::routes())
        .with_state(state)
}
