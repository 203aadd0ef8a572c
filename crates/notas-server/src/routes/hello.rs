//! Liveness greeting endpoint.

use axum::{Router, routing::any};

use crate::state::AppState;

/// Fixed plaintext greeting body.
pub const GREETING: &str = "Hello from Notas!";

/// `/helloWorld` - unconditional greeting, no auth, no inputs.
///
/// Exists as a liveness/smoke-test endpoint only.
async fn hello_world() -> &'static str {
    GREETING
}

/// Build greeting routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/helloWorld", any(hello_world))
}
