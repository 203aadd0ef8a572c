//! Note listing route.
//!
//! `/getUserNotes` authenticates the caller and returns every document in
//! the caller's notes collection. All failures, whether credential, identity
//! backend, or store, collapse into one opaque plaintext 401; the caller
//! learns nothing about which step failed. Detail goes to the log.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
};
use serde::Serialize;
use serde_json::Value;

use notas_backends::{StoreError, VerifyError};
use notas_core::NoteDocument;

use crate::extract::{MissingCredential, bearer_token};
use crate::state::AppState;

/// Response for `/getUserNotes`.
#[derive(Debug, Serialize)]
pub struct ListNotesResponse {
    /// Notes as `{"id": ..., ...fields}` objects, in provider order.
    pub notes: Vec<Value>,
}

/// Anything that can go wrong while listing notes. Logged, never shown.
#[derive(Debug, thiserror::Error)]
enum ListNotesError {
    #[error(transparent)]
    Credential(#[from] MissingCredential),
    #[error(transparent)]
    Verify(#[from] VerifyError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// `/getUserNotes` - list the authenticated caller's notes.
async fn get_user_notes(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match list_notes(&state, &headers).await {
        Ok(response) => Json(response).into_response(),
        Err(error) => {
            tracing::warn!(error = %error, "Rejecting /getUserNotes request");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

async fn list_notes(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<ListNotesResponse, ListNotesError> {
    let token = bearer_token(headers)?;
    let identity = state.verifier().verify(token).await?;
    let documents = state.store().list_notes(&identity.uid).await?;

    tracing::info!(uid = %identity.uid, count = documents.len(), "Listed notes");

    Ok(ListNotesResponse {
        notes: documents
            .iter()
            .map(NoteDocument::to_listing_value)
            .collect(),
    })
}

/// Build note listing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/getUserNotes", any(get_user_notes))
}
