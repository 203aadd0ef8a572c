//! Note summarization route.
//!
//! `/summarizeNote` runs a linear pipeline: parse the note id, authenticate,
//! fetch the note, validate its text, then either compute the mock summary
//! or call the live backend. Every stage short-circuits to its own terminal
//! error response; nothing is retried.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{RawQuery, State},
    http::HeaderMap,
    routing::any,
};
use serde::{Deserialize, Serialize};

use notas_backends::SummarizeError;
use notas_core::mock_summary;

use crate::error::{ApiError, ApiResult};
use crate::extract::bearer_token;
use crate::state::AppState;

/// The note id, accepted from the query string or the JSON body.
#[derive(Debug, Default, Deserialize)]
struct SummarizeParams {
    id: Option<String>,
}

/// Response for `/summarizeNote`.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// The summarized note's id.
    pub id: String,
    /// One-sentence summary.
    pub summary: String,
    /// Present (and true) only when the mock path produced the summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mocked: Option<bool>,
}

/// `/summarizeNote` - summarize one of the caller's notes.
async fn summarize_note(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<SummaryResponse>> {
    // The query string is parsed by hand so that a malformed one degrades
    // to "no id" and gets this route's JSON 400 instead of the framework's
    // plaintext rejection.
    let query: SummarizeParams = raw_query
        .as_deref()
        .and_then(|raw| serde_urlencoded::from_str(raw).ok())
        .unwrap_or_default();

    // Id validation comes before auth: a request without an id is a 400
    // no matter what credential it carries.
    let id = note_id(query.id.as_deref(), &body).ok_or(ApiError::MissingId)?;

    let token = bearer_token(&headers).map_err(|_| ApiError::Unauthorized)?;
    let identity = state.verifier().verify(token).await.map_err(|error| {
        tracing::warn!(error = %error, "Token verification failed");
        ApiError::Unauthorized
    })?;

    let note = state
        .store()
        .get_note(&identity.uid, &id)
        .await
        .map_err(|error| {
            tracing::error!(error = %error, uid = %identity.uid, note_id = %id, "Failed to fetch note");
            ApiError::Internal
        })?
        .ok_or(ApiError::NoteNotFound)?;

    let text = note
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or(ApiError::NoteWithoutText)?;

    let config = state.config();
    if config.use_mock_summary() {
        tracing::info!(note_id = %id, "Serving mock summary");
        return Ok(Json(SummaryResponse {
            id,
            summary: mock_summary(text),
            mocked: Some(true),
        }));
    }
    if config.openai_api_key.is_none() {
        return Err(ApiError::ApiKeyMissing);
    }

    let summary = state
        .summarizer()
        .summarize(text)
        .await
        .map_err(|error| match error {
            SummarizeError::Backend { status, body } => {
                tracing::error!(status, body = %body, "Summarization backend rejected request");
                ApiError::SummarizeFailed { details: body }
            }
            SummarizeError::Transport(error) => {
                tracing::error!(error = %error, "Summarization backend unreachable");
                ApiError::Internal
            }
        })?;

    tracing::info!(note_id = %id, "Summarized note");

    Ok(Json(SummaryResponse {
        id,
        summary,
        mocked: None,
    }))
}

/// Resolve the note id: query parameter first, then the JSON body field.
///
/// Both sources are trimmed; blank values count as absent. A body that is
/// not valid JSON is treated as carrying no id.
fn note_id(query_id: Option<&str>, body: &Bytes) -> Option<String> {
    if let Some(id) = non_blank(query_id) {
        return Some(id);
    }
    let params: SummarizeParams = serde_json::from_slice(body).ok()?;
    non_blank(params.id.as_deref())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Build summarization routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/summarizeNote", any(summarize_note))
}
