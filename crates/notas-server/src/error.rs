//! API error types with JSON responses.
//!
//! These cover the `/summarizeNote` failure surface; `/getUserNotes` answers
//! a bare plaintext `Unauthorized` and builds that response itself. The
//! caller-visible messages are fixed strings; anything more detailed stays
//! in the server log.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or empty note id (400).
    #[error("missing note id")]
    MissingId,

    /// Credential absent, malformed, or rejected by the identity backend (401).
    #[error("unauthorized")]
    Unauthorized,

    /// The requested note does not exist (404).
    #[error("note not found")]
    NoteNotFound,

    /// The note carries no text under any accepted field name (400).
    #[error("note has no usable text field")]
    NoteWithoutText,

    /// Live summarization requested but no API key configured (500).
    #[error("summarization API key not configured")]
    ApiKeyMissing,

    /// The summarization backend answered with a non-success status (502).
    /// Carries the backend's raw body for the `details` field.
    #[error("summarization backend failed")]
    SummarizeFailed { details: String },

    /// Unexpected failure after authentication (500). Detail is logged only.
    #[error("internal error")]
    Internal,
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingId | Self::NoteWithoutText => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NoteNotFound => StatusCode::NOT_FOUND,
            Self::ApiKeyMissing | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SummarizeFailed { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Caller-visible message for the `error` field.
    fn message(&self) -> &'static str {
        match self {
            Self::MissingId => "Missing note id",
            Self::Unauthorized => "Unauthorized",
            Self::NoteNotFound => "Note not found",
            Self::NoteWithoutText => "Note has no text field (expected content/text/body)",
            Self::ApiKeyMissing => "OpenAI API key not configured",
            Self::SummarizeFailed { .. } => "Failed to summarize",
            Self::Internal => "Internal error",
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Caller-visible error message.
    pub error: String,
    /// Raw backend body, present on 502 responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = match &self {
            Self::SummarizeFailed { details } => Some(details.clone()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.message().to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
