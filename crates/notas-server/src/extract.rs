//! Bearer-credential extraction from request headers.

use axum::http::{HeaderMap, header};

/// The `Authorization` header is absent or not a `Bearer <token>` value.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("missing or malformed bearer credential")]
pub struct MissingCredential;

/// Extract the bearer token from the request headers.
///
/// The `Bearer ` prefix is matched case-insensitively; everything after it
/// is returned verbatim, internal whitespace included. No side effects.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, MissingCredential> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(MissingCredential)?;

    const PREFIX: &str = "Bearer ";
    if value.len() <= PREFIX.len()
        || !value.as_bytes()[..PREFIX.len()].eq_ignore_ascii_case(PREFIX.as_bytes())
    {
        return Err(MissingCredential);
    }

    Ok(&value[PREFIX.len()..])
}
