//! Caller identity resolved from a bearer credential.

use serde::{Deserialize, Serialize};

/// Identity of the authenticated caller for the duration of one request.
///
/// Produced by the identity backend from a bearer token and never persisted.
/// The `uid` is the opaque, stable user id that keys the caller's document
/// collections (`users/{uid}/notes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user id assigned by the identity provider.
    pub uid: String,
}

impl Identity {
    /// Create an identity from a provider-assigned uid.
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}
