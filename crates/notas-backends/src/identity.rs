//! Bearer-token verification against the identity backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use notas_core::Identity;

/// Failure verifying a bearer token.
///
/// Handlers treat every variant uniformly as an authentication failure; the
/// distinction exists for server-side logging only.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The backend answered and rejected the token.
    #[error("identity backend rejected token (status {status})")]
    Rejected { status: u16 },

    /// The backend could not be reached or returned an unreadable body.
    #[error("identity backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Verifies a bearer credential and resolves the caller's uid.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and return the caller's identity.
    async fn verify(&self, token: &str) -> Result<Identity, VerifyError>;
}

/// Successful verification response body.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    uid: String,
}

/// HTTP client for the identity backend.
///
/// Contract: `POST {base}/verify` with the token forwarded as a bearer
/// header; 200 with `{"uid": "..."}` on success, any other status means the
/// token was rejected.
pub struct HttpTokenVerifier {
    client: Client,
    base_url: String,
}

impl HttpTokenVerifier {
    /// Create a verifier for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, VerifyError> {
        let url = format!("{}/verify", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Token rejected by identity backend");
            return Err(VerifyError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: VerifyResponse = response.json().await?;
        Ok(Identity::new(body.uid))
    }
}
