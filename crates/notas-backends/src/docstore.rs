//! Read access to the per-user note collections in the document store.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use notas_core::NoteDocument;

/// Failure reading from the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store answered with an unexpected status.
    #[error("document store returned status {status}: {body}")]
    Backend { status: u16, body: String },

    /// The store could not be reached or returned an unreadable body.
    #[error("document store unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Read-only view of a user's notes collection.
///
/// Documents are keyed by opaque string ids; listing order is whatever the
/// provider returns. No pagination, indexing, or transactions are used.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Fetch every document under `users/{uid}/notes`.
    async fn list_notes(&self, uid: &str) -> Result<Vec<NoteDocument>, StoreError>;

    /// Fetch one document, or `None` when it does not exist.
    async fn get_note(&self, uid: &str, id: &str) -> Result<Option<NoteDocument>, StoreError>;
}

/// Collection listing response body.
#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<NoteDocument>,
}

/// HTTP client for the document store.
///
/// Contract: `GET {base}/users/{uid}/notes` returns
/// `{"documents": [{"id", "fields"}, ...]}`; `GET {base}/users/{uid}/notes/{id}`
/// returns one document or 404.
pub struct HttpNoteStore {
    client: Client,
    base_url: String,
}

impl HttpNoteStore {
    /// Create a store client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self, uid: &str) -> String {
        format!("{}/users/{uid}/notes", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl NoteStore for HttpNoteStore {
    async fn list_notes(&self, uid: &str) -> Result<Vec<NoteDocument>, StoreError> {
        let response = self.client.get(self.collection_url(uid)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let listing: ListDocumentsResponse = response.json().await?;
        Ok(listing.documents)
    }

    async fn get_note(&self, uid: &str, id: &str) -> Result<Option<NoteDocument>, StoreError> {
        let url = format!("{}/{id}", self.collection_url(uid));
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let document: NoteDocument = response.json().await?;
        Ok(Some(document))
    }
}
