//! In-memory backend fakes for handler tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use notas_backends::{
    NoteStore, NoteSummarizer, StoreError, SummarizeError, TokenVerifier, VerifyError,
};
use notas_core::{Identity, NoteDocument};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Verifier that accepts every token as one fixed uid, or rejects all.
pub(crate) struct StaticVerifier {
    uid: Option<String>,
}

impl StaticVerifier {
    pub(crate) fn accepting(uid: &str) -> Self {
        Self {
            uid: Some(uid.to_string()),
        }
    }

    pub(crate) fn rejecting() -> Self {
        Self { uid: None }
    }
}

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, _token: &str) -> Result<Identity, VerifyError> {
        match &self.uid {
            Some(uid) => Ok(Identity::new(uid.clone())),
            None => Err(VerifyError::Rejected { status: 401 }),
        }
    }
}

/// Store serving fixed per-uid collections, or failing outright.
pub(crate) struct StaticStore {
    collections: HashMap<String, Vec<NoteDocument>>,
    fail: bool,
}

impl StaticStore {
    pub(crate) fn empty() -> Self {
        Self {
            collections: HashMap::new(),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            collections: HashMap::new(),
            fail: true,
        }
    }

    pub(crate) fn with_notes(uid: &str, notes: Vec<(&str, Value)>) -> Self {
        let documents = notes
            .into_iter()
            .map(|(id, fields)| {
                let Value::Object(map) = fields else {
                    panic!("note fields must be a JSON object");
                };
                NoteDocument::new(id, map)
            })
            .collect();
        Self {
            collections: HashMap::from([(uid.to_string(), documents)]),
            fail: false,
        }
    }
}

#[async_trait]
impl NoteStore for StaticStore {
    async fn list_notes(&self, uid: &str) -> Result<Vec<NoteDocument>, StoreError> {
        if self.fail {
            return Err(StoreError::Backend {
                status: 503,
                body: "store down".to_string(),
            });
        }
        Ok(self.collections.get(uid).cloned().unwrap_or_default())
    }

    async fn get_note(&self, uid: &str, id: &str) -> Result<Option<NoteDocument>, StoreError> {
        if self.fail {
            return Err(StoreError::Backend {
                status: 503,
                body: "store down".to_string(),
            });
        }
        Ok(self
            .collections
            .get(uid)
            .and_then(|notes| notes.iter().find(|note| note.id == id))
            .cloned())
    }
}

/// Scripted summarizer outcomes; `Never` fails the test if reached.
pub(crate) enum StaticSummarizer {
    Reply(String),
    Backend { status: u16, body: String },
    Never,
}

#[async_trait]
impl NoteSummarizer for StaticSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
        match self {
            Self::Reply(summary) => Ok(summary.clone()),
            Self::Backend { status, body } => Err(SummarizeError::Backend {
                status: *status,
                body: body.clone(),
            }),
            Self::Never => panic!("summarizer must not be called on this path"),
        }
    }
}

/// Config with an API key configured and all mock flags off.
pub(crate) fn test_config() -> ServerConfig {
    ServerConfig {
        port: 3000,
        log_level: "info".to_string(),
        cors_allowed_origins: "*".to_string(),
        identity_base_url: "http://identity.invalid".to_string(),
        docstore_base_url: "http://store.invalid".to_string(),
        openai_base_url: "http://openai.invalid".to_string(),
        openai_api_key: Some("sk-test".to_string()),
        force_mock: false,
        emulator: false,
    }
}

/// State for routes that never reach the summarizer.
pub(crate) fn state_with(
    verifier: StaticVerifier,
    store: StaticStore,
    config: ServerConfig,
) -> AppState {
    state_full(verifier, store, StaticSummarizer::Never, config)
}

pub(crate) fn state_full(
    verifier: StaticVerifier,
    store: StaticStore,
    summarizer: StaticSummarizer,
    config: ServerConfig,
) -> AppState {
    AppState::new(
        Arc::new(verifier),
        Arc::new(store),
        Arc::new(summarizer),
        config,
    )
}
