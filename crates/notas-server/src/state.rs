//! Application state shared across handlers.

use std::sync::Arc;

use notas_backends::{NoteStore, NoteSummarizer, TokenVerifier};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Cloneable and extracted in handlers via `State<AppState>`. The backend
/// handles are trait objects so tests can inject in-memory fakes; the
/// configuration snapshot is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Identity backend client.
    verifier: Arc<dyn TokenVerifier>,
    /// Document store client.
    store: Arc<dyn NoteStore>,
    /// Summarization backend client.
    summarizer: Arc<dyn NoteSummarizer>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        store: Arc<dyn NoteStore>,
        summarizer: Arc<dyn NoteSummarizer>,
        config: ServerConfig,
    ) -> Self {
        Self {
            verifier,
            store,
            summarizer,
            config: Arc::new(config),
        }
    }

    /// Get the identity backend client.
    pub fn verifier(&self) -> &dyn TokenVerifier {
        self.verifier.as_ref()
    }

    /// Get the document store client.
    pub fn store(&self) -> &dyn NoteStore {
        self.store.as_ref()
    }

    /// Get the summarization backend client.
    pub fn summarizer(&self) -> &dyn NoteSummarizer {
        self.summarizer.as_ref()
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
