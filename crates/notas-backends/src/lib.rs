//! notas-backends: external collaborators behind capability traits.
//!
//! This crate provides:
//! - [`TokenVerifier`]: bearer-token verification against the identity backend
//! - [`NoteStore`]: read access to the per-user document store
//! - [`NoteSummarizer`]: one-sentence summarization via an OpenAI-compatible API
//!
//! Each capability is an object-safe trait with one reqwest-backed
//! implementation. Handlers in `notas-server` hold `Arc<dyn ...>` handles,
//! so tests swap in in-memory fakes without any live backend.
//!
//! None of the clients retries: a failed call surfaces immediately as an
//! error for the handler to map to an HTTP response.

pub mod docstore;
pub mod identity;
pub mod summarizer;

pub use docstore::{HttpNoteStore, NoteStore, StoreError};
pub use identity::{HttpTokenVerifier, TokenVerifier, VerifyError};
pub use summarizer::{NoteSummarizer, OpenAiSummarizer, SummarizeError};
