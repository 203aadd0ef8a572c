//! notas-core: domain types and pure logic for the Notas functions.
//!
//! This crate holds everything that can run without I/O:
//! - The note document type and its text-field priority rule
//! - The deterministic mock summarizer used when no live backend is configured
//! - The per-request caller identity value
//!
//! Handlers and backend clients live in `notas-server` and `notas-backends`;
//! nothing in this crate is async and nothing here touches the network.

pub mod identity;
pub mod note;
pub mod summary;

pub use identity::Identity;
pub use note::{NoteDocument, TEXT_FIELD_PRIORITY};
pub use summary::{EMPTY_NOTE_SUMMARY, SUMMARY_PREFIX, mock_summary};
