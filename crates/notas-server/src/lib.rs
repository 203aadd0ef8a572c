//! notas-server: HTTP API server for the Notas functions.
//!
//! This crate provides:
//! - The three public endpoints (`/helloWorld`, `/getUserNotes`,
//!   `/summarizeNote`)
//! - Bearer-credential extraction shared by the authenticated handlers
//! - Configuration loaded once at startup and carried in [`AppState`]
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers are request-in/response-out with no state between invocations.
//! External collaborators (identity, document store, summarizer) are held as
//! trait objects from `notas-backends`, so every handler tests against
//! in-memory fakes.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notas_backends;
pub use notas_core;
