//! Catalog backend client for admin mutations.
//!
//! # Architecture
//!
//! - Plain JSON over HTTP with `reqwest`, bearer-authenticated
//! - No caching; admin always reads the current state
//! - Mutations answer with an `ActionResponse`; last write wins at the backend

mod client;

pub use client::BackendClient;

use thiserror::Error;

/// Errors that can occur when talking to the catalog backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend answered with a non-success status.
    #[error("Catalog backend returned {status}: {body}")]
    Status { status: u16, body: String },
}
