//! Catalog API client.
//!
//! # Architecture
//!
//! - Plain JSON over HTTP with `reqwest`
//! - The catalog API is the source of truth; nothing is stored locally
//! - In-memory caching via `moka` for catalog reads (TTL from config)
//! - Carts are per-shopper and never cached
//!
//! # Example
//!
//! ```rust,ignore
//! use maison_storefront::catalog::{CatalogClient, ProductQuery};
//!
//! let client = CatalogClient::new(&config.catalog);
//! let products = client
//!     .get_products(&ProductQuery::in_category("dresses").fields(CARD_FIELDS))
//!     .await?;
//! ```

mod cache;
mod client;
mod query;

pub use client::CatalogClient;
pub use query::ProductQuery;

use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The catalog API answered with a non-success status.
    #[error("Catalog API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Rate limited by the catalog API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}
