//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                  - Health check
//!
//! # Product editor
//! GET    /api/products/{id}/highlights            - Load highlights draft, open overlay
//! PUT    /api/products/{id}/highlights            - Save highlights
//!
//! # Storefront editor
//! GET    /api/storefront/collections              - Collections ordered by index
//! PUT    /api/storefront/collections/{id}/index   - Reposition a collection
//!
//! # Alerts
//! GET    /api/alerts                              - Current alert (or null)
//! DELETE /api/alerts                              - Dismiss
//!
//! # Overlays
//! GET    /api/overlays                            - Overlay table
//! POST   /api/overlays/{page}/{overlay}/show      - Show an overlay
//! POST   /api/overlays/{page}/{overlay}/hide      - Hide an overlay
//! ```

pub mod api;

use axum::{Router, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for admin.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(api::router())
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
