//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Home page (hero, categories, collections, discovery)
//! GET  /category/{name}?page= - Category listing
//! GET  /health                - Liveness check
//! GET  /health/ready          - Readiness check (catalog API reachable)
//! ```

pub mod category;
pub mod health;
pub mod home;

use axum::{Router, routing::get};
use axum_extra::extract::CookieJar;
use maison_core::catalog::DEVICE_IDENTIFIER_COOKIE;

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/category/{name}", get(category::show))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// The shopper's device identifier, if the cookie is set and non-empty.
pub(crate) fn device_identifier(jar: &CookieJar) -> Option<String> {
    jar.get(DEVICE_IDENTIFIER_COOKIE)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|value| !value.is_empty())
}
