//! API route handlers for admin.
//!
//! JSON endpoints behind the product and storefront editors.

pub mod alerts;
pub mod collections;
pub mod highlights;
pub mod overlays;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(highlights::router())
        .merge(collections::router())
        .merge(alerts::router())
        .merge(overlays::router())
}
