//! Overlay visibility API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use maison_core::overlay::OverlayState;

use crate::state::AppState;

/// Build the overlays router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/overlays", get(list_overlays))
        .route("/api/overlays/{page}/{overlay}/show", post(show_overlay))
        .route("/api/overlays/{page}/{overlay}/hide", post(hide_overlay))
}

/// Every known overlay and whether it is open.
pub async fn list_overlays(State(state): State<AppState>) -> Json<Vec<OverlayState>> {
    Json(state.overlays().read().await.entries())
}

pub async fn show_overlay(
    State(state): State<AppState>,
    Path((page, overlay)): Path<(String, String)>,
) -> Json<OverlayState> {
    state.overlays().write().await.show(&page, &overlay);
    Json(OverlayState {
        page,
        overlay,
        visible: true,
    })
}

pub async fn hide_overlay(
    State(state): State<AppState>,
    Path((page, overlay)): Path<(String, String)>,
) -> Json<OverlayState> {
    state.overlays().write().await.hide(&page, &overlay);
    Json(OverlayState {
        page,
        overlay,
        visible: false,
    })
}
