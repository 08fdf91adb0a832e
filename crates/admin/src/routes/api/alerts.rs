//! Alert API handlers.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use maison_core::alert::AlertMessage;

use crate::state::AppState;

/// Build the alerts router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/alerts", get(current_alert).delete(dismiss_alert))
}

/// The active alert, or `null`.
pub async fn current_alert(State(state): State<AppState>) -> Json<Option<AlertMessage>> {
    Json(state.alerts().read().await.current().cloned())
}

/// Dismiss the active alert.
pub async fn dismiss_alert(State(state): State<AppState>) -> StatusCode {
    state.alerts().write().await.dismiss();
    StatusCode::NO_CONTENT
}
