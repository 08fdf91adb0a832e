//! Product highlights editor API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use maison_core::ProductId;
use maison_core::alert::{AlertMessage, UPDATE_PRODUCT_FAILED};
use maison_core::editor::HighlightsDraft;
use maison_core::overlay::{EDIT_PRODUCT_PAGE, HIGHLIGHTS_OVERLAY};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the highlights router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/products/{id}/highlights",
        get(load_highlights).put(save_highlights),
    )
}

/// Response for loading the highlights editor.
#[derive(Debug, Serialize)]
pub struct HighlightsEditor {
    pub id: ProductId,
    pub name: String,
    pub highlights: HighlightsDraft,
}

/// Load a product's highlights as an editable draft and open the overlay.
///
/// # Errors
///
/// Returns `NotFound` if the product does not exist, or a backend error if it
/// cannot be fetched.
#[instrument(skip(state))]
pub async fn load_highlights(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HighlightsEditor>> {
    let id = ProductId::new(id);
    let product = state
        .backend()
        .get_product(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    state
        .overlays()
        .write()
        .await
        .show(EDIT_PRODUCT_PAGE, HIGHLIGHTS_OVERLAY);

    Ok(Json(HighlightsEditor {
        highlights: HighlightsDraft::from_highlights(&product.highlights),
        id: product.id,
        name: product.name,
    }))
}

/// Save a highlights draft.
///
/// Key points are saved in their `order` and renumbered from 1. The outcome
/// is posted as the current alert and the overlay closes either way.
#[instrument(skip(state, draft))]
pub async fn save_highlights(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<HighlightsDraft>,
) -> Json<AlertMessage> {
    let update = draft.to_update(ProductId::new(id));
    let outcome = state.backend().update_product(&update).await;

    if let Err(e) = &outcome {
        tracing::error!(error = %e, product_id = %update.id, "Failed to update product highlights");
    }

    let alert = AlertMessage::from_outcome(&outcome, UPDATE_PRODUCT_FAILED);
    state.alerts().write().await.post(alert.clone());
    state
        .overlays()
        .write()
        .await
        .hide(EDIT_PRODUCT_PAGE, HIGHLIGHTS_OVERLAY);

    Json(alert)
}
