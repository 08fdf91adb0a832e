//! Storefront collections editor API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use maison_core::alert::{AlertMessage, CHANGE_COLLECTION_INDEX_FAILED};
use maison_core::catalog::Collection;
use maison_core::editor::{ChangeCollectionIndex, CollectionIndexInput};
use maison_core::overlay::{CHANGE_COLLECTION_INDEX_OVERLAY, STOREFRONT_PAGE};
use maison_core::{CollectionId, Visibility};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the collections router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/storefront/collections", get(list_collections))
        .route(
            "/api/storefront/collections/{id}/index",
            put(change_collection_index),
        )
}

/// A row of the storefront collections table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: CollectionId,
    pub index: i64,
    pub title: String,
    pub slug: String,
    pub collection_type: String,
    pub visibility: Visibility,
    pub product_count: usize,
}

impl From<Collection> for CollectionSummary {
    fn from(collection: Collection) -> Self {
        Self {
            collection_type: collection.kind.as_str().to_string(),
            product_count: collection.products.len(),
            id: collection.id,
            index: collection.index,
            title: collection.title,
            slug: collection.slug,
            visibility: collection.visibility,
        }
    }
}

/// Request for repositioning a collection.
///
/// The index arrives as typed into the editor and must be digits only.
#[derive(Debug, Deserialize)]
pub struct ChangeIndexRequest {
    pub index: String,
}

/// List every collection ordered by storefront position.
///
/// # Errors
///
/// Returns a backend error if the collections cannot be fetched.
#[instrument(skip(state))]
pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<Vec<CollectionSummary>>> {
    let mut collections = state.backend().get_collections().await?;
    collections.sort_by_key(|c| c.index);

    Ok(Json(
        collections.into_iter().map(CollectionSummary::from).collect(),
    ))
}

/// Move a collection to a new index.
///
/// An empty index means position 0. The outcome is posted as the current
/// alert and the overlay closes either way.
///
/// # Errors
///
/// Returns `BadRequest` if the index is not a digits-only number in range.
/// Rejected input leaves the overlay open and posts no alert.
#[instrument(skip(state, body))]
pub async fn change_collection_index(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ChangeIndexRequest>,
) -> Result<Json<AlertMessage>> {
    let index = CollectionIndexInput::parse(&body.index)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let change = ChangeCollectionIndex {
        id: CollectionId::new(id),
        index,
    };
    let outcome = state.backend().change_collection_index(&change).await;

    if let Err(e) = &outcome {
        tracing::error!(error = %e, collection_id = %change.id, "Failed to change collection index");
    }

    let alert = AlertMessage::from_outcome(&outcome, CHANGE_COLLECTION_INDEX_FAILED);
    state.alerts().write().await.post(alert.clone());
    state
        .overlays()
        .write()
        .await
        .hide(STOREFRONT_PAGE, CHANGE_COLLECTION_INDEX_OVERLAY);

    Ok(Json(alert))
}
