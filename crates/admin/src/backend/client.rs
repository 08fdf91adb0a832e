//! Catalog backend client implementation.

use std::sync::Arc;

use maison_core::ProductId;
use maison_core::alert::ActionResponse;
use maison_core::catalog::{Collection, Product, RawCollection, validate_collections};
use maison_core::editor::{ChangeCollectionIndex, HighlightsUpdate};
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::BackendError;
use crate::config::BackendConfig;

/// Product fields the highlights editor reads.
const EDITOR_PRODUCT_FIELDS: &str = "id,name,slug,highlights";

/// Collection fields the storefront editor reads.
const COLLECTION_FIELDS: &str =
    "id,index,title,slug,collectionType,bannerImages,campaignDuration,visibility,products";

/// Maximum number of response bytes echoed into logs and errors.
const BODY_PREVIEW_CHARS: usize = 500;

/// Client for catalog backend reads and mutations.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: Url,
    admin_token: SecretString,
}

impl BackendClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                admin_token: config.admin_token.clone(),
            }),
        }
    }

    /// Build a URL from path segments, escaping each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.inner
            .client
            .request(method, url)
            .bearer_auth(self.inner.admin_token.expose_secret())
    }

    /// Send a request and decode the JSON body. A `404` is reported as `None`.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, BackendError> {
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("Catalog backend returned 404");
            return Ok(None);
        }

        let body = response.text().await?;

        if !status.is_success() {
            let preview = body.chars().take(BODY_PREVIEW_CHARS).collect::<String>();
            tracing::error!(
                status = %status,
                body = %preview,
                "Catalog backend returned non-success status"
            );
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: preview,
            });
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<Option<T>>(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(BODY_PREVIEW_CHARS).collect::<String>(),
                "Failed to parse catalog backend response"
            );
            BackendError::Parse(e)
        })
    }

    /// Send a mutation and read its `ActionResponse`.
    async fn mutate<B: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<ActionResponse, BackendError> {
        let request = self.request(method, url).json(body);
        self.send_json::<ActionResponse>(request)
            .await?
            .ok_or_else(|| BackendError::Status {
                status: 404,
                body: "resource not found".to_string(),
            })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a single product with the fields the highlights editor needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, BackendError> {
        let mut url = self.endpoint(&["products"]);
        url.query_pairs_mut()
            .append_pair("ids", id.as_str())
            .append_pair("fields", EDITOR_PRODUCT_FIELDS);

        let products: Vec<Product> = self
            .send_json(self.request(Method::GET, url))
            .await?
            .unwrap_or_default();

        Ok(products.into_iter().find(|p| &p.id == id))
    }

    /// Save a product's highlights as a single patch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend rejects it, or the
    /// response is not an `ActionResponse`.
    #[instrument(skip(self, update), fields(product_id = %update.id))]
    pub async fn update_product(
        &self,
        update: &HighlightsUpdate,
    ) -> Result<ActionResponse, BackendError> {
        let url = self.endpoint(&["products", update.id.as_str()]);
        self.mutate(Method::PATCH, url, update).await
    }

    // =========================================================================
    // Collection Methods
    // =========================================================================

    /// Get every collection regardless of visibility.
    ///
    /// Records that fail validation are dropped and logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_collections(&self) -> Result<Vec<Collection>, BackendError> {
        let mut url = self.endpoint(&["collections"]);
        url.query_pairs_mut().append_pair("fields", COLLECTION_FIELDS);

        let raw: Vec<RawCollection> = self
            .send_json(self.request(Method::GET, url))
            .await?
            .unwrap_or_default();

        Ok(validate_collections(raw))
    }

    /// Move a collection to a new storefront position.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend rejects it, or the
    /// response is not an `ActionResponse`.
    #[instrument(skip(self, change), fields(collection_id = %change.id, index = change.index))]
    pub async fn change_collection_index(
        &self,
        change: &ChangeCollectionIndex,
    ) -> Result<ActionResponse, BackendError> {
        let url = self.endpoint(&["collections", change.id.as_str(), "index"]);
        self.mutate(Method::PUT, url, change).await
    }
}
