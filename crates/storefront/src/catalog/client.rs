//! Catalog API client implementation.

use std::sync::Arc;

use maison_core::Visibility;
use maison_core::catalog::{
    Cart, CategorySection, Collection, PageHero, Product, RawCollection, validate_collections,
};
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::CatalogError;
use super::cache::CacheValue;
use super::query::ProductQuery;
use crate::config::CatalogConfig;

/// Collection fields the home page reads.
const COLLECTION_FIELDS: &str =
    "id,index,title,slug,collectionType,bannerImages,campaignDuration,visibility,products";

/// Maximum number of response bytes echoed into logs and errors.
const BODY_PREVIEW_CHARS: usize = 500;

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the catalog API.
///
/// Catalog reads (products, collections, categories, hero) are cached for
/// the configured TTL. A `404` or a `null` body is reported as `None`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    api_token: Option<SecretString>,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                api_token: config.api_token.clone(),
                cache,
            }),
        }
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, CatalogError> {
        let mut url = self.inner.base_url.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Execute a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, CatalogError> {
        let mut request = self.inner.client.get(url);
        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("Catalog API returned 404");
            return Ok(None);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            let preview = body.chars().take(BODY_PREVIEW_CHARS).collect::<String>();
            tracing::error!(
                status = %status,
                body = %preview,
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
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
                "Failed to parse catalog API response"
            );
            CatalogError::Parse(e)
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get products matching a query.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError> {
        let cache_key = query.cache_key();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let url = self.endpoint("products", &query.to_pairs())?;
        let products: Vec<Product> = self.get_json(url).await?.unwrap_or_default();

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    // =========================================================================
    // Storefront Layout Methods
    // =========================================================================

    /// Get collections with the given visibility.
    ///
    /// Records that fail validation are dropped and logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_collections(
        &self,
        visibility: Visibility,
    ) -> Result<Vec<Collection>, CatalogError> {
        let cache_key = format!("collections:{visibility}");

        if let Some(CacheValue::Collections(collections)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for collections");
            return Ok(collections);
        }

        let url = self.endpoint(
            "collections",
            &[
                ("fields", COLLECTION_FIELDS.to_string()),
                ("visibility", visibility.as_str().to_string()),
            ],
        )?;
        let raw: Vec<RawCollection> = self.get_json(url).await?.unwrap_or_default();
        let collections = validate_collections(raw);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Collections(collections.clone()))
            .await;

        Ok(collections)
    }

    /// Get the category strip.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_categories(
        &self,
        visibility: Visibility,
    ) -> Result<Option<CategorySection>, CatalogError> {
        let cache_key = format!("categories:{visibility}");

        if let Some(CacheValue::Categories(section)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for categories");
            return Ok(section);
        }

        let url = self.endpoint("categories", &[("visibility", visibility.as_str().to_string())])?;
        let section: Option<CategorySection> = self.get_json(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Categories(section.clone()))
            .await;

        Ok(section)
    }

    /// Get the home page hero.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_page_hero(&self) -> Result<Option<PageHero>, CatalogError> {
        let cache_key = "page-hero".to_string();

        if let Some(CacheValue::Hero(hero)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for page hero");
            return Ok(hero);
        }

        let url = self.endpoint("page-hero", &[])?;
        let hero: Option<PageHero> = self.get_json(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Hero(hero.clone()))
            .await;

        Ok(hero)
    }

    // =========================================================================
    // Cart Methods
    // =========================================================================

    /// Get the cart for a device. Never cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, device_identifier: &str) -> Result<Option<Cart>, CatalogError> {
        let mut url = self.endpoint("carts/", &[])?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(device_identifier);
        }
        self.get_json(url).await
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Whether the catalog API answers at all.
    ///
    /// Any response below 500 counts as reachable.
    pub async fn ping(&self) -> bool {
        let Ok(url) = self.endpoint("page-hero", &[]) else {
            return false;
        };
        let mut request = self.inner.client.get(url);
        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token.expose_secret());
        }
        match request.send().await {
            Ok(response) => !response.status().is_server_error(),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog API unreachable");
                false
            }
        }
    }
}
