//! Storefront collections and the wire boundary that validates them.
//!
//! The backend serves collections with a free-form `collectionType` string.
//! [`RawCollection`] mirrors that shape; [`Collection`] is the validated form
//! where each collection type carries the fields it requires.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CollectionId, ProductId, Visibility};

/// Wire name of the featured collection type.
pub const FEATURED: &str = "FEATURED";
/// Wire name of the banner collection type.
pub const BANNER: &str = "BANNER";

/// A reference from a collection to a product, with the product's position
/// inside that collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: ProductId,
    #[serde(default)]
    pub index: i64,
}

impl ProductRef {
    #[must_use]
    pub fn new(id: impl Into<ProductId>, index: i64) -> Self {
        Self {
            id: id.into(),
            index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignDuration {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerImages {
    pub desktop_image: String,
    pub mobile_image: String,
}

/// Collection type with the fields each variant requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionKind {
    Featured,
    Banner { images: BannerImages },
    Other(String),
}

impl CollectionKind {
    /// Wire name of this collection type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Featured => FEATURED,
            Self::Banner { .. } => BANNER,
            Self::Other(name) => name,
        }
    }

    #[must_use]
    pub const fn is_featured(&self) -> bool {
        matches!(self, Self::Featured)
    }
}

/// Collection record exactly as served by the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    pub id: CollectionId,
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub collection_type: String,
    #[serde(default)]
    pub banner_images: Option<RawBannerImages>,
    #[serde(default)]
    pub campaign_duration: CampaignDuration,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub products: Option<Vec<ProductRef>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBannerImages {
    pub desktop_image: Option<String>,
    pub mobile_image: Option<String>,
}

/// A collection rejected at the wire boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("banner collection {0} is missing its {1} image")]
    MissingBannerImage(CollectionId, &'static str),
}

/// A validated storefront collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: CollectionId,
    pub index: i64,
    pub title: String,
    pub slug: String,
    pub kind: CollectionKind,
    pub campaign_duration: CampaignDuration,
    pub visibility: Visibility,
    pub products: Vec<ProductRef>,
}

impl TryFrom<RawCollection> for Collection {
    type Error = CollectionError;

    fn try_from(raw: RawCollection) -> Result<Self, Self::Error> {
        let kind = match raw.collection_type.as_str() {
            FEATURED => CollectionKind::Featured,
            BANNER => {
                let images = raw.banner_images.unwrap_or_default();
                let desktop_image = images
                    .desktop_image
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| CollectionError::MissingBannerImage(raw.id.clone(), "desktop"))?;
                let mobile_image = images
                    .mobile_image
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| CollectionError::MissingBannerImage(raw.id.clone(), "mobile"))?;
                CollectionKind::Banner {
                    images: BannerImages {
                        desktop_image,
                        mobile_image,
                    },
                }
            }
            other => CollectionKind::Other(other.to_string()),
        };

        Ok(Self {
            id: raw.id,
            index: raw.index,
            title: raw.title,
            slug: raw.slug,
            kind,
            campaign_duration: raw.campaign_duration,
            visibility: raw.visibility,
            products: raw.products.unwrap_or_default(),
        })
    }
}

/// Validate a batch of raw collections, dropping (and logging) the invalid ones.
#[must_use]
pub fn validate_collections(raw: Vec<RawCollection>) -> Vec<Collection> {
    raw.into_iter()
        .filter_map(|record| match Collection::try_from(record) {
            Ok(collection) => Some(collection),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping invalid collection");
                None
            }
        })
        .collect()
}
