//! Product projections as served by the catalog backend.

use serde::{Deserialize, Serialize};

use crate::types::{Pricing, ProductId, UpsellId, Visibility};

/// Fields a product projection can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Slug,
    Description,
    Highlights,
    Pricing,
    Images,
    Options,
    Upsell,
}

impl ProductField {
    /// Field name as understood by the catalog backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Slug => "slug",
            Self::Description => "description",
            Self::Highlights => "highlights",
            Self::Pricing => "pricing",
            Self::Images => "images",
            Self::Options => "options",
            Self::Upsell => "upsell",
        }
    }
}

/// Fields needed to render a product card.
pub const CARD_FIELDS: &[ProductField] = &[
    ProductField::Id,
    ProductField::Name,
    ProductField::Slug,
    ProductField::Description,
    ProductField::Pricing,
    ProductField::Images,
    ProductField::Options,
    ProductField::Upsell,
    ProductField::Highlights,
];

/// A read-only product projection.
///
/// Only `id` is guaranteed; every other field defaults when the projection
/// did not request it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub images: ProductImages,
    #[serde(default)]
    pub options: ProductOptions,
    #[serde(default)]
    pub highlights: Highlights,
    #[serde(default)]
    pub upsell: Option<Upsell>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
}

impl Product {
    /// Minimal product with only an identifier and a name.
    #[must_use]
    pub fn named(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: String::new(),
            description: String::new(),
            pricing: Pricing::default(),
            images: ProductImages::default(),
            options: ProductOptions::default(),
            highlights: Highlights::default(),
            upsell: None,
            visibility: None,
        }
    }
}

/// Main image plus gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProductImages {
    pub main: String,
    pub gallery: Vec<String>,
}

/// Color and size options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProductOptions {
    pub colors: Vec<ColorOption>,
    pub sizes: SizeChart,
}

/// A purchasable color with its swatch image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ColorOption {
    pub name: String,
    pub image: String,
}

/// Size chart in both unit systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SizeChart {
    pub inches: SizeTable,
    pub centimeters: SizeTable,
}

/// Ordered columns and free-form rows keyed by column label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SizeTable {
    pub columns: Vec<SizeColumn>,
    pub rows: Vec<std::collections::BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SizeColumn {
    pub label: String,
    pub order: i64,
}

impl SizeTable {
    /// Size labels taken from the first column, in row order.
    #[must_use]
    pub fn size_labels(&self) -> Vec<String> {
        let Some(first) = self.columns.iter().min_by_key(|c| c.order) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row.get(&first.label).cloned())
            .collect()
    }
}

/// Marketing headline plus ordered key points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Highlights {
    pub headline: String,
    pub key_points: Vec<KeyPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyPoint {
    pub text: String,
    pub index: i64,
}

/// A bundled product offer attached to a primary product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upsell {
    pub id: UpsellId,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub products: Vec<UpsellProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsellProduct {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub base_price: rust_decimal::Decimal,
    #[serde(default)]
    pub images: ProductImages,
}

impl Upsell {
    /// Whether the bundle is offered on the public site.
    #[must_use]
    pub fn is_offered(&self) -> bool {
        self.visibility == Visibility::Published && !self.products.is_empty()
    }
}
