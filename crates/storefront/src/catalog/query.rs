//! Product query parameters.

use maison_core::catalog::ProductField;
use maison_core::{ProductId, Visibility};

/// Filters and projection for `GET products`.
///
/// Empty `ids` and a missing `category` mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub ids: Vec<ProductId>,
    pub category: Option<String>,
    pub fields: Vec<ProductField>,
    pub visibility: Option<Visibility>,
}

impl ProductQuery {
    /// Products with the given identifiers.
    #[must_use]
    pub fn by_ids(ids: Vec<ProductId>) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    /// Products assigned to a category.
    #[must_use]
    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Every published product.
    #[must_use]
    pub fn published() -> Self {
        Self::default().visibility(Visibility::Published)
    }

    #[must_use]
    pub fn fields(mut self, fields: &[ProductField]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    #[must_use]
    pub const fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Query string pairs in a stable order.
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.ids.is_empty() {
            pairs.push((
                "ids",
                self.ids
                    .iter()
                    .map(ProductId::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
            ));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if !self.fields.is_empty() {
            pairs.push((
                "fields",
                self.fields
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            ));
        }
        if let Some(visibility) = self.visibility {
            pairs.push(("visibility", visibility.as_str().to_string()));
        }
        pairs
    }

    pub(crate) fn cache_key(&self) -> String {
        let parts: Vec<String> = self
            .to_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        format!("products:{}", parts.join("&"))
    }
}
