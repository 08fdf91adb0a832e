//! Home page category strip.

use serde::{Deserialize, Serialize};

use crate::types::Visibility;

/// Category listing plus the storefront toggle controlling its display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorySection {
    pub show_on_public_site: bool,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Category {
    pub index: i64,
    pub name: String,
    pub image: String,
    pub visibility: Visibility,
}

impl CategorySection {
    /// The strip renders only when enabled and non-empty.
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.show_on_public_site && !self.categories.is_empty()
    }

    /// Categories in display order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();
        categories.sort_by_key(|c| c.index);
        categories
    }
}
