//! Cache types for catalog API responses.

use maison_core::catalog::{CategorySection, Collection, PageHero, Product};

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Vec<Product>),
    Collections(Vec<Collection>),
    Categories(Option<CategorySection>),
    Hero(Option<PageHero>),
}
