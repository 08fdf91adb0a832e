//! Render decisions for home page collections.

use super::collection::{BannerImages, Collection, CollectionKind};
use super::enrichment::{EnrichedCollection, HomeEntry, HomeLayout};

/// Resolved products a featured collection needs before it renders.
pub const FEATURED_MIN_PRODUCTS: usize = 3;
/// Products a banner collection needs before it renders.
pub const BANNER_MIN_PRODUCTS: usize = 1;

/// A collection that passed its render gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HomeSection<'a> {
    Featured(&'a EnrichedCollection),
    Banner {
        collection: &'a Collection,
        images: &'a BannerImages,
    },
}

/// Decide whether a merged entry renders, and as what.
#[must_use]
pub fn render_collection(entry: &HomeEntry) -> Option<HomeSection<'_>> {
    match entry {
        HomeEntry::Featured(collection) => (collection.products.len()
            >= FEATURED_MIN_PRODUCTS)
            .then_some(HomeSection::Featured(collection)),
        HomeEntry::Other(collection) => match &collection.kind {
            CollectionKind::Banner { images } => (collection.products.len()
                >= BANNER_MIN_PRODUCTS)
                .then_some(HomeSection::Banner { collection, images }),
            CollectionKind::Featured | CollectionKind::Other(_) => None,
        },
    }
}

impl HomeLayout {
    /// Sections that render, in order.
    #[must_use]
    pub fn sections(&self) -> Vec<HomeSection<'_>> {
        self.entries.iter().filter_map(render_collection).collect()
    }
}
