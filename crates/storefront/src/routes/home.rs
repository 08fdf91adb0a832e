//! Home page route handler.
//!
//! The page is assembled in two rounds of catalog calls. Collections,
//! categories, the hero and the cart are fetched together; the featured
//! products and the discovery pool follow once the featured references are
//! known. Any failed fetch degrades to an empty result.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use maison_core::catalog::{
    CARD_FIELDS, Cart, CategorySection, Collection, PageHero, Product, assemble_home,
    discovery_feed, flatten_product_refs, hero_banner, product_ids, select_featured,
};
use maison_core::{ProductId, Visibility};
use tracing::instrument;

use crate::catalog::{CatalogClient, ProductQuery};
use crate::filters;
use crate::routes::device_identifier;
use crate::state::AppState;
use crate::views::{CategoryLinkView, HeroView, ProductCardView, SectionView, product_cards};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Hero banner, when it passed its render gate.
    pub hero: Option<HeroView>,
    /// Category strip; empty when hidden.
    pub categories: Vec<CategoryLinkView>,
    /// Collection sections in display order.
    pub sections: Vec<SectionView>,
    /// Shuffled products not already shown up top.
    pub discovery: Vec<ProductCardView>,
    /// Items in the shopper's cart.
    pub cart_count: usize,
}

/// Display the home page.
#[instrument(skip(state, jar))]
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let catalog = state.catalog();
    let device = device_identifier(&jar);

    let (collections, categories, hero, cart) = tokio::join!(
        catalog.get_collections(Visibility::Published),
        catalog.get_categories(Visibility::Visible),
        catalog.get_page_hero(),
        fetch_cart(catalog, device.as_deref()),
    );

    let collections: Vec<Collection> = collections.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch collections: {e}");
        Vec::new()
    });
    let categories: Option<CategorySection> = categories.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch categories: {e}");
        None
    });
    let hero: Option<PageHero> = hero.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch page hero: {e}");
        None
    });

    let featured_ids = product_ids(&flatten_product_refs(&select_featured(&collections)));
    let (featured_products, pool) = tokio::join!(
        fetch_featured(catalog, featured_ids),
        fetch_discovery_pool(catalog),
    );

    let layout = assemble_home(&collections, featured_products);
    let discovery = {
        let mut rng = rand::rng();
        discovery_feed(
            pool,
            &layout.excluded,
            state.config().discovery_feed_size,
            &mut rng,
        )
    };

    let cart = cart.as_ref();
    HomeTemplate {
        hero: hero.as_ref().and_then(hero_banner).map(HeroView::from),
        categories: categories
            .as_ref()
            .filter(|section| section.is_displayed())
            .map(|section| {
                section
                    .ordered()
                    .into_iter()
                    .map(CategoryLinkView::from)
                    .collect()
            })
            .unwrap_or_default(),
        sections: layout
            .sections()
            .into_iter()
            .map(|section| SectionView::new(section, cart))
            .collect(),
        discovery: product_cards(&discovery, cart),
        cart_count: cart.map_or(0, Cart::item_count),
    }
}

/// Fetch the shopper's cart; no device cookie means no cart.
async fn fetch_cart(catalog: &CatalogClient, device: Option<&str>) -> Option<Cart> {
    let device = device?;
    catalog.get_cart(device).await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch cart: {e}");
        None
    })
}

/// Fetch the products referenced by featured collections.
async fn fetch_featured(catalog: &CatalogClient, ids: Vec<ProductId>) -> Vec<Product> {
    if ids.is_empty() {
        return Vec::new();
    }
    let query = ProductQuery::by_ids(ids)
        .fields(CARD_FIELDS)
        .visibility(Visibility::Published);
    catalog.get_products(&query).await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch featured products: {e}");
        Vec::new()
    })
}

/// Fetch every published product as discovery candidates.
async fn fetch_discovery_pool(catalog: &CatalogClient) -> Vec<Product> {
    let query = ProductQuery::published().fields(CARD_FIELDS);
    catalog.get_products(&query).await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch discovery products: {e}");
        Vec::new()
    })
}
