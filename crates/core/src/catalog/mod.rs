//! Catalog projections and the page-assembly pipeline.
//!
//! Everything here is a pure transform over data the storefront has already
//! fetched: pagination for category pages, collection enrichment and render
//! gates for the home page, and the discovery feed.

pub mod cart;
pub mod category;
pub mod collection;
pub mod discovery;
pub mod display;
pub mod enrichment;
pub mod hero;
pub mod pagination;
pub mod product;
pub mod render;

pub use cart::{Cart, CartItem, DEVICE_IDENTIFIER_COOKIE};
pub use category::{Category, CategorySection};
pub use collection::{
    BannerImages, CampaignDuration, Collection, CollectionError, CollectionKind, ProductRef,
    RawCollection, validate_collections,
};
pub use discovery::discovery_feed;
pub use display::{CategoryOutcome, display_name};
pub use enrichment::{
    EnrichedCollection, HomeEntry, HomeLayout, IndexedProduct, assemble_home,
    flatten_product_refs, product_ids, select_featured,
};
pub use hero::{HeroBanner, PageHero, hero_banner};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, paginate, parse_requested_page};
pub use product::{CARD_FIELDS, Highlights, KeyPoint, Product, ProductField};
pub use render::{HomeSection, render_collection};
