//! Display data handed to templates.
//!
//! Templates never see catalog types directly; handlers convert them into
//! these flat views first.

use maison_core::catalog::{
    Cart, Category, EnrichedCollection, HeroBanner, HomeSection, Page, Product,
};
use maison_core::format_price;
use rust_decimal::Decimal;

// =============================================================================
// Product Cards
// =============================================================================

/// Product display data for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub hover_image: Option<String>,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub discount_label: Option<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub in_cart: bool,
    pub has_bundle: bool,
}

impl ProductCardView {
    /// Build a card, marking it when the shopper's cart already holds it.
    #[must_use]
    pub fn new(product: &Product, cart: Option<&Cart>) -> Self {
        let pricing = &product.pricing;
        let on_sale = pricing.is_on_sale();

        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            image: Some(product.images.main.clone()).filter(|s| !s.is_empty()),
            hover_image: product.images.gallery.first().cloned(),
            price: format_price(pricing.effective_price()),
            compare_at_price: on_sale.then(|| format_price(pricing.base_price)),
            discount_label: (on_sale && pricing.discount_percentage > Decimal::ZERO)
                .then(|| format!("-{}%", pricing.discount_percentage.normalize())),
            colors: product
                .options
                .colors
                .iter()
                .map(|c| c.name.clone())
                .collect(),
            sizes: product.options.sizes.inches.size_labels(),
            in_cart: cart.is_some_and(|c| c.contains_product(&product.id)),
            has_bundle: product.upsell.as_ref().is_some_and(|u| u.is_offered()),
        }
    }
}

/// Cards for a list of products.
#[must_use]
pub fn product_cards<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    cart: Option<&Cart>,
) -> Vec<ProductCardView> {
    products
        .into_iter()
        .map(|p| ProductCardView::new(p, cart))
        .collect()
}

// =============================================================================
// Home Page
// =============================================================================

/// Hero banner display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub title: String,
    pub href: String,
    pub desktop_image: String,
    pub mobile_image: String,
}

impl From<HeroBanner> for HeroView {
    fn from(hero: HeroBanner) -> Self {
        Self {
            title: hero.title,
            href: hero.destination_url,
            desktop_image: hero.desktop_image,
            mobile_image: hero.mobile_image,
        }
    }
}

/// A tile of the category strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLinkView {
    pub name: String,
    pub href: String,
    pub image: String,
}

impl From<&Category> for CategoryLinkView {
    fn from(category: &Category) -> Self {
        let key = category.name.to_lowercase();
        Self {
            name: category.name.clone(),
            href: format!("/category/{}", urlencoding::encode(&key)),
            image: category.image.clone(),
        }
    }
}

/// Banner artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub desktop_image: String,
    pub mobile_image: String,
}

/// A rendered home page section.
///
/// Featured sections carry product cards; banner sections carry artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub slug: String,
    pub products: Vec<ProductCardView>,
    pub banner: Option<BannerView>,
}

impl SectionView {
    #[must_use]
    pub fn new(section: HomeSection<'_>, cart: Option<&Cart>) -> Self {
        match section {
            HomeSection::Featured(collection) => Self::featured(collection, cart),
            HomeSection::Banner { collection, images } => Self {
                title: collection.title.clone(),
                slug: collection.slug.clone(),
                products: Vec::new(),
                banner: Some(BannerView {
                    desktop_image: images.desktop_image.clone(),
                    mobile_image: images.mobile_image.clone(),
                }),
            },
        }
    }

    fn featured(collection: &EnrichedCollection, cart: Option<&Cart>) -> Self {
        Self {
            title: collection.title.clone(),
            slug: collection.slug.clone(),
            products: product_cards(collection.products.iter().map(|p| &p.product), cart),
            banner: None,
        }
    }
}

// =============================================================================
// Category Page
// =============================================================================

/// Pager links for a category listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

impl PaginationView {
    #[must_use]
    pub fn new<T>(page: &Page<T>, base_href: &str) -> Self {
        Self {
            current_page: page.current_page,
            total_pages: page.total_pages,
            previous_href: page
                .has_previous()
                .then(|| format!("{base_href}?page={}", page.current_page - 1)),
            next_href: page
                .has_next()
                .then(|| format!("{base_href}?page={}", page.current_page + 1)),
        }
    }

    /// Whether there is more than one page to move between.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}
