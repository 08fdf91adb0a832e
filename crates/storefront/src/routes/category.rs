//! Category listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use maison_core::catalog::{
    CARD_FIELDS, Cart, CategoryOutcome, Product, paginate, parse_requested_page,
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::ProductQuery;
use crate::error::add_breadcrumb;
use crate::filters;
use crate::routes::device_identifier;
use crate::state::AppState;
use crate::views::{PaginationView, ProductCardView, product_cards};

/// Query parameters for a category listing.
///
/// `page` is kept as raw text; anything unparsable means page 1.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub page: Option<String>,
}

/// Category listing template.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub display_name: String,
    pub products: Vec<ProductCardView>,
    pub pagination: PaginationView,
    pub cart_count: usize,
}

/// Empty catalog template.
#[derive(Template, WebTemplate)]
#[template(path = "category_empty.html")]
pub struct CategoryEmptyTemplate {
    pub cart_count: usize,
}

/// Display one page of a category.
#[instrument(skip(state, jar))]
pub async fn show(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<CategoryParams>,
    jar: CookieJar,
) -> Response {
    let catalog = state.catalog();
    let device = device_identifier(&jar);

    let query = ProductQuery::in_category(category.clone()).fields(CARD_FIELDS);
    let fetch_cart = async {
        match device.as_deref() {
            Some(device) => catalog.get_cart(device).await.unwrap_or_else(|e| {
                tracing::error!("Failed to fetch cart: {e}");
                None
            }),
            None => None,
        }
    };
    let (products, cart) = tokio::join!(catalog.get_products(&query), fetch_cart);

    let products: Vec<Product> = products.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch category products: {e}");
        Vec::new()
    });

    let requested = parse_requested_page(params.page.as_deref());
    let page = paginate(products, requested, state.config().category_page_size);
    let cart = cart.as_ref();
    let cart_count = cart.map_or(0, Cart::item_count);

    match CategoryOutcome::from_page(&category, page) {
        CategoryOutcome::Empty => CategoryEmptyTemplate { cart_count }.into_response(),
        CategoryOutcome::Listing { display_name, page } => {
            add_breadcrumb(
                "navigation",
                "Viewed category",
                &[
                    ("category", category.as_str()),
                    ("page", &page.current_page.to_string()),
                ],
            );
            let base_href = format!("/category/{}", urlencoding::encode(&category));
            CategoryTemplate {
                display_name,
                pagination: PaginationView::new(&page, &base_href),
                products: product_cards(&page.items, cart),
                cart_count,
            }
            .into_response()
        }
    }
}
