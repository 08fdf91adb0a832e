//! Category page pagination.

/// Products per category page when no override is configured.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// 1-based page actually served after clamping.
    pub current_page: usize,
    /// Number of pages; zero for an empty listing.
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Interpret the raw `page` query value.
///
/// Any numeric value is accepted: fractions truncate toward zero and values
/// beyond `i64` saturate, so an oversized request still clamps to the last
/// page. Missing, non-numeric and zero values fall back to page 1. Negative
/// values pass through and are clamped by [`paginate`].
#[must_use]
pub fn parse_requested_page(raw: Option<&str>) -> i64 {
    raw.map(str::trim)
        .and_then(|value| {
            value.parse::<i64>().ok().or_else(|| {
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|n| !n.is_nan())
                    .map(truncate_page)
            })
        })
        .filter(|&page| page != 0)
        .unwrap_or(1)
}

/// Truncate toward zero; `as` saturates at the `i64` bounds.
#[allow(clippy::cast_possible_truncation)]
fn truncate_page(value: f64) -> i64 {
    value.trunc() as i64
}

/// Slice `items` into the requested page.
///
/// `total_pages = ceil(len / page_size)` and the requested page is clamped
/// into `[1, total_pages]`. An empty listing always serves page 1 with no
/// items. A zero `page_size` is treated as 1.
#[must_use]
pub fn paginate<T>(items: Vec<T>, requested_page: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size);

    let upper = i64::try_from(total_pages).unwrap_or(i64::MAX);
    let clamped = requested_page.min(upper).max(1);
    let current_page = usize::try_from(clamped).unwrap_or(1);

    let start = (current_page - 1).saturating_mul(page_size);
    let items = items.into_iter().skip(start).take(page_size).collect();

    Page {
        current_page,
        total_pages,
        items,
    }
}
