//! Category display names and the category page outcome.

use super::pagination::Page;

/// Heading shown above a category listing.
///
/// The category key is matched case-insensitively: `men` and `catch-all`
/// have fixed names; everything else is a women's category.
#[must_use]
pub fn display_name(category: &str) -> String {
    match category.to_lowercase().as_str() {
        "men" => "Shop Men".to_string(),
        "catch-all" => "Catch-All".to_string(),
        _ => format!("Women's {}", capitalize_first(category)),
    }
}

/// Upper-case the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// What the category page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome<T> {
    /// No products on the served page: render the catalog empty state.
    Empty,
    Listing { display_name: String, page: Page<T> },
}

impl<T> CategoryOutcome<T> {
    /// Build the outcome for a category from its served page.
    #[must_use]
    pub fn from_page(category: &str, page: Page<T>) -> Self {
        if page.items.is_empty() {
            Self::Empty
        } else {
            Self::Listing {
                display_name: display_name(category),
                page,
            }
        }
    }
}
