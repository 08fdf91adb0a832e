//! Visibility table for admin overlays.

use std::collections::BTreeMap;

use serde::Serialize;

/// Page owning the product editor overlays.
pub const EDIT_PRODUCT_PAGE: &str = "editProduct";
/// Highlights editor overlay.
pub const HIGHLIGHTS_OVERLAY: &str = "highlights";
/// Page owning the storefront overlays.
pub const STOREFRONT_PAGE: &str = "storefront";
/// Collection reposition overlay.
pub const CHANGE_COLLECTION_INDEX_OVERLAY: &str = "changeCollectionIndex";

/// An overlay's address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct OverlayKey {
    pub page: String,
    pub overlay: String,
}

impl OverlayKey {
    #[must_use]
    pub fn new(page: impl Into<String>, overlay: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            overlay: overlay.into(),
        }
    }
}

/// Entry of [`OverlayRegistry::entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayState {
    pub page: String,
    pub overlay: String,
    pub visible: bool,
}

/// `(page, overlay) -> visible`.
///
/// Unknown overlays are hidden; showing one registers it.
#[derive(Debug, Clone)]
pub struct OverlayRegistry {
    overlays: BTreeMap<OverlayKey, bool>,
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        let mut overlays = BTreeMap::new();
        overlays.insert(OverlayKey::new(EDIT_PRODUCT_PAGE, HIGHLIGHTS_OVERLAY), false);
        overlays.insert(
            OverlayKey::new(STOREFRONT_PAGE, CHANGE_COLLECTION_INDEX_OVERLAY),
            false,
        );
        Self { overlays }
    }
}

impl OverlayRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, page: &str, overlay: &str) {
        self.set(page, overlay, true);
    }

    pub fn hide(&mut self, page: &str, overlay: &str) {
        self.set(page, overlay, false);
    }

    #[must_use]
    pub fn is_visible(&self, page: &str, overlay: &str) -> bool {
        self.overlays
            .get(&OverlayKey::new(page, overlay))
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn entries(&self) -> Vec<OverlayState> {
        self.overlays
            .iter()
            .map(|(key, visible)| OverlayState {
                page: key.page.clone(),
                overlay: key.overlay.clone(),
                visible: *visible,
            })
            .collect()
    }

    fn set(&mut self, page: &str, overlay: &str, visible: bool) {
        tracing::debug!(page, overlay, visible, "Overlay toggled");
        self.overlays.insert(OverlayKey::new(page, overlay), visible);
    }
}
