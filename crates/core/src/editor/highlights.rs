//! Client-side draft of a product's highlights.
//!
//! The draft keeps key points in an editable list with a visual `order`.
//! Saving re-numbers them densely from 1 and submits the whole highlights
//! object as a single patch.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::product::{Highlights, KeyPoint};
use crate::types::ProductId;

/// Text given to a freshly added key point.
pub const NEW_KEY_POINT_TEXT: &str = "New Key Point";

/// A key point while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftKeyPoint {
    pub id: Uuid,
    pub text: String,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightsDraft {
    pub headline: String,
    pub key_points: Vec<DraftKeyPoint>,
}

/// Patch submitted to the product update action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightsUpdate {
    pub id: ProductId,
    pub highlights: Highlights,
}

impl HighlightsDraft {
    /// Start a draft from stored highlights, ordered by their index and
    /// numbered from 1.
    #[must_use]
    pub fn from_highlights(highlights: &Highlights) -> Self {
        let mut points = highlights.key_points.clone();
        points.sort_by_key(|p| p.index);

        let mut draft = Self {
            headline: highlights.headline.clone(),
            key_points: points
                .into_iter()
                .map(|p| DraftKeyPoint {
                    id: Uuid::new_v4(),
                    text: p.text,
                    order: 0,
                })
                .collect(),
        };
        draft.renumber();
        draft
    }

    pub fn set_headline(&mut self, html: impl Into<String>) {
        self.headline = html.into();
    }

    /// Append a placeholder key point and return its id.
    pub fn add_key_point(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        let order = i64::try_from(self.key_points.len()).unwrap_or(i64::MAX - 1) + 1;
        self.key_points.push(DraftKeyPoint {
            id,
            text: NEW_KEY_POINT_TEXT.to_string(),
            order,
        });
        id
    }

    /// Remove a key point; the remaining points are re-numbered densely.
    pub fn remove_key_point(&mut self, id: Uuid) -> bool {
        let before = self.key_points.len();
        self.key_points.retain(|p| p.id != id);
        self.renumber();
        self.key_points.len() != before
    }

    /// Replace a key point's text.
    pub fn edit_key_point(&mut self, id: Uuid, text: impl Into<String>) -> bool {
        match self.key_points.iter_mut().find(|p| p.id == id) {
            Some(point) => {
                point.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Apply a new visual order.
    ///
    /// Points follow `ids`; unknown ids are ignored and points missing from
    /// `ids` keep their relative order after the listed ones.
    pub fn reorder(&mut self, ids: &[Uuid]) {
        let mut remaining = std::mem::take(&mut self.key_points);
        let mut ordered = Vec::with_capacity(remaining.len());
        for id in ids {
            if let Some(pos) = remaining.iter().position(|p| p.id == *id) {
                ordered.push(remaining.remove(pos));
            }
        }
        ordered.append(&mut remaining);
        self.key_points = ordered;
        self.renumber();
    }

    /// Build the update patch: key points sorted by order, indexed from 1.
    #[must_use]
    pub fn to_update(&self, product_id: ProductId) -> HighlightsUpdate {
        let mut sorted: Vec<&DraftKeyPoint> = self.key_points.iter().collect();
        sorted.sort_by_key(|p| p.order);

        HighlightsUpdate {
            id: product_id,
            highlights: Highlights {
                headline: self.headline.clone(),
                key_points: sorted
                    .into_iter()
                    .zip(1..)
                    .map(|(p, index)| KeyPoint {
                        text: p.text.clone(),
                        index,
                    })
                    .collect(),
            },
        }
    }

    fn renumber(&mut self) {
        for (point, order) in self.key_points.iter_mut().zip(1..) {
            point.order = order;
        }
    }
}
