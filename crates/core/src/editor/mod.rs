//! Admin editing surfaces: highlights drafts and collection repositioning.

pub mod collection_index;
pub mod highlights;

pub use collection_index::{ChangeCollectionIndex, CollectionIndexInput, IndexInputError};
pub use highlights::{DraftKeyPoint, HighlightsDraft, HighlightsUpdate};
