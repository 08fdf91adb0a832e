//! Status enums shared by catalog entities and admin surfaces.

use serde::{Deserialize, Serialize};

/// Publication state of a catalog entity.
///
/// Products, collections and upsells use `Draft`/`Published`/`Hidden`;
/// page heroes and categories use `Visible`/`Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Draft,
    Published,
    Hidden,
    Visible,
}

impl Visibility {
    /// Wire representation used in catalog query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Hidden => "HIDDEN",
            Self::Visible => "VISIBLE",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of an admin alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertMessageType {
    #[default]
    Neutral,
    Success,
    Error,
}
