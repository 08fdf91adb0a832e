//! Home page hero banner.

use serde::{Deserialize, Serialize};

use crate::types::Visibility;

/// Hero banner record as served by the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PageHero {
    pub title: String,
    pub destination_url: String,
    pub images: HeroImages,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HeroImages {
    pub desktop: Option<String>,
    pub mobile: Option<String>,
}

/// A hero that passed the render gate: both images are guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroBanner {
    pub title: String,
    pub destination_url: String,
    pub desktop_image: String,
    pub mobile_image: String,
}

/// Decide whether the hero renders.
///
/// The hero shows only when it is `VISIBLE` and has both a desktop and a
/// mobile image.
#[must_use]
pub fn hero_banner(hero: &PageHero) -> Option<HeroBanner> {
    if hero.visibility != Visibility::Visible {
        return None;
    }
    let desktop_image = hero.images.desktop.as_deref().filter(|s| !s.is_empty())?;
    let mobile_image = hero.images.mobile.as_deref().filter(|s| !s.is_empty())?;

    Some(HeroBanner {
        title: hero.title.clone(),
        destination_url: hero.destination_url.clone(),
        desktop_image: desktop_image.to_string(),
        mobile_image: mobile_image.to_string(),
    })
}
