//! Garment records as loaded from the wardrobe store

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::wardrobe::catalogue::{Formality, Occasion, Season, category_info, category_to_slot};
use crate::wardrobe::palette::Color;
use crate::wardrobe::slot::BodySlot;

/// Opaque garment identifier assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GarmentId(String);

impl GarmentId {
    /// Wrap a stored identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GarmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GarmentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for GarmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for GarmentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Reference to a stored garment photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentPhoto {
    /// Photo identifier
    pub id: String,
    /// Object path inside the photo bucket
    pub path: String,
    /// Whether this is the cover photo
    #[serde(default)]
    pub is_primary: Option<bool>,
    /// Position in the gallery
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// A catalogued piece of clothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    /// Stable identifier
    pub id: GarmentId,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Category value, see [`crate::wardrobe::catalogue::CATEGORIES`]
    pub category: String,
    /// Main colour
    pub color: Color,
    /// Seasons the garment is worn in
    #[serde(default)]
    pub seasons: Option<Vec<Season>>,
    /// Brand
    #[serde(default)]
    pub brand: Option<String>,
    /// Fabric
    #[serde(default)]
    pub fabric: Option<String>,
    /// Size label
    #[serde(default)]
    pub size: Option<String>,
    /// Formality level
    #[serde(default)]
    pub formality: Option<Formality>,
    /// Occasions the garment suits
    #[serde(default)]
    pub occasions: Option<Vec<Occasion>>,
    /// Photos in stored order
    #[serde(default, rename = "garment_photos")]
    pub photos: Option<Vec<GarmentPhoto>>,
}

impl Garment {
    /// Create a garment with only the required fields set
    pub fn new(id: impl Into<GarmentId>, category: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: category.into(),
            color,
            seasons: None,
            brand: None,
            fabric: None,
            size: None,
            formality: None,
            occasions: None,
            photos: None,
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the season tags
    #[must_use]
    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons = Some(seasons.into_iter().collect());
        self
    }

    /// Body slot derived from the category
    pub fn slot(&self) -> BodySlot {
        category_to_slot(&self.category)
    }

    /// Name to show in lists, falling back to the category label
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.as_str(),
            _ => category_info(&self.category).map_or(self.category.as_str(), |info| info.label),
        }
    }

    /// Season tags, empty when none were recorded
    pub fn seasons(&self) -> &[Season] {
        self.seasons.as_deref().unwrap_or_default()
    }

    /// Test whether the garment carries a season tag
    pub fn worn_in(&self, season: Season) -> bool {
        self.seasons().contains(&season)
    }

    /// Photos with the primary one first, then by sort order
    pub fn ordered_photos(&self) -> Vec<&GarmentPhoto> {
        let mut photos: Vec<&GarmentPhoto> = self.photos.iter().flatten().collect();
        photos.sort_by_key(|photo| {
            (
                !photo.is_primary.unwrap_or(false),
                photo.sort_order.unwrap_or(i32::MAX),
            )
        });
        photos
    }

    /// Lower-cased "name category colour" used by free-text search
    pub fn search_text(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            parts.push(name);
        }
        parts.push(self.category.as_str());
        parts.push(self.color.value());
        parts.join(" ").to_lowercase()
    }
}
