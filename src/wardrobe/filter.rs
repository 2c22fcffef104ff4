//! List filters shared by the selection drawer, wardrobe list and trip planner

use crate::wardrobe::catalogue::Season;
use crate::wardrobe::garment::Garment;
use crate::wardrobe::palette::Color;
use crate::wardrobe::slot::BodySlot;

/// Conjunctive garment filter; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GarmentFilter {
    /// Keep garments whose category maps to this slot
    pub slot: Option<BodySlot>,
    /// Keep garments of exactly this category
    pub category: Option<String>,
    /// Keep garments of this colour
    pub color: Option<Color>,
    /// Keep garments tagged with this season
    pub season: Option<Season>,
    /// Case-insensitive substring of "name category colour"
    pub query: Option<String>,
}

impl GarmentFilter {
    /// Filter that matches every garment
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a body slot
    #[must_use]
    pub const fn slot(mut self, slot: BodySlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Restrict to a category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a colour
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Restrict to a season
    #[must_use]
    pub const fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Restrict by free text
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Test whether any criterion is set
    pub fn is_active(&self) -> bool {
        self.slot.is_some()
            || self.category.is_some()
            || self.color.is_some()
            || self.season.is_some()
            || self.normalized_query().is_some()
    }

    /// Test a single garment
    pub fn matches(&self, garment: &Garment) -> bool {
        if self.slot.is_some_and(|slot| garment.slot() != slot) {
            return false;
        }
        if self
            .category
            .as_deref()
            .is_some_and(|category| garment.category != category)
        {
            return false;
        }
        if self.color.is_some_and(|color| garment.color != color) {
            return false;
        }
        if self.season.is_some_and(|season| !garment.worn_in(season)) {
            return false;
        }
        self.normalized_query()
            .is_none_or(|query| garment.search_text().contains(&query))
    }

    /// Keep the matching garments, preserving order
    pub fn apply<'a>(&self, garments: impl IntoIterator<Item = &'a Garment>) -> Vec<&'a Garment> {
        garments
            .into_iter()
            .filter(|garment| self.matches(garment))
            .collect()
    }

    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .map(str::to_lowercase)
    }
}
