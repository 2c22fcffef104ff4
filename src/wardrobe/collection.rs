//! The loaded garment collection and its per-slot view

use crate::wardrobe::garment::{Garment, GarmentId};
use crate::wardrobe::palette::Color;
use crate::wardrobe::slot::BodySlot;

/// Owned garment collection in store order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wardrobe {
    garments: Vec<Garment>,
}

impl Wardrobe {
    /// Wrap a list of garments
    pub const fn new(garments: Vec<Garment>) -> Self {
        Self { garments }
    }

    /// All garments in store order
    pub fn garments(&self) -> &[Garment] {
        &self.garments
    }

    /// Number of garments
    pub fn len(&self) -> usize {
        self.garments.len()
    }

    /// Test whether the wardrobe is empty
    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }

    /// Find a garment by identifier
    pub fn get(&self, id: &str) -> Option<&Garment> {
        self.garments.iter().find(|garment| garment.id.as_str() == id)
    }

    /// Test whether a garment identifier is known
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Add a garment at the front, as freshly created garments are listed first
    pub fn insert(&mut self, garment: Garment) {
        self.garments.retain(|existing| existing.id != garment.id);
        self.garments.insert(0, garment);
    }

    /// Remove a garment, returning it if it was present
    pub fn remove(&mut self, id: &str) -> Option<Garment> {
        let index = self
            .garments
            .iter()
            .position(|garment| garment.id.as_str() == id)?;
        Some(self.garments.remove(index))
    }

    /// Partition the garments by body slot
    pub fn by_slot(&self) -> SlotBuckets<'_> {
        SlotBuckets::from_garments(&self.garments)
    }

    /// Palette colours used by at least one garment, in palette order
    pub fn colors_in_use(&self) -> Vec<Color> {
        available_colors(&self.garments)
    }
}

impl FromIterator<Garment> for Wardrobe {
    fn from_iter<I: IntoIterator<Item = Garment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Garments grouped by the slot their category maps to
#[derive(Debug, Clone, Default)]
pub struct SlotBuckets<'a> {
    /// Upper-body garments
    pub top: Vec<&'a Garment>,
    /// Lower-body garments
    pub bottom: Vec<&'a Garment>,
    /// Outerwear
    pub outer: Vec<&'a Garment>,
    /// Footwear
    pub shoes: Vec<&'a Garment>,
    /// Accessories and uncategorised garments
    pub accessory: Vec<&'a Garment>,
    /// One-piece garments
    pub full: Vec<&'a Garment>,
}

impl<'a> SlotBuckets<'a> {
    /// Bucket garments by slot, preserving their relative order
    pub fn from_garments(garments: impl IntoIterator<Item = &'a Garment>) -> Self {
        let mut buckets = Self::default();
        for garment in garments {
            buckets.bucket_mut(garment.slot()).push(garment);
        }
        buckets
    }

    /// Garments of one slot
    pub fn bucket(&self, slot: BodySlot) -> &[&'a Garment] {
        match slot {
            BodySlot::Top => &self.top,
            BodySlot::Bottom => &self.bottom,
            BodySlot::Outer => &self.outer,
            BodySlot::Shoes => &self.shoes,
            BodySlot::Accessory => &self.accessory,
            BodySlot::Full => &self.full,
        }
    }

    fn bucket_mut(&mut self, slot: BodySlot) -> &mut Vec<&'a Garment> {
        match slot {
            BodySlot::Top => &mut self.top,
            BodySlot::Bottom => &mut self.bottom,
            BodySlot::Outer => &mut self.outer,
            BodySlot::Shoes => &mut self.shoes,
            BodySlot::Accessory => &mut self.accessory,
            BodySlot::Full => &mut self.full,
        }
    }

    /// Total number of bucketed garments
    pub fn total(&self) -> usize {
        BodySlot::ALL
            .into_iter()
            .map(|slot| self.bucket(slot).len())
            .sum()
    }

    /// Find a bucketed garment by identifier
    pub fn find(&self, id: &GarmentId) -> Option<&'a Garment> {
        BodySlot::ALL
            .into_iter()
            .flat_map(|slot| self.bucket(slot).iter().copied())
            .find(|garment| &garment.id == id)
    }
}

/// Palette colours used by at least one of the garments, in palette order
pub fn available_colors<'a>(garments: impl IntoIterator<Item = &'a Garment>) -> Vec<Color> {
    let used: Vec<Color> = garments.into_iter().map(|garment| garment.color).collect();
    Color::ALL
        .into_iter()
        .filter(|color| used.contains(color))
        .collect()
}
