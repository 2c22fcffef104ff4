//! Packing lists for trips: garment selection with quantities

use std::collections::BTreeMap;

use crate::io::configuration::{DEFAULT_PACKING_SLUG, DEFAULT_TRIP_DAYS};
use crate::wardrobe::collection::Wardrobe;
use crate::wardrobe::garment::{Garment, GarmentId};
use crate::wardrobe::slot::BodySlot;

/// Garment count per body slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotCounts {
    /// Tops
    pub top: u32,
    /// Bottoms
    pub bottom: u32,
    /// Outerwear
    pub outer: u32,
    /// Shoes
    pub shoes: u32,
    /// Accessories
    pub accessory: u32,
    /// Full outfits
    pub full: u32,
}

impl SlotCounts {
    /// Count for one slot
    pub const fn get(&self, slot: BodySlot) -> u32 {
        match slot {
            BodySlot::Top => self.top,
            BodySlot::Bottom => self.bottom,
            BodySlot::Outer => self.outer,
            BodySlot::Shoes => self.shoes,
            BodySlot::Accessory => self.accessory,
            BodySlot::Full => self.full,
        }
    }

    const fn get_mut(&mut self, slot: BodySlot) -> &mut u32 {
        match slot {
            BodySlot::Top => &mut self.top,
            BodySlot::Bottom => &mut self.bottom,
            BodySlot::Outer => &mut self.outer,
            BodySlot::Shoes => &mut self.shoes,
            BodySlot::Accessory => &mut self.accessory,
            BodySlot::Full => &mut self.full,
        }
    }

    /// Total garments packed, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        BodySlot::ALL
            .into_iter()
            .fold(0, |total: u32, slot| total.saturating_add(self.get(slot)))
    }
}

/// Garments chosen for a trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingList {
    name: Option<String>,
    days: u32,
    quantities: BTreeMap<GarmentId, u32>,
}

impl Default for PackingList {
    fn default() -> Self {
        Self::new(None, DEFAULT_TRIP_DAYS)
    }
}

impl PackingList {
    /// Create an empty list; zero days fall back to the default trip length
    pub fn new(name: Option<String>, days: u32) -> Self {
        Self {
            name: name
                .map(|name| name.trim().to_owned())
                .filter(|name| !name.is_empty()),
            days: if days == 0 { DEFAULT_TRIP_DAYS } else { days },
            quantities: BTreeMap::new(),
        }
    }

    /// Trip name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Trip length in days
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Add a garment with quantity one, or remove it if already packed
    ///
    /// Returns whether the garment is packed afterwards.
    pub fn toggle(&mut self, id: GarmentId) -> bool {
        if self.quantities.remove(&id).is_some() {
            false
        } else {
            self.quantities.insert(id, 1);
            true
        }
    }

    /// Set how many of a garment to pack; at least one
    pub fn set_quantity(&mut self, id: GarmentId, quantity: u32) {
        self.quantities.insert(id, quantity.max(1));
    }

    /// Quantity packed of a garment
    pub fn quantity(&self, id: &GarmentId) -> Option<u32> {
        self.quantities.get(id).copied()
    }

    /// Unpack everything
    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    /// Test whether nothing is packed
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Packed garments in wardrobe order with their quantity
    ///
    /// Garments missing from the wardrobe are left out.
    pub fn selected<'a>(&self, wardrobe: &'a Wardrobe) -> Vec<(&'a Garment, u32)> {
        wardrobe
            .garments()
            .iter()
            .filter_map(|garment| {
                self.quantity(&garment.id)
                    .map(|quantity| (garment, quantity))
            })
            .collect()
    }

    /// Packed garments per body slot; counts saturate instead of wrapping
    pub fn slot_counts(&self, wardrobe: &Wardrobe) -> SlotCounts {
        let mut counts = SlotCounts::default();
        for (garment, quantity) in self.selected(wardrobe) {
            let count = counts.get_mut(garment.slot());
            *count = count.saturating_add(quantity.max(1));
        }
        counts
    }

    /// Plain-text packing list
    pub fn export_text(&self, wardrobe: &Wardrobe) -> String {
        let mut lines = vec![
            self.name
                .as_deref()
                .map_or_else(|| "Suitcase".to_owned(), |name| format!("Suitcase: {name}")),
            format!("Duration: {} days", self.days),
            String::new(),
            "Selected garments:".to_owned(),
        ];

        let selected = self.selected(wardrobe);
        if selected.is_empty() {
            lines.push("- No garments selected".to_owned());
        }
        for (garment, quantity) in selected {
            lines.push(format!(
                "- {} ({} - {}) x{quantity}",
                garment.display_name(),
                garment.category,
                garment.color
            ));
        }

        lines.join("\n")
    }

    /// File stem for the exported list
    pub fn file_slug(&self) -> String {
        self.name.as_deref().map_or_else(
            || DEFAULT_PACKING_SLUG.to_owned(),
            |name| name.split_whitespace().collect::<Vec<_>>().join("-"),
        )
    }
}
