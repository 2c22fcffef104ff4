//! Persisted outfit records and their mapping to and from canvas state

use serde::{Deserialize, Serialize};

use crate::canvas::geometry::Point;
use crate::io::configuration::DEFAULT_OUTFIT_NAME;
use crate::io::error::{Result, WardrobeError};
use crate::outfit::state::{FreePlacement, OutfitState};
use crate::wardrobe::collection::Wardrobe;
use crate::wardrobe::garment::GarmentId;
use crate::wardrobe::slot::BodySlot;

/// How an outfit item was placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    /// Held in a named slot
    Slot,
    /// Drawn at free coordinates
    Free,
}

/// One stored outfit item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitItemRecord {
    /// Placed garment
    pub garment_id: GarmentId,
    /// Slot for slot items
    #[serde(default)]
    pub slot: Option<BodySlot>,
    /// Placement kind; older rows may omit it
    #[serde(default)]
    pub placement: Option<PlacementKind>,
    /// Origin for free items
    #[serde(default)]
    pub position: Option<Point>,
    /// Stacking order
    #[serde(default)]
    pub layer: Option<u32>,
}

/// One stored outfit with its items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecord {
    /// Outfit name
    pub name: String,
    /// Whether the outfit is reachable through its share link
    #[serde(default)]
    pub is_public: bool,
    /// Public share identifier
    #[serde(default)]
    pub share_id: Option<String>,
    /// Stored items
    #[serde(default, rename = "outfit_items")]
    pub items: Vec<OutfitItemRecord>,
}

impl OutfitRecord {
    /// Build the records to store for the current canvas
    ///
    /// Slot items come first in slot order, layered by their position among
    /// slot items; free items keep their own layer. Garments no longer in
    /// the wardrobe are skipped. A blank name falls back to a default.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::NothingToSave`] if no placed garment is
    /// left to store
    pub fn from_state(name: &str, state: &OutfitState, wardrobe: &Wardrobe) -> Result<Self> {
        let slot_items = state
            .slots
            .iter()
            .filter(|(_, id)| wardrobe.contains(id.as_str()))
            .enumerate()
            .map(|(index, (slot, id))| OutfitItemRecord {
                garment_id: id.clone(),
                slot: Some(slot),
                placement: Some(PlacementKind::Slot),
                position: None,
                layer: Some(index as u32),
            });

        let free_items = state
            .free()
            .iter()
            .filter(|placement| wardrobe.contains(placement.garment_id.as_str()))
            .map(|placement| OutfitItemRecord {
                garment_id: placement.garment_id.clone(),
                slot: None,
                placement: Some(PlacementKind::Free),
                position: Some(placement.origin()),
                layer: Some(placement.layer),
            });

        let items: Vec<OutfitItemRecord> = slot_items.chain(free_items).collect();
        if items.is_empty() {
            return Err(WardrobeError::NothingToSave);
        }

        let trimmed = name.trim();
        Ok(Self {
            name: if trimmed.is_empty() {
                DEFAULT_OUTFIT_NAME.to_owned()
            } else {
                trimmed.to_owned()
            },
            is_public: false,
            share_id: None,
            items,
        })
    }

    /// Rebuild the canvas state from stored items
    ///
    /// Free items with a position become free placements, the layer
    /// defaulting to the item index; anything else with a slot fills that
    /// slot. Later items win if a garment appears twice.
    pub fn to_state(&self) -> OutfitState {
        let mut state = OutfitState::new();
        for (index, item) in self.items.iter().enumerate() {
            match (item.placement, item.position, item.slot) {
                (Some(PlacementKind::Free), Some(position), _) => {
                    state.restore_free(FreePlacement {
                        garment_id: item.garment_id.clone(),
                        x: position.x,
                        y: position.y,
                        layer: item.layer.unwrap_or(index as u32),
                    });
                }
                (_, _, Some(slot)) => {
                    state.assign_slot(slot, item.garment_id.clone());
                }
                _ => {
                    log::debug!(
                        "Ignoring outfit item {} without slot or position",
                        item.garment_id
                    );
                }
            }
        }
        state
    }

    /// Drop items referencing a garment removed from the wardrobe
    pub fn without_garment(&mut self, id: &GarmentId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| &item.garment_id != id);
        before - self.items.len()
    }
}
