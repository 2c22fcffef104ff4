//! In-memory outfit canvas state
//!
//! A garment identifier appears at most once across the six slots and the
//! free list; every placing operation clears earlier placements first.

use serde::{Deserialize, Serialize};

use crate::canvas::geometry::Point;
use crate::wardrobe::garment::GarmentId;
use crate::wardrobe::slot::BodySlot;

/// Garment assigned to each named slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignments {
    /// Top slot
    pub top: Option<GarmentId>,
    /// Bottom slot
    pub bottom: Option<GarmentId>,
    /// Outerwear slot
    pub outer: Option<GarmentId>,
    /// Shoes slot
    pub shoes: Option<GarmentId>,
    /// Accessory slot
    pub accessory: Option<GarmentId>,
    /// Full outfit slot
    pub full: Option<GarmentId>,
}

impl SlotAssignments {
    /// Garment in a slot
    pub const fn get(&self, slot: BodySlot) -> Option<&GarmentId> {
        match slot {
            BodySlot::Top => self.top.as_ref(),
            BodySlot::Bottom => self.bottom.as_ref(),
            BodySlot::Outer => self.outer.as_ref(),
            BodySlot::Shoes => self.shoes.as_ref(),
            BodySlot::Accessory => self.accessory.as_ref(),
            BodySlot::Full => self.full.as_ref(),
        }
    }

    /// Mutable access to a slot
    pub const fn get_mut(&mut self, slot: BodySlot) -> &mut Option<GarmentId> {
        match slot {
            BodySlot::Top => &mut self.top,
            BodySlot::Bottom => &mut self.bottom,
            BodySlot::Outer => &mut self.outer,
            BodySlot::Shoes => &mut self.shoes,
            BodySlot::Accessory => &mut self.accessory,
            BodySlot::Full => &mut self.full,
        }
    }

    /// Put a garment in a slot, returning the one it replaced
    pub fn set(&mut self, slot: BodySlot, id: GarmentId) -> Option<GarmentId> {
        self.get_mut(slot).replace(id)
    }

    /// Populated slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = (BodySlot, &GarmentId)> + '_ {
        BodySlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
    }

    /// Number of populated slots
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Slot holding a garment, if any
    pub fn slot_of(&self, id: &GarmentId) -> Option<BodySlot> {
        self.iter().find(|(_, held)| *held == id).map(|(slot, _)| slot)
    }

    /// Empty every slot holding the garment; returns whether any did
    pub fn clear_garment(&mut self, id: &GarmentId) -> bool {
        let mut cleared = false;
        for slot in BodySlot::ALL {
            let held = self.get_mut(slot);
            if held.as_ref() == Some(id) {
                *held = None;
                cleared = true;
            }
        }
        cleared
    }
}

/// Garment drawn at arbitrary pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreePlacement {
    /// Placed garment
    pub garment_id: GarmentId,
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Stacking order, higher is drawn on top
    pub layer: u32,
}

impl FreePlacement {
    /// Current origin
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Either kind of placement, for iteration over an outfit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement<'a> {
    /// Garment in a named slot
    Slot {
        /// The slot
        slot: BodySlot,
        /// The garment
        garment_id: &'a GarmentId,
    },
    /// Garment at free coordinates
    Free(&'a FreePlacement),
}

impl<'a> Placement<'a> {
    /// Placed garment
    pub const fn garment_id(&self) -> &'a GarmentId {
        match self {
            Self::Slot { garment_id, .. } => *garment_id,
            Self::Free(free) => &free.garment_id,
        }
    }
}

/// Complete canvas snapshot: slot assignments plus free placements
///
/// Decoding replays every placement so a garment listed more than once keeps
/// only its last entry, free items after slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredState")]
pub struct OutfitState {
    /// Named slot assignments
    pub slots: SlotAssignments,
    /// Free placements in insertion order
    #[serde(default)]
    free: Vec<FreePlacement>,
}

/// Wire shape of a state file before placements are replayed
#[derive(Deserialize)]
struct StoredState {
    slots: SlotAssignments,
    #[serde(default)]
    free: Vec<FreePlacement>,
}

impl From<StoredState> for OutfitState {
    fn from(stored: StoredState) -> Self {
        let mut state = Self::new();
        for slot in BodySlot::ALL {
            if let Some(id) = stored.slots.get(slot) {
                state.assign_slot(slot, id.clone());
            }
        }
        for placement in stored.free {
            state.restore_free(placement);
        }
        state
    }
}

impl OutfitState {
    /// Empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from fresh slot assignments and no free items
    pub const fn from_slots(slots: SlotAssignments) -> Self {
        Self {
            slots,
            free: Vec::new(),
        }
    }

    /// Free placements in insertion order
    pub fn free(&self) -> &[FreePlacement] {
        &self.free
    }

    /// Free placement of a garment, if any
    pub fn free_placement(&self, id: &GarmentId) -> Option<&FreePlacement> {
        self.free.iter().find(|placement| &placement.garment_id == id)
    }

    /// Remove every placement of a garment; returns whether one existed
    pub fn clear_placement(&mut self, id: &GarmentId) -> bool {
        let in_slot = self.slots.clear_garment(id);
        let before = self.free.len();
        self.free.retain(|placement| &placement.garment_id != id);
        in_slot || self.free.len() != before
    }

    /// Assign a garment to a slot, moving it from wherever it was
    ///
    /// Returns the garment previously in the slot, if another one was there.
    pub fn assign_slot(&mut self, slot: BodySlot, id: GarmentId) -> Option<GarmentId> {
        self.clear_placement(&id);
        self.slots.set(slot, id)
    }

    /// Empty a slot, returning its garment
    pub fn clear_slot(&mut self, slot: BodySlot) -> Option<GarmentId> {
        self.slots.get_mut(slot).take()
    }

    /// Place a garment at free coordinates on top of the stack
    ///
    /// Any earlier placement of the garment is removed first. Returns the
    /// assigned layer.
    pub fn place_free(&mut self, id: GarmentId, origin: Point) -> u32 {
        self.clear_placement(&id);
        let layer = self.next_layer();
        self.free.push(FreePlacement {
            garment_id: id,
            x: origin.x,
            y: origin.y,
            layer,
        });
        layer
    }

    /// Insert a free placement with a known layer, as when restoring a saved outfit
    pub fn restore_free(&mut self, placement: FreePlacement) {
        self.clear_placement(&placement.garment_id);
        self.free.push(placement);
    }

    /// Move an existing free item, keeping its layer
    pub fn move_free(&mut self, id: &GarmentId, origin: Point) -> bool {
        match self
            .free
            .iter_mut()
            .find(|placement| &placement.garment_id == id)
        {
            Some(placement) => {
                placement.x = origin.x;
                placement.y = origin.y;
                true
            }
            None => false,
        }
    }

    /// Forget a garment deleted from the wardrobe
    pub fn remove_garment(&mut self, id: &GarmentId) -> bool {
        self.clear_placement(id)
    }

    /// Empty the whole canvas
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Every placement, slots first in slot order then free items
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> + '_ {
        self.slots
            .iter()
            .map(|(slot, garment_id)| Placement::Slot { slot, garment_id })
            .chain(self.free.iter().map(Placement::Free))
    }

    /// Test whether a garment is placed anywhere
    pub fn contains(&self, id: &GarmentId) -> bool {
        self.placements().any(|placement| placement.garment_id() == id)
    }

    /// Number of placed garments
    pub fn item_count(&self) -> usize {
        self.slots.count() + self.free.len()
    }

    /// Test whether nothing is placed
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    fn next_layer(&self) -> u32 {
        self.free
            .iter()
            .map(|placement| placement.layer)
            .max()
            .map_or(0, |top| top.saturating_add(1))
    }
}
