//! Editing session tying the grid to one outfit state
//!
//! Each method handles one user gesture to completion; nothing is kept
//! between calls except the outfit state itself.

use crate::canvas::geometry::{CanvasRect, GridSpec, ItemSize, Point};
use crate::canvas::layout::CanvasLayout;
use crate::canvas::placement::{origin_under_pointer, snapped_origin};
use crate::io::error::{Result, unknown_garment};
use crate::outfit::composer::{ComposedOutfit, OutfitComposer};
use crate::outfit::state::OutfitState;
use crate::wardrobe::collection::Wardrobe;
use crate::wardrobe::garment::GarmentId;
use crate::wardrobe::slot::BodySlot;
use rand::Rng;

/// Outfit canvas being edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasSession {
    grid: GridSpec,
    state: OutfitState,
}

impl CanvasSession {
    /// Start editing an empty canvas
    pub fn new(grid: GridSpec) -> Self {
        Self::with_state(grid, OutfitState::new())
    }

    /// Resume editing an existing outfit
    pub const fn with_state(grid: GridSpec, state: OutfitState) -> Self {
        Self { grid, state }
    }

    /// Grid parameters
    pub const fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Current outfit
    pub const fn state(&self) -> &OutfitState {
        &self.state
    }

    /// Finish editing and hand back the outfit
    pub fn into_state(self) -> OutfitState {
        self.state
    }

    /// Drop a garment on a named slot
    ///
    /// # Errors
    ///
    /// Returns an error if the garment is not in the wardrobe
    pub fn drop_on_slot(
        &mut self,
        wardrobe: &Wardrobe,
        slot: BodySlot,
        id: &GarmentId,
    ) -> Result<Option<GarmentId>> {
        ensure_known(wardrobe, id)?;
        Ok(self.state.assign_slot(slot, id.clone()))
    }

    /// Drop a garment on the open canvas under the pointer
    ///
    /// The garment snaps to the nearest free cell, ignoring its own earlier
    /// position. On a degenerate canvas the raw position is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the garment is not in the wardrobe
    pub fn drop_on_canvas(
        &mut self,
        wardrobe: &Wardrobe,
        id: &GarmentId,
        pointer: Point,
        rect: CanvasRect,
        item: ItemSize,
    ) -> Result<Point> {
        ensure_known(wardrobe, id)?;
        let raw = origin_under_pointer(pointer, item);
        let origin = snapped_origin(&self.grid, raw.x, raw.y, rect, item, &self.state, Some(id))
            .unwrap_or(raw);
        self.state.place_free(id.clone(), origin);
        Ok(origin)
    }

    /// Origin a click on the empty canvas would place a garment at
    pub fn preview_click(&self, pointer: Point, rect: CanvasRect, item: ItemSize) -> Option<Point> {
        let raw = origin_under_pointer(pointer, item);
        snapped_origin(&self.grid, raw.x, raw.y, rect, item, &self.state, None)
    }

    /// Place a garment picked for a previously clicked canvas position
    ///
    /// # Errors
    ///
    /// Returns an error if the garment is not in the wardrobe
    pub fn place_at(
        &mut self,
        wardrobe: &Wardrobe,
        id: &GarmentId,
        origin: Point,
        rect: CanvasRect,
        item: ItemSize,
    ) -> Result<Point> {
        ensure_known(wardrobe, id)?;
        let snapped =
            snapped_origin(&self.grid, origin.x, origin.y, rect, item, &self.state, Some(id))
                .unwrap_or(origin);
        self.state.place_free(id.clone(), snapped);
        Ok(snapped)
    }

    /// Move a free garment during a drag
    ///
    /// `origin` is the item's raw top-left corner under the pointer. Returns
    /// `None` if the garment is not on the canvas as a free item.
    pub fn drag_to(
        &mut self,
        id: &GarmentId,
        origin: Point,
        rect: CanvasRect,
        item: ItemSize,
    ) -> Option<Point> {
        self.state.free_placement(id)?;
        let snapped =
            snapped_origin(&self.grid, origin.x, origin.y, rect, item, &self.state, Some(id))
                .unwrap_or(origin);
        self.state.move_free(id, snapped).then_some(snapped)
    }

    /// Take a garment off the canvas
    pub fn remove(&mut self, id: &GarmentId) -> bool {
        self.state.clear_placement(id)
    }

    /// Replace the canvas with a randomly composed outfit
    ///
    /// # Errors
    ///
    /// Returns an error if no outfit could be composed; the canvas is
    /// left unchanged
    pub fn generate<R: Rng>(
        &mut self,
        wardrobe: &Wardrobe,
        composer: &mut OutfitComposer<R>,
    ) -> Result<ComposedOutfit> {
        composer.generate(&wardrobe.by_slot(), &mut self.state)
    }

    /// Cell-by-cell view for the given canvas size
    pub fn layout(&self, rect: CanvasRect, item: ItemSize) -> CanvasLayout {
        CanvasLayout::build(&self.grid, &self.state, rect, item)
    }
}

fn ensure_known(wardrobe: &Wardrobe, id: &GarmentId) -> Result<()> {
    if wardrobe.contains(id.as_str()) {
        Ok(())
    } else {
        Err(unknown_garment(id))
    }
}
