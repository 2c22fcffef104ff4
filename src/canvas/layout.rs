//! Cell-by-cell view of an outfit canvas

use ndarray::Array2;
use std::fmt;

use crate::canvas::geometry::{CanvasRect, Cell, GridSpec, ItemSize};
use crate::outfit::state::OutfitState;
use crate::wardrobe::garment::GarmentId;
use crate::wardrobe::slot::BodySlot;

/// What one grid cell shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellContent {
    /// Slot reserving the cell
    pub slot: Option<BodySlot>,
    /// Garment held by that slot
    pub slot_garment: Option<GarmentId>,
    /// Free garments whose centre falls in the cell, lowest layer first
    pub free: Vec<GarmentId>,
}

impl CellContent {
    /// Test whether the cell is neither reserved nor used
    pub fn is_vacant(&self) -> bool {
        self.slot.is_none() && self.free.is_empty()
    }

    fn label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(slot) = self.slot {
            let held = self.slot_garment.as_ref().map_or("-", GarmentId::as_str);
            parts.push(format!("{slot}:{held}"));
        }
        parts.extend(self.free.iter().map(ToString::to_string));
        if parts.is_empty() {
            ".".to_owned()
        } else {
            parts.join("+")
        }
    }
}

/// Matrix of cell contents, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasLayout {
    cells: Array2<CellContent>,
}

impl CanvasLayout {
    /// Lay out an outfit on the grid
    ///
    /// Free items are only mapped to cells when the canvas geometry is
    /// usable; on a degenerate canvas only the slots are shown.
    pub fn build(grid: &GridSpec, state: &OutfitState, rect: CanvasRect, item: ItemSize) -> Self {
        let mut cells = Array2::from_elem((grid.rows(), grid.columns()), CellContent::default());

        for (slot, cell) in grid.slot_cells().iter() {
            if let Some(content) = cells.get_mut([cell.row, cell.col]) {
                content.slot = Some(slot);
                content.slot_garment = state.slots.get(slot).cloned();
            }
        }

        if let Some(geometry) = grid.cell_geometry(rect) {
            let mut free: Vec<_> = state.free().iter().collect();
            free.sort_by_key(|placement| placement.layer);
            for placement in free {
                let cell = grid.cell_in_geometry(placement.x, placement.y, geometry, item);
                if let Some(content) = cells.get_mut([cell.row, cell.col]) {
                    content.free.push(placement.garment_id.clone());
                }
            }
        }

        Self { cells }
    }

    /// Content of one cell
    pub fn get(&self, cell: Cell) -> Option<&CellContent> {
        self.cells.get([cell.row, cell.col])
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Cells not reserved by a slot and not holding a free item
    pub fn vacant_cells(&self) -> Vec<Cell> {
        self.cells
            .indexed_iter()
            .filter(|(_, content)| content.is_vacant())
            .map(|((row, col), _)| Cell::new(row, col))
            .collect()
    }
}

impl fmt::Display for CanvasLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.cells.map(CellContent::label);
        let width = labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(1);
        for row in labels.rows() {
            let line: Vec<String> = row.iter().map(|label| format!("[{label:^width$}]")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
