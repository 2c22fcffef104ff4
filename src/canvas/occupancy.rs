//! Cell occupancy and collision resolution

use bitvec::prelude::*;
use std::fmt;

use crate::canvas::geometry::{Cell, CanvasRect, GridSpec, ItemSize};
use crate::outfit::state::OutfitState;
use crate::wardrobe::garment::GarmentId;

/// Set of occupied cells, indexed row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMask {
    bits: BitVec,
    columns: usize,
}

impl OccupancyMask {
    /// Create a mask with every cell free
    pub fn new(grid: &GridSpec) -> Self {
        Self {
            bits: bitvec![0; grid.cell_count()],
            columns: grid.columns(),
        }
    }

    /// Create a mask with only the reserved slot cells occupied
    pub fn with_slot_cells(grid: &GridSpec) -> Self {
        let mut mask = Self::new(grid);
        for (_, cell) in grid.slot_cells().iter() {
            mask.insert(cell);
        }
        mask
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.col < self.columns).then(|| cell.row * self.columns + cell.col)
    }

    /// Mark a cell occupied; cells outside the grid are ignored
    pub fn insert(&mut self, cell: Cell) {
        if let Some(mut bit) = self.index(cell).and_then(|index| self.bits.get_mut(index)) {
            *bit = true;
        }
    }

    /// Test cell occupancy; cells outside the grid count as occupied
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell)
            .is_none_or(|index| self.bits.get(index).as_deref() != Some(&false))
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether no cell is free
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Occupied cells in row-major order
    pub fn cells(&self) -> Vec<Cell> {
        self.bits
            .iter_ones()
            .map(|index| Cell::new(index / self.columns, index % self.columns))
            .collect()
    }
}

impl fmt::Display for OccupancyMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OccupancyMask({} occupied: {:?})", self.count(), self.cells())
    }
}

/// Collect the cells blocked for a new or moving item
///
/// Every named slot cell is reserved whether or not it holds a garment.
/// Free items block the cell their centre falls in, except `exclude` so
/// a dragged item never collides with its own previous position.
pub fn occupied_cells(
    grid: &GridSpec,
    state: &OutfitState,
    rect: CanvasRect,
    item: ItemSize,
    exclude: Option<&GarmentId>,
) -> OccupancyMask {
    let mut mask = OccupancyMask::with_slot_cells(grid);
    let Some(geometry) = grid.cell_geometry(rect) else {
        return mask;
    };

    for placement in state.free() {
        if exclude == Some(&placement.garment_id) {
            continue;
        }
        mask.insert(grid.cell_in_geometry(placement.x, placement.y, geometry, item));
    }

    mask
}

/// Find the first free cell scanning row-major from `preferred`
///
/// The scan wraps past the last cell. When every cell is taken the
/// preferred cell is returned and the item overlaps whatever is there.
pub fn resolve(grid: &GridSpec, preferred: Cell, occupied: &OccupancyMask) -> Cell {
    let start = grid.linear_index(preferred);
    let found = (0..grid.cell_count())
        .map(|offset| grid.cell_at(start + offset))
        .find(|&cell| !occupied.contains(cell));

    found.unwrap_or_else(|| {
        log::warn!(
            "No free canvas cell left; overlapping at ({}, {})",
            preferred.row,
            preferred.col
        );
        preferred
    })
}
