//! Snapping raw drop coordinates to collision-free grid cells

use crate::canvas::geometry::{Cell, CanvasRect, GridSpec, ItemSize, Point};
use crate::canvas::occupancy::{occupied_cells, resolve};
use crate::outfit::state::OutfitState;
use crate::wardrobe::garment::GarmentId;

/// Outcome of snapping one item position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    /// Cell the item centre fell in
    pub preferred: Cell,
    /// Free cell chosen after collision resolution
    pub cell: Cell,
    /// Pixel origin centring the item in `cell`
    pub origin: Point,
}

impl Snap {
    /// Whether collision resolution moved the item away from its preferred cell
    pub fn displaced(&self) -> bool {
        self.preferred != self.cell
    }
}

/// Snap an item drawn at `(x, y)` to the nearest free cell
///
/// Returns `None` when the canvas is too small for the grid; the caller
/// keeps the raw coordinates in that case.
pub fn snap(
    grid: &GridSpec,
    x: f64,
    y: f64,
    rect: CanvasRect,
    item: ItemSize,
    state: &OutfitState,
    exclude: Option<&GarmentId>,
) -> Option<Snap> {
    let Some(geometry) = grid.cell_geometry(rect) else {
        log::debug!(
            "Skipping snap on degenerate {}x{} canvas",
            rect.width,
            rect.height
        );
        return None;
    };

    let preferred = grid.cell_in_geometry(x, y, geometry, item);
    let occupied = occupied_cells(grid, state, rect, item, exclude);
    let cell = resolve(grid, preferred, &occupied);

    Some(Snap {
        preferred,
        cell,
        origin: grid.cell_origin(cell, geometry, rect, item),
    })
}

/// Pixel origin an item drawn at `(x, y)` should snap to
pub fn snapped_origin(
    grid: &GridSpec,
    x: f64,
    y: f64,
    rect: CanvasRect,
    item: ItemSize,
    state: &OutfitState,
    exclude: Option<&GarmentId>,
) -> Option<Point> {
    snap(grid, x, y, rect, item, state, exclude).map(|snapped| snapped.origin)
}

/// Top-left corner of an item centred under the pointer
pub fn origin_under_pointer(pointer: Point, item: ItemSize) -> Point {
    Point::new(pointer.x - item.width / 2.0, pointer.y - item.height / 2.0)
}
