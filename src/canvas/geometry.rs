//! Canvas grid geometry
//!
//! The canvas is a `rows x columns` grid inset by a uniform padding with a
//! uniform gap between cells. Cell sizes are derived from the canvas
//! rectangle on every call since the rectangle follows the window size.

use serde::{Deserialize, Serialize};

use crate::io::configuration::{GRID_COLUMNS, GRID_GAP, GRID_PADDING, GRID_ROWS};
use crate::io::error::{Result, invalid_parameter};
use crate::wardrobe::slot::BodySlot;

/// Current size of the canvas element in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl CanvasRect {
    /// Create a canvas rectangle
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding box of a drawn item in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSize {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl ItemSize {
    /// Create an item size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square item
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Pixel coordinate relative to the canvas top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Grid cell address, zero based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a cell address
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cell dimensions computed for one canvas rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    /// Width of a single cell
    pub cell_width: f64,
    /// Height of a single cell
    pub cell_height: f64,
}

/// Reserved cell of every named slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCells {
    /// Outerwear cell
    pub outer: Cell,
    /// Top cell
    pub top: Cell,
    /// Accessory cell
    pub accessory: Cell,
    /// Full outfit cell
    pub full: Cell,
    /// Bottom cell
    pub bottom: Cell,
    /// Shoes cell
    pub shoes: Cell,
}

impl SlotCells {
    /// Reserved cell of a slot
    pub const fn cell(&self, slot: BodySlot) -> Cell {
        match slot {
            BodySlot::Top => self.top,
            BodySlot::Bottom => self.bottom,
            BodySlot::Outer => self.outer,
            BodySlot::Shoes => self.shoes,
            BodySlot::Accessory => self.accessory,
            BodySlot::Full => self.full,
        }
    }

    /// Slot reserving a cell, if any
    pub fn slot_at(&self, cell: Cell) -> Option<BodySlot> {
        BodySlot::ALL
            .into_iter()
            .find(|&slot| self.cell(slot) == cell)
    }

    /// Every reserved cell with its slot
    pub fn iter(&self) -> impl Iterator<Item = (BodySlot, Cell)> + '_ {
        BodySlot::ALL.into_iter().map(|slot| (slot, self.cell(slot)))
    }
}

impl Default for SlotCells {
    /// Outerwear and accessories on the first row, the body column in the middle
    fn default() -> Self {
        Self {
            outer: Cell::new(0, 0),
            top: Cell::new(1, 1),
            accessory: Cell::new(0, 2),
            full: Cell::new(2, 1),
            bottom: Cell::new(3, 1),
            shoes: Cell::new(4, 1),
        }
    }
}

/// Fixed grid parameters of the outfit canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    columns: usize,
    rows: usize,
    padding: f64,
    gap: f64,
    slot_cells: SlotCells,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            padding: GRID_PADDING,
            gap: GRID_GAP,
            slot_cells: SlotCells::default(),
        }
    }
}

impl GridSpec {
    /// Create a validated grid specification
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid has no rows or no columns
    /// - Padding or gap is negative or not finite
    /// - A slot cell lies outside the grid
    pub fn new(
        columns: usize,
        rows: usize,
        padding: f64,
        gap: f64,
        slot_cells: SlotCells,
    ) -> Result<Self> {
        if columns == 0 {
            return Err(invalid_parameter("columns", &columns, &"must be positive"));
        }
        if rows == 0 {
            return Err(invalid_parameter("rows", &rows, &"must be positive"));
        }
        if !padding.is_finite() || padding < 0.0 {
            return Err(invalid_parameter(
                "padding",
                &padding,
                &"must be a finite non-negative number",
            ));
        }
        if !gap.is_finite() || gap < 0.0 {
            return Err(invalid_parameter(
                "gap",
                &gap,
                &"must be a finite non-negative number",
            ));
        }
        for (slot, cell) in slot_cells.iter() {
            if cell.row >= rows || cell.col >= columns {
                return Err(invalid_parameter(
                    "slot_cells",
                    &format!("{slot}@({},{})", cell.row, cell.col),
                    &format!("outside the {rows}x{columns} grid"),
                ));
            }
        }

        Ok(Self {
            columns,
            rows,
            padding,
            gap,
            slot_cells,
        })
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Inner padding in pixels
    pub const fn padding(&self) -> f64 {
        self.padding
    }

    /// Gap between cells in pixels
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Reserved slot cells
    pub const fn slot_cells(&self) -> &SlotCells {
        &self.slot_cells
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Row-major index of a cell
    pub const fn linear_index(&self, cell: Cell) -> usize {
        cell.row * self.columns + cell.col
    }

    /// Cell at a row-major index, wrapping past the last cell
    pub const fn cell_at(&self, index: usize) -> Cell {
        let index = index % self.cell_count();
        Cell::new(index / self.columns, index % self.columns)
    }

    /// Compute cell dimensions for the current canvas rectangle
    ///
    /// Returns `None` when the rectangle is too small to hold the grid,
    /// in which case callers skip snapping and keep raw coordinates.
    pub fn cell_geometry(&self, rect: CanvasRect) -> Option<CellGeometry> {
        let cell_width = (rect.width - self.padding * 2.0 - self.gap * (self.columns - 1) as f64)
            / self.columns as f64;
        let cell_height = (rect.height - self.padding * 2.0 - self.gap * (self.rows - 1) as f64)
            / self.rows as f64;

        let usable = |dimension: f64| dimension.is_finite() && dimension > 0.0;
        (usable(cell_width) && usable(cell_height)).then_some(CellGeometry {
            cell_width,
            cell_height,
        })
    }

    /// Cell best containing the centre of an item drawn at `(x, y)`
    ///
    /// Out-of-canvas positions are clamped to the nearest edge cell.
    pub fn cell_for_point(&self, x: f64, y: f64, rect: CanvasRect, item: ItemSize) -> Option<Cell> {
        let geometry = self.cell_geometry(rect)?;
        Some(self.cell_in_geometry(x, y, geometry, item))
    }

    /// Same as [`Self::cell_for_point`] with precomputed geometry
    pub fn cell_in_geometry(&self, x: f64, y: f64, geometry: CellGeometry, item: ItemSize) -> Cell {
        let col = ((x + item.width / 2.0 - self.padding) / (geometry.cell_width + self.gap)).floor();
        let row =
            ((y + item.height / 2.0 - self.padding) / (geometry.cell_height + self.gap)).floor();
        Cell::new(clamp_index(row, self.rows), clamp_index(col, self.columns))
    }

    /// Pixel origin that centres an item inside a cell
    ///
    /// Clamped so the item stays inside the canvas; the lower bound wins
    /// first, so an item larger than the canvas ends at the far edge.
    pub fn cell_origin(
        &self,
        cell: Cell,
        geometry: CellGeometry,
        rect: CanvasRect,
        item: ItemSize,
    ) -> Point {
        let x = (geometry.cell_width + self.gap).mul_add(
            cell.col as f64,
            self.padding + (geometry.cell_width - item.width) / 2.0,
        );
        let y = (geometry.cell_height + self.gap).mul_add(
            cell.row as f64,
            self.padding + (geometry.cell_height - item.height) / 2.0,
        );

        Point::new(
            x.max(0.0).min(rect.width - item.width),
            y.max(0.0).min(rect.height - item.height),
        )
    }
}

/// Clamp a floored float index into `0..count`
fn clamp_index(raw: f64, count: usize) -> usize {
    let last = count.saturating_sub(1) as f64;
    // NaN passes through clamp and saturates to zero on the cast
    num_traits::clamp(raw, 0.0, last) as usize
}
