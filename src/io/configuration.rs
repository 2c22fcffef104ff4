//! Canvas constants and runtime configuration defaults

// Canvas grid, measured in CSS pixels
/// Number of grid columns on the outfit canvas
pub const GRID_COLUMNS: usize = 3;
/// Number of grid rows on the outfit canvas
pub const GRID_ROWS: usize = 5;
/// Inner padding between the canvas border and the first cell
pub const GRID_PADDING: f64 = 12.0;
/// Gap between neighbouring cells
pub const GRID_GAP: f64 = 8.0;

/// Side of a free item when the cell size is not known yet
pub const DEFAULT_ITEM_SIZE: f64 = 80.0;
/// Default canvas width used by the command line front end
pub const DEFAULT_CANVAS_WIDTH: f64 = 300.0;
/// Default canvas height used by the command line front end
pub const DEFAULT_CANVAS_HEIGHT: f64 = 500.0;

// Random composer tuning. No documented rationale for the exact values.
/// Maximum sampling attempts before giving up
pub const DEFAULT_ATTEMPT_LIMIT: usize = 30;
/// Chance of a full-body garment when one exists
pub const FULL_OUTFIT_PROBABILITY: f64 = 0.4;
/// Chance of adding outerwear
pub const OUTERWEAR_PROBABILITY: f64 = 0.5;
/// Chance of adding an accessory
pub const ACCESSORY_PROBABILITY: f64 = 0.6;

// Persistence
/// Name used when an outfit is saved with a blank name
pub const DEFAULT_OUTFIT_NAME: &str = "Untitled outfit";
/// Route segment of public share links
pub const SHARE_PATH: &str = "share";

// Trip planning
/// Trip length used when none (or an invalid one) is given
pub const DEFAULT_TRIP_DAYS: u32 = 3;
/// File stem of exported packing lists without a trip name
pub const DEFAULT_PACKING_SLUG: &str = "suitcase";
