/// Grid parameters, cell arithmetic and slot cell reservations
pub mod geometry;
/// Cell-by-cell view of an outfit canvas
pub mod layout;
/// Occupied cell tracking and free cell search
pub mod occupancy;
/// Snapping of free items to grid cells
pub mod placement;
/// Editing session handling canvas gestures
pub mod session;
