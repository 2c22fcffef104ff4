//! Outfit canvas: slot-based outfit editing, grid snapping and random outfit composition
//!
//! Garments from a wardrobe are either assigned to named body slots or placed
//! freely on a canvas, where they snap to the nearest grid cell not reserved by
//! a slot or taken by another item.

#![forbid(unsafe_code)]

/// Grid geometry, occupancy and snapping of free items
pub mod canvas;
/// Input/output operations, configuration and error handling
pub mod io;
/// Outfit state, random composition and stored outfit records
pub mod outfit;
/// Trip packing lists
pub mod trip;
/// Garments, categories, colours and wardrobe queries
pub mod wardrobe;

pub use io::error::{Result, WardrobeError};
