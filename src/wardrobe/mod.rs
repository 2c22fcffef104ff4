/// Garment categories, seasons, formality and occasions
pub mod catalogue;
/// Wardrobe collection and per-slot grouping
pub mod collection;
/// Garment list filtering
pub mod filter;
/// Garment records and identifiers
pub mod garment;
/// Colour palette and clashing colour pairs
pub mod palette;
/// Body slots an outfit is built from
pub mod slot;
