/// Random casual outfit composition
pub mod composer;
/// Stored outfit records and their conversion to and from canvas state
pub mod record;
/// Public share links for stored outfits
pub mod share;
/// Slot assignments and free placements of one outfit
pub mod state;
