/// Garment selection and quantities for a trip
pub mod packing;
