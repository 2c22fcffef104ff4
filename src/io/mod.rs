/// Command-line interface
pub mod cli;
/// Grid, composer and naming defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON persistence of wardrobes, outfit states and records
pub mod storage;
