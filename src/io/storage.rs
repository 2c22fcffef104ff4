//! JSON documents exchanged with the surrounding application

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::io::error::{Result, WithPath};
use crate::outfit::record::OutfitRecord;
use crate::outfit::state::OutfitState;
use crate::wardrobe::collection::Wardrobe;
use crate::wardrobe::garment::Garment;

/// Read and decode a JSON document
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode into `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).with_path(path, "read")?;
    serde_json::from_str(&content).with_path(path, "decode")
}

/// Encode a value as pretty JSON and write it, creating parent directories
///
/// # Errors
///
/// Returns an error if the value cannot be encoded or the file written
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    let content = serde_json::to_string_pretty(value).with_path(path, "encode")?;
    std::fs::write(path, content).with_path(path, "write")
}

/// Load a wardrobe exported as a JSON array of garment rows
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds malformed garments
pub fn load_wardrobe(path: &Path) -> Result<Wardrobe> {
    let garments: Vec<Garment> = read_json(path)?;
    log::info!("Loaded {} garments from {}", garments.len(), path.display());
    Ok(Wardrobe::new(garments))
}

/// Load an outfit state, or an empty canvas if the file does not exist yet
///
/// # Errors
///
/// Returns an error if an existing file cannot be read or decoded
pub fn load_state_or_default(path: &Path) -> Result<OutfitState> {
    if path.exists() {
        read_json(path)
    } else {
        log::debug!("No outfit state at {}, starting empty", path.display());
        Ok(OutfitState::new())
    }
}

/// Store an outfit state
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn save_state(path: &Path, state: &OutfitState) -> Result<()> {
    write_json(path, state)
}

/// Load a saved outfit record
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_record(path: &Path) -> Result<OutfitRecord> {
    read_json(path)
}

/// Store an outfit record
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn save_record(path: &Path, record: &OutfitRecord) -> Result<()> {
    write_json(path, record)
}
