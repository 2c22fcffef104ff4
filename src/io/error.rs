//! Error types and path context for wardrobe operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all wardrobe and canvas operations
#[derive(Debug)]
pub enum WardrobeError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Garment identifier is not part of the loaded wardrobe
    UnknownGarment {
        /// The identifier that was not found
        id: String,
    },

    /// Random composition exhausted its attempt budget
    ///
    /// Every attempt either selected nothing or selected a clashing
    /// colour pair. The outfit state is left untouched.
    OutfitGenerationFailed {
        /// Number of attempts made
        attempts: usize,
    },

    /// Save requested for an outfit without any placed garment
    NothingToSave,

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failure
    Serialization {
        /// Path of the document being read or written
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for WardrobeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownGarment { id } => {
                write!(f, "Garment '{id}' is not in the wardrobe")
            }
            Self::OutfitGenerationFailed { attempts } => {
                write!(
                    f,
                    "Could not generate an outfit after {attempts} attempts; try adding more garments"
                )
            }
            Self::NothingToSave => {
                write!(f, "Select at least one garment before saving the outfit")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "Malformed JSON in '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WardrobeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for wardrobe results
pub type Result<T> = std::result::Result<T, WardrobeError>;

/// Attaches the file path to I/O and JSON failures
pub trait WithPath<T> {
    /// Tag the error with the path and operation that produced it
    ///
    /// # Errors
    ///
    /// Propagates the original error converted into a [`WardrobeError`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| WardrobeError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for std::result::Result<T, serde_json::Error> {
    fn with_path(self, path: &Path, _operation: &'static str) -> Result<T> {
        self.map_err(|source| WardrobeError::Serialization {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Create an error for a failed write to the command output
pub fn output_failed(source: std::io::Error) -> WardrobeError {
    WardrobeError::FileSystem {
        path: PathBuf::from("<output>"),
        operation: "write output",
        source,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WardrobeError {
    WardrobeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown garment error
pub fn unknown_garment(id: &impl ToString) -> WardrobeError {
    WardrobeError::UnknownGarment { id: id.to_string() }
}
