//! Error types for the war2pud library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for war2pud operations
#[derive(Debug, Error)]
pub enum PudError {
    /// IO error other than a short read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A text-database resource is missing or malformed
    #[error("Failed to load asset {path}: {reason}")]
    AssetLoadError {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    /// The stream ended inside a section header or payload
    #[error("Unexpected end-of-file encountered at offset {offset}")]
    UnexpectedEndOfFile { offset: u64 },

    /// A section tag that is not part of the format
    #[error("Unrecognized section `{0}`")]
    UnknownSection(String),

    /// The VER section holds a version outside the supported set
    #[error("Unrecognized version `{0}`")]
    UnsupportedVersion(u16),

    /// An OWNR byte does not index the allowed-player-type table
    #[error("Unknown player type `{player_type}` in slot {slot}")]
    InvalidPlayerType { slot: usize, player_type: u8 },

    /// An ERA/ERAX terrain id is not in the terrain table
    #[error("Unknown terrain `{0}`")]
    UnknownTerrain(u16),

    /// DIM width or height is over the configured maximum
    #[error("Map {axis} {value} is greater than the maximum of {max}")]
    MapDimensionExceeded {
        axis: &'static str,
        value: u16,
        max: u16,
    },

    /// A width*height sized section arrived before DIM
    #[error("Section `{0}` requires map dimensions, but no DIM section was read")]
    MissingDimensionContext(String),

    /// Negative length prefix in a section header
    #[error("Invalid length {length} for section `{tag}`")]
    InvalidSectionLength { tag: String, length: i32 },

    /// Payload shorter than the section's fixed layout
    #[error("Section `{tag}` needs {needed} bytes, payload has {available}")]
    SectionTooShort {
        tag: String,
        needed: usize,
        available: usize,
    },

    /// UNIT payload is not a whole number of records (strict mode only)
    #[error("UNIT section has {remainder} trailing bytes")]
    TrailingUnitBytes { remainder: usize },
}

/// Result type alias for war2pud operations
pub type Result<T> = std::result::Result<T, PudError>;

impl PudError {
    /// Build an [`PudError::AssetLoadError`] without an IO source.
    pub fn asset(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PudError::AssetLoadError {
            path: path.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Whether this error was raised by a lookup-table load.
    pub fn is_asset_error(&self) -> bool {
        matches!(self, PudError::AssetLoadError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PudError::UnsupportedVersion(18);
        assert_eq!(err.to_string(), "Unrecognized version `18`");
    }

    #[test]
    fn test_dimension_error() {
        let err = PudError::MapDimensionExceeded {
            axis: "width",
            value: 256,
            max: 128,
        };
        assert_eq!(
            err.to_string(),
            "Map width 256 is greater than the maximum of 128"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: PudError = io_err.into();
        assert!(matches!(err, PudError::Io(_)));
    }

    #[test]
    fn test_asset_error_helper() {
        let err = PudError::asset("data/units.txt", "line 3: missing name");
        assert!(err.is_asset_error());
        assert!(err.to_string().contains("units.txt"));
        assert!(err.to_string().contains("line 3"));
    }
}
