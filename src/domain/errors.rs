// Domain-level errors for entity construction.

use std::fmt;

/// Raised when a required sprite or sound cannot be resolved at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    MissingSheet {
        path: String,
    },
    RegionOutOfBounds {
        path: String,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    MissingSound {
        path: String,
    },
    EmptySequence {
        name: &'static str,
    },
    Manifest(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::MissingSheet { path } => write!(f, "sprite sheet not found: {path}"),
            AssetError::RegionOutOfBounds {
                path,
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "region {width}x{height} at ({x}, {y}) is outside sprite sheet {path}"
            ),
            AssetError::MissingSound { path } => write!(f, "sound not found: {path}"),
            AssetError::EmptySequence { name } => {
                write!(f, "animation sequence `{name}` has no frames")
            }
            AssetError::Manifest(message) => write!(f, "invalid asset manifest: {message}"),
        }
    }
}

impl std::error::Error for AssetError {}
