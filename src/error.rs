//! Error type shared by the grid, codec and registry.

use thiserror::Error;

use crate::registry::SpriteHandle;

/// Failure of a core sprite operation.
///
/// Every operation validates its input before touching any state, so an
/// `Err` always means the target grid, palette or registry is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SpriteError {
    /// Width or height is zero or not a multiple of 8
    #[error("invalid sprite dimensions {width}x{height}: both must be positive multiples of 8")]
    InvalidDimension { width: usize, height: usize },
    /// Coordinate outside the current grid extent
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
    /// Color index outside 0..=3
    #[error("invalid color index {0}, expected 0..=3")]
    InvalidColorIndex(u8),
    /// Registry lookup miss
    #[error("no sprite registered under handle {0}")]
    UnknownHandle(SpriteHandle),
    /// Tile data too short or not hexadecimal
    #[error("malformed tile data: expected {expected}, found {found}")]
    MalformedInput { expected: String, found: String },
}

impl SpriteError {
    pub(crate) fn too_short(expected: usize, found: usize, unit: &str) -> Self {
        SpriteError::MalformedInput {
            expected: format!("at least {} {}", expected, unit),
            found: format!("{} {}", found, unit),
        }
    }
}
