//! # Wall Error Types

use thiserror::Error;

/// Errors that can occur constructing or resizing a wall.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WallError {
    /// Wall dimensions must be at least one tile each way.
    #[error("invalid wall dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in tiles.
        width: u32,
        /// Requested height in tiles.
        height: u32,
    },

    /// Hold separation must be positive and small enough to fit at
    /// least one slot inside the wall.
    #[error("invalid hold separation {0}")]
    InvalidSeparation(f32),
}
