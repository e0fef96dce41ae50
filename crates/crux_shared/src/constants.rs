//! # World Constants
//!
//! Fixed configuration for the CRUX world and viewport.
//!
//! **NOTE:** The UI layout system validates resolved bounds against the
//! viewport; changing the viewport size changes what counts as a layout bug.

/// Size of one wall tile in world pixels.
pub const TILE_SIZE: i32 = 64;

/// Logical viewport width in pixels.
pub const VIEWPORT_WIDTH: i32 = 1920;

/// Logical viewport height in pixels.
pub const VIEWPORT_HEIGHT: i32 = 1080;

/// World extents in tile units: (left, top, width, height).
///
/// World Y increases downward, so `top` is negative (above the ground line).
pub const TILE_BOUNDS: (i32, i32, i32, i32) = (-100, -10, 200, 60);

/// World extents in pixels, derived from [`TILE_BOUNDS`].
///
/// The camera is clamped so its view rectangle never leaves these bounds.
pub const PIXEL_BOUNDS: (i32, i32, i32, i32) = (
    TILE_BOUNDS.0 * TILE_SIZE,
    -(TILE_BOUNDS.1 + TILE_BOUNDS.3) * TILE_SIZE,
    TILE_BOUNDS.2 * TILE_SIZE,
    TILE_BOUNDS.3 * TILE_SIZE,
);

/// Ground level in world pixels.
pub const GROUND_LEVEL: f32 = 0.0;
