//! # CRUX Shared
//!
//! Common types used across the workspace.
//!
//! This crate must never depend on any GPU, window, or asset crate.
//! If you need graphics types, put them behind the render-command
//! boundary in `crux_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{PIXEL_BOUNDS, TILE_BOUNDS, TILE_SIZE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use math::{eerp, Vec2};
