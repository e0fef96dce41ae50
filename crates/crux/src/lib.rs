//! # CRUX
//!
//! A routesetting sandbox: pan and zoom around a climbing wall, open
//! the editor, and drag holds onto a lattice of bolt slots.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        FRAME PIPELINE                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  host input ──> InputState ──> Game::update                  │
//! │                                  ├─ Camera (pan/zoom/clamp)  │
//! │                                  ├─ UiRoot (layout + clicks) │
//! │                                  └─ EditMode (drag/place)    │
//! │                                                              │
//! │  Game::draw ──> world commands (under camera transform)      │
//! │            └──> screen commands (UI + drag error glyph)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`camera`]: world camera, exponential zoom, view clamping
//! - [`config`]: TOML configuration with full defaults
//! - [`context`]: the shared [`context::GameContext`] controllers mutate
//! - [`edit_mode`]: edit toggle, hold palette, drag-to-place
//! - [`game`]: per-frame orchestration

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod camera;
pub mod config;
pub mod context;
pub mod edit_mode;
pub mod game;

pub use camera::Camera;
pub use config::{CameraConfig, ConfigError, GameConfig, ViewportConfig, WallConfig};
pub use context::{GameContext, GameError, RESERVED_WALL_REGIONS};
pub use edit_mode::{DragState, EditMode, EditState};
pub use game::Game;
