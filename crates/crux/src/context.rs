//! Shared game state.
//!
//! Everything a controller needs travels in one [`GameContext`] passed
//! by `&mut`. No globals, no singletons; a test builds its own context
//! and throws it away.

use crux_assets::{AssetError, AtlasManifest};
use crux_shared::Vec2;
use crux_ui::UiRoot;
use crux_wall::{HoldTypeSet, Wall, WallError};
use thiserror::Error;

use crate::config::{ConfigError, GameConfig};
use crate::Camera;

/// Atlas region names that are wall furniture, not holds.
pub const RESERVED_WALL_REGIONS: &[&str] = &["default", "hole"];

/// Errors from assembling the game.
#[derive(Error, Debug)]
pub enum GameError {
    /// An atlas or font failed to load.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// The configured wall is not buildable.
    #[error(transparent)]
    Wall(#[from] WallError),

    /// The configuration file is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The mutable world every controller operates on.
#[derive(Debug)]
pub struct GameContext {
    /// World camera.
    pub camera: Camera,
    /// The climbing wall.
    pub wall: Wall,
    /// Hold kinds available on this wall.
    pub hold_types: HoldTypeSet,
    /// UI tree.
    pub ui: UiRoot,
    /// Set while the editor has the world frozen.
    pub paused: bool,
}

impl GameContext {
    /// Builds the context from configuration plus the wall atlas.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the atlas lacks the reserved regions or
    /// the configured wall dimensions are invalid.
    pub fn new(
        config: &GameConfig,
        wall_atlas: &AtlasManifest,
        ui: UiRoot,
    ) -> Result<Self, GameError> {
        let default_tile = wall_atlas.require("default")?;
        let hole = wall_atlas.require("hole")?;

        let wall = Wall::new(
            config.wall.width,
            config.wall.height,
            config.wall.separation,
            config.wall.x_offset,
            default_tile,
            hole,
        )?;
        let hold_types = HoldTypeSet::from_manifest(wall_atlas, RESERVED_WALL_REGIONS);
        let camera = Camera::new(
            config.camera,
            Vec2::new(config.viewport.width as f32, config.viewport.height as f32),
        );

        tracing::info!(holds = hold_types.len(), "game context ready");

        Ok(Self {
            camera,
            wall,
            hold_types,
            ui,
            paused: false,
        })
    }
}
