//! Game configuration.
//!
//! Loaded once at startup from a TOML file; every field has a default
//! so a missing file or a partial file still produces a playable game.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or parsing a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has a wrong field type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Logical viewport dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Starting wall shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    /// Hold separation in tile units.
    pub separation: f32,
    /// Horizontal offset of the wall's left edge, in tiles.
    pub x_offset: i32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            width: 12,
            height: 5,
            separation: 0.25,
            x_offset: -6,
        }
    }
}

/// Camera feel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Smallest zoom factor (furthest out).
    pub min_zoom: f32,
    /// Largest zoom factor (closest in).
    pub max_zoom: f32,
    /// Keyboard pan speed, world pixels per second.
    pub scroll_speed: f32,
    /// Zoom change per scroll-wheel notch, as a fraction of the range.
    pub zoom_speed: f32,
    /// Keyboard zoom change per second, as a fraction of the range.
    pub keyboard_zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.3,
            max_zoom: 2.0,
            scroll_speed: 400.0,
            zoom_speed: 0.05,
            keyboard_zoom_speed: 0.75,
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical viewport.
    pub viewport: ViewportConfig,
    /// Starting wall.
    pub wall: WallConfig,
    /// Camera feel.
    pub camera: CameraConfig,
}

impl GameConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.viewport.width, 1920);
        assert_eq!(config.wall.width, 12);
        assert!((config.wall.separation - 0.25).abs() < 1e-6);
        assert!((config.camera.min_zoom - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = GameConfig::from_toml(
            "[wall]\n\
             width = 20\n\
             separation = 0.5\n",
        )
        .unwrap();

        assert_eq!(config.wall.width, 20);
        assert!((config.wall.separation - 0.5).abs() < 1e-6);
        // Untouched sections keep their defaults.
        assert_eq!(config.wall.height, 5);
        assert_eq!(config.viewport.height, 1080);
    }

    #[test]
    fn test_round_trip() {
        let config = GameConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed = GameConfig::from_toml(&text).unwrap();

        assert_eq!(parsed.wall.width, config.wall.width);
        assert!((parsed.camera.max_zoom - config.camera.max_zoom).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = GameConfig::from_toml("[wall\nwidth = 20").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
