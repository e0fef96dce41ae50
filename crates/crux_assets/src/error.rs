//! # Asset Error Types
//!
//! All errors that can occur while parsing asset manifests.
//!
//! These are environmental failures (bad files on disk), so they are
//! `Result`s - unlike layout-precondition violations, which panic.

use thiserror::Error;

/// Errors that can occur in the asset manifest layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The atlas XML was not well formed.
    #[error("malformed atlas manifest: {0}")]
    MalformedManifest(String),

    /// A `SubTexture` entry was missing a required attribute.
    #[error("atlas entry missing attribute '{attribute}'")]
    MissingAttribute {
        /// The attribute that was absent.
        attribute: &'static str,
    },

    /// An attribute value failed to parse as an integer.
    #[error("invalid value '{value}' for attribute '{attribute}'")]
    InvalidAttribute {
        /// The attribute being parsed.
        attribute: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A named region was requested but does not exist in the atlas.
    #[error("region not found in atlas: {0}")]
    RegionNotFound(String),

    /// A region is too small to slice into nine patches.
    #[error("region {width}x{height} too small for nine-patch corner {corner}")]
    RegionTooSmall {
        /// Region width in pixels.
        width: u32,
        /// Region height in pixels.
        height: u32,
        /// Requested corner size in pixels.
        corner: u32,
    },

    /// A BMFont line could not be parsed.
    #[error("malformed font file at line {line}: {reason}")]
    MalformedFont {
        /// 1-based line number.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },
}
