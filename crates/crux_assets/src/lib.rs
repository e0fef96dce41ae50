//! # CRUX Assets
//!
//! The manifest side of asset loading: which named rectangle lives where
//! in a packed texture, how a nine-patch region slices up, and how wide a
//! string renders in a bitmap font.
//!
//! Image decoding and GPU upload belong to the host renderer. This crate
//! only parses the text manifests that ship next to each texture, so it
//! stays fully testable without a window.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod atlas;
pub mod error;
pub mod font;
pub mod ninepatch;

pub use atlas::{AtlasManifest, RegionRect};
pub use error::AssetError;
pub use font::FontMetrics;
pub use ninepatch::NinePatchRegions;
