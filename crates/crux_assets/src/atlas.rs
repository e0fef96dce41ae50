//! Texture atlas manifests.
//!
//! A packed atlas ships as a PNG plus an XML table of named rectangles:
//!
//! ```xml
//! <TextureAtlas imagePath="WallTiles.png">
//!     <SubTexture name="default" x="0" y="0" width="64" height="64"/>
//!     <SubTexture name="hole" x="66" y="0" width="8" height="8"/>
//! </TextureAtlas>
//! ```
//!
//! This module parses the table; the PNG itself is the host renderer's
//! problem.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// A named sub-rectangle of a packed texture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRect {
    /// Left edge within the texture.
    pub x: u32,
    /// Top edge within the texture.
    pub y: u32,
    /// Region width.
    pub width: u32,
    /// Region height.
    pub height: u32,
}

impl RegionRect {
    /// Creates a new region rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Parsed atlas manifest: region name -> rectangle.
#[derive(Debug, Clone, Default)]
pub struct AtlasManifest {
    regions: HashMap<String, RegionRect>,
    /// Region names in manifest order, for stable iteration.
    order: Vec<String>,
}

impl AtlasManifest {
    /// Parses an atlas manifest from its XML text.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if the XML is malformed, an entry is missing
    /// one of `name`/`x`/`y`/`width`/`height`, or a coordinate fails to
    /// parse as an unsigned integer.
    pub fn from_xml(xml: &str) -> Result<Self, AssetError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut manifest = Self::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    if e.name().as_ref() == b"SubTexture" {
                        let (name, rect) = parse_sub_texture(e)?;
                        manifest.insert(name, rect);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(AssetError::MalformedManifest(format!(
                        "XML error at position {}: {e}",
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        tracing::debug!(regions = manifest.len(), "parsed atlas manifest");
        Ok(manifest)
    }

    fn insert(&mut self, name: String, rect: RegionRect) {
        if self.regions.insert(name.clone(), rect).is_none() {
            self.order.push(name);
        }
    }

    /// Looks up a region by name.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<RegionRect> {
        self.regions.get(name).copied()
    }

    /// Looks up a region by name, failing loudly if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::RegionNotFound`] if the atlas has no region
    /// with that name.
    pub fn require(&self, name: &str) -> Result<RegionRect, AssetError> {
        self.region(name)
            .ok_or_else(|| AssetError::RegionNotFound(name.to_owned()))
    }

    /// Iterates regions in manifest order as `(name, rect)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RegionRect)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.regions[name]))
    }

    /// Number of regions in the manifest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the manifest has no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn parse_sub_texture(e: &BytesStart<'_>) -> Result<(String, RegionRect), AssetError> {
    let mut name = None;
    let mut x = None;
    let mut y = None;
    let mut width = None;
    let mut height = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| AssetError::MalformedManifest(err.to_string()))?;
        let value = String::from_utf8_lossy(&attr.value).to_string();

        match attr.key.as_ref() {
            b"name" => name = Some(value),
            b"x" => x = Some(parse_coord("x", &value)?),
            b"y" => y = Some(parse_coord("y", &value)?),
            b"width" => width = Some(parse_coord("width", &value)?),
            b"height" => height = Some(parse_coord("height", &value)?),
            _ => {}
        }
    }

    let name = name.ok_or(AssetError::MissingAttribute { attribute: "name" })?;
    let rect = RegionRect::new(
        x.ok_or(AssetError::MissingAttribute { attribute: "x" })?,
        y.ok_or(AssetError::MissingAttribute { attribute: "y" })?,
        width.ok_or(AssetError::MissingAttribute { attribute: "width" })?,
        height.ok_or(AssetError::MissingAttribute { attribute: "height" })?,
    );

    Ok((name, rect))
}

fn parse_coord(attribute: &'static str, value: &str) -> Result<u32, AssetError> {
    value.parse().map_err(|_| AssetError::InvalidAttribute {
        attribute,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <TextureAtlas imagePath="WallTiles.png">
            <SubTexture name="default" x="0" y="0" width="64" height="64"/>
            <SubTexture name="hole" x="66" y="0" width="8" height="8"/>
            <SubTexture name="jug" x="66" y="10" width="24" height="24"/>
        </TextureAtlas>
    "#;

    #[test]
    fn test_parse_manifest() {
        let manifest = AtlasManifest::from_xml(SAMPLE).unwrap();

        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.region("hole"), Some(RegionRect::new(66, 0, 8, 8)));
        assert_eq!(manifest.region("nope"), None);
    }

    #[test]
    fn test_iteration_preserves_manifest_order() {
        let manifest = AtlasManifest::from_xml(SAMPLE).unwrap();
        let names: Vec<_> = manifest.iter().map(|(name, _)| name).collect();

        assert_eq!(names, ["default", "hole", "jug"]);
    }

    #[test]
    fn test_missing_attribute() {
        let xml = r#"<TextureAtlas><SubTexture name="a" x="0" y="0" width="8"/></TextureAtlas>"#;
        let err = AtlasManifest::from_xml(xml).unwrap_err();

        assert_eq!(err, AssetError::MissingAttribute { attribute: "height" });
    }

    #[test]
    fn test_invalid_coordinate() {
        let xml = r#"<TextureAtlas><SubTexture name="a" x="-3" y="0" width="8" height="8"/></TextureAtlas>"#;
        let err = AtlasManifest::from_xml(xml).unwrap_err();

        assert!(matches!(err, AssetError::InvalidAttribute { attribute: "x", .. }));
    }
}
