//! Bitmap-font metrics.
//!
//! Parses the BMFont text format (`.fnt`) far enough to measure strings:
//! line height from the `common` line, per-glyph advance (and source
//! rectangle, for the renderer) from each `char` line. Glyph rendering is
//! the host's job; the UI only needs sizes for auto-layout.

use std::collections::HashMap;

use crate::atlas::RegionRect;
use crate::error::AssetError;

/// Metrics for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Source rectangle in the font texture.
    pub rect: RegionRect,
    /// Pen offset when placing the glyph.
    pub offset: (i32, i32),
    /// Horizontal pen advance after the glyph.
    pub advance: i32,
}

/// Parsed metrics of a bitmap font.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    glyphs: HashMap<char, Glyph>,
    line_height: i32,
    /// Advance used for characters the font does not cover.
    fallback_advance: i32,
}

impl FontMetrics {
    /// Parses metrics from BMFont text content.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::MalformedFont`] if the `common` line is
    /// missing or a `char` line has unreadable fields.
    pub fn from_bmfont(content: &str) -> Result<Self, AssetError> {
        let mut glyphs = HashMap::new();
        let mut line_height = None;

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if let Some(rest) = line.strip_prefix("common ") {
                let fields = parse_fields(rest);
                line_height = Some(require_field(&fields, "lineHeight", index + 1)?);
            } else if let Some(rest) = line.strip_prefix("char ") {
                let fields = parse_fields(rest);
                let id = require_field(&fields, "id", index + 1)?;
                let Some(ch) = u32::try_from(id).ok().and_then(char::from_u32) else {
                    return Err(AssetError::MalformedFont {
                        line: index + 1,
                        reason: format!("invalid char id {id}"),
                    });
                };

                let glyph = Glyph {
                    rect: RegionRect::new(
                        field_or(&fields, "x", 0) as u32,
                        field_or(&fields, "y", 0) as u32,
                        field_or(&fields, "width", 0) as u32,
                        field_or(&fields, "height", 0) as u32,
                    ),
                    offset: (
                        field_or(&fields, "xoffset", 0),
                        field_or(&fields, "yoffset", 0),
                    ),
                    advance: require_field(&fields, "xadvance", index + 1)?,
                };
                glyphs.insert(ch, glyph);
            }
        }

        let line_height = line_height.ok_or(AssetError::MalformedFont {
            line: 0,
            reason: "no 'common' line".to_owned(),
        })?;

        // Space is the conventional stand-in for unknown characters.
        let fallback_advance = glyphs
            .get(&' ')
            .map_or(line_height / 2, |glyph| glyph.advance);

        tracing::debug!(glyphs = glyphs.len(), line_height, "parsed font metrics");
        Ok(Self {
            glyphs,
            line_height,
            fallback_advance,
        })
    }

    /// Looks up one glyph.
    #[must_use]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// Height of one text line in pixels.
    #[must_use]
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Measures a string as `(width, height)` in pixels.
    ///
    /// Width is the widest line; height is line count times line height.
    /// Characters the font does not cover advance by the space width.
    #[must_use]
    pub fn measure(&self, text: &str) -> (i32, i32) {
        if text.is_empty() {
            return (0, 0);
        }

        let mut max_width = 0;
        let mut lines = 0;
        for line in text.split('\n') {
            let width: i32 = line
                .chars()
                .map(|ch| {
                    self.glyphs
                        .get(&ch)
                        .map_or(self.fallback_advance, |glyph| glyph.advance)
                })
                .sum();
            max_width = max_width.max(width);
            lines += 1;
        }

        (max_width, lines * self.line_height)
    }
}

/// Splits a BMFont line body into `key=value` fields.
///
/// Quoted string values (e.g. `face="Kenney Mini"`) are skipped; the
/// metrics we need are all integers.
fn parse_fields(body: &str) -> HashMap<&str, &str> {
    body.split_whitespace()
        .filter_map(|pair| pair.split_once('='))
        .collect()
}

fn require_field(
    fields: &HashMap<&str, &str>,
    key: &'static str,
    line: usize,
) -> Result<i32, AssetError> {
    fields
        .get(key)
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| AssetError::MalformedFont {
            line,
            reason: format!("missing or invalid field '{key}'"),
        })
}

fn field_or(fields: &HashMap<&str, &str>, key: &str, default: i32) -> i32 {
    fields
        .get(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
info face=\"Kenney Mini\" size=16 bold=0 italic=0\n\
common lineHeight=16 base=13 scaleW=256 scaleH=256 pages=1\n\
page id=0 file=\"font16_0.png\"\n\
chars count=4\n\
char id=32 x=0 y=0 width=0 height=0 xoffset=0 yoffset=0 xadvance=4 page=0\n\
char id=65 x=8 y=0 width=7 height=10 xoffset=0 yoffset=3 xadvance=8 page=0\n\
char id=66 x=16 y=0 width=7 height=10 xoffset=0 yoffset=3 xadvance=8 page=0\n\
char id=87 x=24 y=0 width=11 height=10 xoffset=0 yoffset=3 xadvance=12 page=0\n";

    #[test]
    fn test_measure_single_line() {
        let font = FontMetrics::from_bmfont(SAMPLE).unwrap();

        // A + B + space + W
        assert_eq!(font.measure("AB W"), (8 + 8 + 4 + 12, 16));
    }

    #[test]
    fn test_measure_multiline_uses_widest() {
        let font = FontMetrics::from_bmfont(SAMPLE).unwrap();

        assert_eq!(font.measure("A\nWW"), (24, 32));
    }

    #[test]
    fn test_unknown_char_falls_back_to_space() {
        let font = FontMetrics::from_bmfont(SAMPLE).unwrap();

        assert_eq!(font.measure("~"), (4, 16));
    }

    #[test]
    fn test_empty_string_is_zero() {
        let font = FontMetrics::from_bmfont(SAMPLE).unwrap();

        assert_eq!(font.measure(""), (0, 0));
    }

    #[test]
    fn test_missing_common_line() {
        let err = FontMetrics::from_bmfont("chars count=0\n").unwrap_err();

        assert!(matches!(err, AssetError::MalformedFont { .. }));
    }
}
