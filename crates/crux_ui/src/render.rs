//! Backend-agnostic render command stream.
//!
//! Widgets and the wall never talk to a GPU. Each draw pass appends
//! [`RenderCommand`]s to a `Vec` and the host renderer consumes them in
//! order. Commands carry their clip rectangle inline: a child's clip is
//! its parent's resolved bounds, so nothing renders outside its container.

use crux_assets::{NinePatchRegions, RegionRect};

use crate::layout::Rect;
use crate::style::Color;

/// Handle to a host-registered bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// A draw command for the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Atlas region drawn at its native size.
    Sprite {
        /// Source region in the atlas.
        region: RegionRect,
        /// Top-left destination in screen/world pixels.
        x: f32,
        /// Top-left destination in screen/world pixels.
        y: f32,
        /// Tint color.
        tint: Color,
        /// Clip rectangle; nothing draws outside it.
        clip: Option<Rect>,
    },
    /// Nine-sliced background stretched over a destination rectangle.
    NinePatch {
        /// The nine source cells.
        patches: NinePatchRegions,
        /// Destination rectangle.
        dest: Rect,
        /// Tint color.
        tint: Color,
        /// Clip rectangle.
        clip: Option<Rect>,
    },
    /// Bitmap-font text.
    Text {
        /// Host font handle.
        font: FontId,
        /// Text content.
        text: String,
        /// Baseline-left position.
        x: f32,
        /// Baseline-left position.
        y: f32,
        /// Text color.
        color: Color,
        /// Clip rectangle.
        clip: Option<Rect>,
    },
}

/// Vertex layout for the host's UI upload path.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UiVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}
