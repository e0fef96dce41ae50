//! Widget types.
//!
//! The widget set is closed (the editor needs exactly four), so nodes are
//! an enum rather than trait objects: containers own `UiNode` values
//! outright and the compiler checks every dispatch site.

mod button;
mod core;
mod icon;
mod stack;
mod text;

pub use button::Button;
pub use core::{FrameResponses, UiElement, WidgetId};
pub use icon::Icon;
pub use stack::{GrowDirection, Stack};
pub use text::TextBlock;

use crate::input::InputState;
use crate::layout::{resolve_bounds, Rect};
use crate::render::RenderCommand;

/// A widget node: one of the four concrete widgets.
#[derive(Debug)]
pub enum UiNode {
    /// Measured text.
    Text(TextBlock),
    /// Atlas-region image.
    Icon(Icon),
    /// Clickable nine-patch button with one content node.
    Button(Button),
    /// Directional auto-sizing container.
    Stack(Stack),
}

impl UiNode {
    /// The common element record.
    #[must_use]
    pub fn element(&self) -> &UiElement {
        match self {
            Self::Text(w) => &w.element,
            Self::Icon(w) => &w.element,
            Self::Button(w) => &w.element,
            Self::Stack(w) => &w.element,
        }
    }

    /// Mutable access to the common element record.
    pub fn element_mut(&mut self) -> &mut UiElement {
        match self {
            Self::Text(w) => &mut w.element,
            Self::Icon(w) => &mut w.element,
            Self::Button(w) => &mut w.element,
            Self::Stack(w) => &mut w.element,
        }
    }

    /// Per-frame update. `parent` is the container's resolved rectangle
    /// (the viewport for root-level nodes).
    pub fn update(
        &mut self,
        parent: Rect,
        viewport: Rect,
        input: &InputState,
        dt: f32,
        responses: &mut FrameResponses,
    ) {
        match self {
            Self::Text(_) | Self::Icon(_) => {}
            Self::Button(w) => w.update(parent, viewport, input, dt, responses),
            Self::Stack(w) => w.update(parent, viewport, input, dt, responses),
        }
    }

    /// Emits render commands. `parent` doubles as the clip rectangle.
    pub fn draw(&self, parent: Rect, viewport: Rect, out: &mut Vec<RenderCommand>) {
        match self {
            Self::Text(w) => w.draw(parent, viewport, out),
            Self::Icon(w) => w.draw(parent, viewport, out),
            Self::Button(w) => w.draw(parent, viewport, out),
            Self::Stack(w) => w.draw(parent, viewport, out),
        }
    }

    /// Resolves this node's absolute bounds against its parent.
    #[must_use]
    pub fn absolute_bounds(&self, parent: Rect, viewport: Rect) -> Rect {
        resolve_bounds(self.element().bounds, parent, viewport)
    }

    /// Finds a node by id in this subtree.
    pub fn find_mut(&mut self, id: WidgetId) -> Option<&mut Self> {
        if self.element().id == id {
            return Some(self);
        }
        match self {
            Self::Text(_) | Self::Icon(_) => None,
            Self::Button(w) => w.content_mut().find_mut(id),
            Self::Stack(w) => w.children_mut().iter_mut().find_map(|c| c.find_mut(id)),
        }
    }
}
