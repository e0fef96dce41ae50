//! Text widget.

use std::rc::Rc;

use crux_assets::FontMetrics;

use super::core::{UiElement, WidgetId};
use crate::layout::Rect;
use crate::render::{FontId, RenderCommand};

/// A block of bitmap-font text. Setting the text re-measures it, so the
/// element's width/height always match what will render.
#[derive(Debug)]
pub struct TextBlock {
    /// Common widget state.
    pub element: UiElement,
    font: FontId,
    metrics: Rc<FontMetrics>,
    text: String,
}

impl TextBlock {
    /// Creates a text block and measures the initial text.
    #[must_use]
    pub fn new(id: WidgetId, font: FontId, metrics: Rc<FontMetrics>, text: impl Into<String>) -> Self {
        let mut block = Self {
            element: UiElement::new(id),
            font,
            metrics,
            text: String::new(),
        };
        block.set_text(text);
        block
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text and updates the element size from the font
    /// metrics.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let (width, height) = self.metrics.measure(&self.text);
        self.element.bounds.width = width;
        self.element.bounds.height = height;
    }

    /// Emits the text draw command, clipped to the parent rectangle.
    pub fn draw(&self, parent: Rect, viewport: Rect, out: &mut Vec<RenderCommand>) {
        let dest = crate::layout::resolve_bounds(self.element.bounds, parent, viewport);
        out.push(RenderCommand::Text {
            font: self.font,
            text: self.text.clone(),
            x: dest.x,
            y: dest.y,
            color: self.element.color,
            clip: Some(parent),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn metrics() -> Rc<FontMetrics> {
        let fnt = "common lineHeight=16\n\
                   char id=32 xadvance=4\n\
                   char id=72 xadvance=8\n\
                   char id=105 xadvance=3\n";
        Rc::new(FontMetrics::from_bmfont(fnt).unwrap())
    }

    #[test]
    fn test_set_text_resizes() {
        let mut block = TextBlock::new(WidgetId(1), FontId(0), metrics(), "Hi");
        assert_eq!(block.element.bounds.width, 11);
        assert_eq!(block.element.bounds.height, 16);

        block.set_text("");
        assert_eq!(block.element.bounds.width, 0);
        assert_eq!(block.element.bounds.height, 0);
    }

    #[test]
    fn test_draw_clips_to_parent() {
        let mut block = TextBlock::new(WidgetId(1), FontId(0), metrics(), "Hi");
        block.element.bounds.x = 4;
        block.element.bounds.y = 2;
        block.element.color = Color::BLACK;

        let parent = Rect::new(100.0, 50.0, 200.0, 100.0);
        let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let mut out = Vec::new();
        block.draw(parent, viewport, &mut out);

        let RenderCommand::Text { x, y, clip, .. } = &out[0] else {
            panic!("expected text command");
        };
        assert_eq!((*x, *y), (104.0, 52.0));
        assert_eq!(*clip, Some(parent));
    }
}
