//! Icon widget.

use crux_assets::RegionRect;

use super::core::{UiElement, WidgetId};
use crate::layout::Rect;
use crate::render::RenderCommand;

/// An atlas region drawn at its native size.
#[derive(Debug)]
pub struct Icon {
    /// Common widget state.
    pub element: UiElement,
    region: RegionRect,
}

impl Icon {
    /// Creates an icon sized to its region.
    #[must_use]
    pub fn new(id: WidgetId, region: RegionRect) -> Self {
        let mut element = UiElement::new(id);
        element.bounds.width = region.width as i32;
        element.bounds.height = region.height as i32;
        Self { element, region }
    }

    /// Current atlas region.
    #[must_use]
    pub fn region(&self) -> RegionRect {
        self.region
    }

    /// Swaps the region and re-sizes the element to match.
    pub fn set_region(&mut self, region: RegionRect) {
        self.region = region;
        self.element.bounds.width = region.width as i32;
        self.element.bounds.height = region.height as i32;
    }

    /// Emits the sprite draw command, clipped to the parent rectangle.
    pub fn draw(&self, parent: Rect, viewport: Rect, out: &mut Vec<RenderCommand>) {
        let dest = crate::layout::resolve_bounds(self.element.bounds, parent, viewport);
        out.push(RenderCommand::Sprite {
            region: self.region,
            x: dest.x,
            y: dest.y,
            tint: self.element.color,
            clip: Some(parent),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_takes_region_size() {
        let icon = Icon::new(WidgetId(3), RegionRect::new(10, 10, 24, 32));

        assert_eq!(icon.element.bounds.width, 24);
        assert_eq!(icon.element.bounds.height, 32);
    }

    #[test]
    fn test_set_region_resizes() {
        let mut icon = Icon::new(WidgetId(3), RegionRect::new(0, 0, 8, 8));
        icon.set_region(RegionRect::new(0, 0, 16, 12));

        assert_eq!(icon.element.bounds.width, 16);
        assert_eq!(icon.element.bounds.height, 12);
    }
}
