//! Stack container.
//!
//! Lays children out along one growth direction with uniform spacing,
//! then optionally sizes itself to fit. Growing `Up` or `Left` produces a
//! negative along-axis extent, which composes with the signed-bounds
//! convention: a top-anchored container can still visually grow upward.

use crux_assets::NinePatchRegions;

use super::core::{FrameResponses, UiElement, WidgetId};
use super::UiNode;
use crate::input::InputState;
use crate::layout::Rect;
use crate::render::RenderCommand;

/// Direction a stack grows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowDirection {
    /// Children flow top to bottom.
    #[default]
    Down,
    /// Children flow bottom to top (negative height).
    Up,
    /// Children flow left to right.
    Right,
    /// Children flow right to left (negative width).
    Left,
}

impl GrowDirection {
    /// +1 for Down/Right, -1 for Up/Left.
    const fn sign(self) -> i32 {
        match self {
            Self::Down | Self::Right => 1,
            Self::Up | Self::Left => -1,
        }
    }

    /// True for Down/Up.
    const fn is_vertical(self) -> bool {
        matches!(self, Self::Down | Self::Up)
    }
}

/// Ordered container of widgets along one axis.
#[derive(Debug)]
pub struct Stack {
    /// Common widget state.
    pub element: UiElement,
    children: Vec<UiNode>,
    /// Growth direction.
    pub grow: GrowDirection,
    /// Size the cross axis to the widest child plus padding each frame.
    pub auto_size: bool,
    /// Horizontal and vertical padding inside the stack.
    pub padding: (i32, i32),
    /// Gap between consecutive children.
    pub item_spacing: i32,
    background: Option<NinePatchRegions>,
}

impl Stack {
    /// Creates an empty stack, optionally with a nine-patch background.
    #[must_use]
    pub fn new(id: WidgetId, background: Option<NinePatchRegions>) -> Self {
        Self {
            element: UiElement::new(id),
            children: Vec::new(),
            grow: GrowDirection::Down,
            auto_size: true,
            padding: (10, 10),
            item_spacing: 10,
            background,
        }
    }

    /// Appends a child; insertion order is layout order.
    pub fn add_child(&mut self, child: UiNode) {
        self.children.push(child);
    }

    /// Removes a child by id. Returns the removed node, if present.
    pub fn remove_child(&mut self, id: WidgetId) -> Option<UiNode> {
        let index = self
            .children
            .iter()
            .position(|child| child.element().id == id)?;
        Some(self.children.remove(index))
    }

    /// The children in layout order.
    #[must_use]
    pub fn children(&self) -> &[UiNode] {
        &self.children
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> &mut [UiNode] {
        &mut self.children
    }

    /// Per-frame pass: lay children out, size self, then update children.
    pub fn update(
        &mut self,
        parent: Rect,
        viewport: Rect,
        input: &InputState,
        dt: f32,
        responses: &mut FrameResponses,
    ) {
        self.layout();

        let abs = crate::layout::resolve_bounds(self.element.bounds, parent, viewport);
        for child in &mut self.children {
            if child.element().visible {
                child.update(abs, viewport, input, dt, responses);
            }
        }
    }

    /// Assigns child along-axis offsets and recomputes the stack's extents.
    ///
    /// Accumulator starts at the signed padding; each child lands at the
    /// current value and advances it by its along-axis extent plus
    /// spacing. The final extent drops the trailing spacing and adds the
    /// far-side padding. An empty stack's along-axis extent is exactly
    /// the signed padding.
    fn layout(&mut self) {
        let sign = self.grow.sign();
        let vertical = self.grow.is_vertical();
        let along_pad = if vertical { self.padding.1 } else { self.padding.0 };
        let cross_pad = if vertical { self.padding.0 } else { self.padding.1 };

        let mut offset = sign * along_pad;
        let mut max_cross = 0;

        for child in &mut self.children {
            let bounds = &mut child.element_mut().bounds;
            let (along, cross) = if vertical {
                (bounds.height, bounds.width)
            } else {
                (bounds.width, bounds.height)
            };
            max_cross = max_cross.max(cross);

            if vertical {
                bounds.x = cross_pad;
                bounds.y = offset;
            } else {
                bounds.x = offset;
                bounds.y = cross_pad;
            }
            offset += sign * (along + self.item_spacing);
        }

        let along_extent = if self.children.is_empty() {
            offset
        } else {
            offset - sign * self.item_spacing + sign * along_pad
        };

        if vertical {
            self.element.bounds.height = along_extent;
        } else {
            self.element.bounds.width = along_extent;
        }

        if self.auto_size {
            let cross_extent = max_cross + cross_pad * 2;
            if vertical {
                self.element.bounds.width = cross_extent;
            } else {
                self.element.bounds.height = cross_extent;
            }
        }
    }

    /// Emits the background, then the children in order.
    pub fn draw(&self, parent: Rect, viewport: Rect, out: &mut Vec<RenderCommand>) {
        let dest = crate::layout::resolve_bounds(self.element.bounds, parent, viewport);

        if let Some(patches) = self.background {
            out.push(RenderCommand::NinePatch {
                patches,
                dest,
                tint: self.element.color,
                clip: Some(parent),
            });
        }

        for child in &self.children {
            if child.element().visible {
                child.draw(dest, viewport, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Bounds;
    use crate::widget::Icon;
    use crux_assets::RegionRect;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    fn child(id: u64, width: i32, height: i32) -> UiNode {
        UiNode::Icon(Icon::new(WidgetId(id), RegionRect::new(0, 0, width as u32, height as u32)))
    }

    fn stack_with(grow: GrowDirection, sizes: &[(i32, i32)]) -> Stack {
        let mut stack = Stack::new(WidgetId(100), None);
        stack.grow = grow;
        stack.padding = (10, 10);
        stack.item_spacing = 5;
        for (i, &(w, h)) in sizes.iter().enumerate() {
            stack.add_child(child(i as u64, w, h));
        }
        stack
    }

    #[test]
    fn test_down_offsets_match_prefix_sums() {
        let mut stack = stack_with(GrowDirection::Down, &[(30, 20), (30, 40), (30, 10)]);
        stack.layout();

        let ys: Vec<_> = stack
            .children()
            .iter()
            .map(|c| c.element().bounds.y)
            .collect();
        // p, p + e1 + s, p + e1 + e2 + 2s
        assert_eq!(ys, [10, 35, 80]);
        // p + sum(e) + (n-1)*s + p
        assert_eq!(stack.element.bounds.height, 10 + 70 + 10 + 10);
    }

    #[test]
    fn test_auto_size_fits_widest_child() {
        let mut stack = stack_with(GrowDirection::Down, &[(30, 20), (55, 20)]);
        stack.layout();

        assert_eq!(stack.element.bounds.width, 55 + 20);
        // Children sit at the cross-axis padding.
        assert_eq!(stack.children()[0].element().bounds.x, 10);
    }

    #[test]
    fn test_up_growth_is_negative() {
        let mut stack = stack_with(GrowDirection::Up, &[(30, 20), (30, 40)]);
        stack.layout();

        let ys: Vec<_> = stack
            .children()
            .iter()
            .map(|c| c.element().bounds.y)
            .collect();
        assert_eq!(ys, [-10, -35]);
        assert_eq!(stack.element.bounds.height, -(10 + 60 + 5 + 10));
    }

    #[test]
    fn test_right_growth_advances_by_width() {
        let mut stack = stack_with(GrowDirection::Right, &[(30, 20), (50, 20)]);
        stack.layout();

        let xs: Vec<_> = stack
            .children()
            .iter()
            .map(|c| c.element().bounds.x)
            .collect();
        assert_eq!(xs, [10, 45]);
        assert_eq!(stack.element.bounds.width, 10 + 80 + 5 + 10);
    }

    #[test]
    fn test_empty_stack_extent_is_signed_padding() {
        let mut stack = stack_with(GrowDirection::Down, &[]);
        stack.layout();
        assert_eq!(stack.element.bounds.height, 10);

        let mut stack = stack_with(GrowDirection::Up, &[]);
        stack.layout();
        assert_eq!(stack.element.bounds.height, -10);
    }

    #[test]
    fn test_up_stack_children_resolve_inside_it() {
        let mut stack = stack_with(GrowDirection::Up, &[(30, 20)]);
        stack.element.bounds = Bounds::new(
            100,
            500,
            stack.element.bounds.width,
            stack.element.bounds.height,
        );
        stack.layout();

        let abs = crate::layout::resolve_bounds(stack.element.bounds, VIEWPORT, VIEWPORT);
        let child_abs = crate::layout::resolve_bounds(
            stack.children()[0].element().bounds,
            abs,
            VIEWPORT,
        );

        // First child's bottom edge sits one padding above the stack's bottom.
        assert_eq!(child_abs.bottom(), abs.bottom() - 10.0);
        assert!(child_abs.y >= abs.y);
    }
}
