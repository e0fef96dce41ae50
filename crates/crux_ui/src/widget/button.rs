//! Button widget.
//!
//! Wraps exactly one content node in a nine-patch background. Three
//! mutually exclusive visual states per frame (idle, hovered, pressed)
//! plus a polled click flag with exactly-once semantics: a click fires on
//! release, only if the press also began while hovered.

use crux_assets::{NinePatchRegions, RegionRect};

use super::core::{FrameResponses, UiElement, WidgetId};
use super::UiNode;
use crate::input::{InputState, MouseButton};
use crate::layout::Rect;
use crate::render::RenderCommand;
use crate::style::Color;

/// A clickable nine-patch button owning one content node.
#[derive(Debug)]
pub struct Button {
    /// Common widget state.
    pub element: UiElement,
    content: Box<UiNode>,
    background: NinePatchRegions,
    /// Horizontal and vertical padding between background and content.
    pub padding: (i32, i32),
    /// Size to content plus padding each frame. Disable for fixed size.
    pub auto_size: bool,
    /// Background tint when idle.
    pub normal_tint: Color,
    /// Background tint while hovered.
    pub hover_tint: Color,
    /// Background tint while pressed.
    pub pressed_tint: Color,
    hovered: bool,
    pressed: bool,
    clicked: bool,
    /// Set when a press begins inside bounds; a release only counts as a
    /// click while this is set.
    armed: bool,
}

impl Button {
    /// Creates a button around a content node.
    #[must_use]
    pub fn new(id: WidgetId, background: NinePatchRegions, content: UiNode) -> Self {
        Self {
            element: UiElement::new(id),
            content: Box::new(content),
            background,
            padding: (10, 5),
            auto_size: true,
            normal_tint: Color::BUTTON_NORMAL,
            hover_tint: Color::BUTTON_HOVER,
            pressed_tint: Color::BUTTON_PRESSED,
            hovered: false,
            pressed: false,
            clicked: false,
            armed: false,
        }
    }

    /// The content node.
    #[must_use]
    pub fn content(&self) -> &UiNode {
        &self.content
    }

    /// Mutable access to the content node.
    pub fn content_mut(&mut self) -> &mut UiNode {
        &mut self.content
    }

    /// Replaces the label text.
    ///
    /// # Panics
    ///
    /// Panics if the content node is not a [`super::TextBlock`]; calling
    /// this on an icon button is a programming error.
    pub fn set_text(&mut self, text: &str) {
        match self.content.as_mut() {
            UiNode::Text(block) => block.set_text(text),
            other => panic!("set_text on button whose content is {other:?}"),
        }
    }

    /// Replaces the icon region.
    ///
    /// # Panics
    ///
    /// Panics if the content node is not an [`super::Icon`].
    pub fn set_icon(&mut self, region: RegionRect) {
        match self.content.as_mut() {
            UiNode::Icon(icon) => icon.set_region(region),
            other => panic!("set_icon on button whose content is {other:?}"),
        }
    }

    /// True while the pointer is inside the button's absolute bounds.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// True while hovered, the primary button is held, and the press
    /// began inside bounds.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True only on the frame a full press-release cycle completed inside
    /// bounds.
    #[must_use]
    pub fn was_clicked(&self) -> bool {
        self.clicked
    }

    /// Per-frame update: recompute auto-size and content placement,
    /// resolve bounds, then run the hover/press/click state machine.
    pub fn update(
        &mut self,
        parent: Rect,
        viewport: Rect,
        input: &InputState,
        dt: f32,
        responses: &mut FrameResponses,
    ) {
        self.layout_content();
        let abs = crate::layout::resolve_bounds(self.element.bounds, parent, viewport);

        self.content.update(abs, viewport, input, dt, responses);

        let (mx, my) = input.mouse_pos();
        self.hovered = abs.contains(mx, my);

        // Arm before computing pressed so the press-begin frame already
        // reads as pressed.
        if self.hovered && input.was_pressed(MouseButton::Left) {
            self.armed = true;
        }

        self.pressed = self.hovered && input.is_down(MouseButton::Left) && self.armed;

        self.clicked = false;

        // The release always disarms, whether or not it lands inside.
        if input.was_released(MouseButton::Left) {
            if self.hovered && self.armed {
                self.clicked = true;
                responses.push_clicked(self.element.id);
                tracing::debug!(id = self.element.id.raw(), "button clicked");
            }
            self.armed = false;
        }
    }

    /// Emits the background and content draw commands.
    pub fn draw(&self, parent: Rect, viewport: Rect, out: &mut Vec<RenderCommand>) {
        let tint = if self.pressed {
            self.pressed_tint
        } else if self.hovered {
            self.hover_tint
        } else {
            self.normal_tint
        };

        let dest = crate::layout::resolve_bounds(self.element.bounds, parent, viewport);
        out.push(RenderCommand::NinePatch {
            patches: self.background,
            dest,
            tint,
            clip: Some(parent),
        });

        if self.content.element().visible {
            self.content.draw(dest, viewport, out);
        }
    }

    /// Applies auto-size and positions the content inside the button
    /// according to the button's anchor.
    fn layout_content(&mut self) {
        let content = self.content.element().bounds;

        if self.auto_size {
            self.element.bounds.width = content.width + self.padding.0 * 2;
            self.element.bounds.height = content.height + self.padding.1 * 2;
        }

        let (width, height) = (self.element.bounds.width, self.element.bounds.height);
        let anchor = self.element.anchor;

        let x = if anchor.is_left() {
            self.padding.0
        } else if anchor.is_center_x() {
            width / 2 - content.width / 2
        } else {
            width - (content.width + self.padding.0)
        };

        let y = if anchor.is_top() {
            self.padding.1
        } else if anchor.is_center_y() {
            height / 2 - content.height / 2
        } else {
            height - (content.height + self.padding.1)
        };

        let inner = self.content.element_mut();
        inner.bounds.x = x;
        inner.bounds.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseSnapshot;
    use crate::widget::Icon;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    fn background() -> NinePatchRegions {
        NinePatchRegions::from_region(RegionRect::new(0, 0, 52, 52), 16, 2).unwrap()
    }

    fn icon_button() -> Button {
        let icon = Icon::new(WidgetId(2), RegionRect::new(0, 0, 40, 20));
        let mut button = Button::new(WidgetId(1), background(), UiNode::Icon(icon));
        button.element.bounds.x = 100;
        button.element.bounds.y = 100;
        button
    }

    fn frame(button: &mut Button, input: &mut InputState, x: f32, y: f32, buttons: u8) {
        input.begin_frame(
            MouseSnapshot {
                x,
                y,
                buttons,
                scroll: 0.0,
            },
            &[],
        );
        let mut responses = FrameResponses::new();
        button.update(VIEWPORT, VIEWPORT, input, 1.0 / 60.0, &mut responses);
    }

    #[test]
    fn test_auto_size_wraps_content() {
        let mut button = icon_button();
        let mut input = InputState::new();
        frame(&mut button, &mut input, 0.0, 0.0, 0);

        // 40x20 content with (10, 5) padding.
        assert_eq!(button.element.bounds.width, 60);
        assert_eq!(button.element.bounds.height, 30);
    }

    #[test]
    fn test_click_fires_once_per_cycle() {
        let mut button = icon_button();
        let mut input = InputState::new();

        frame(&mut button, &mut input, 110.0, 110.0, 0);
        assert!(button.is_hovered() && !button.was_clicked());

        frame(&mut button, &mut input, 110.0, 110.0, 1);
        assert!(button.is_pressed() && !button.was_clicked());

        frame(&mut button, &mut input, 110.0, 110.0, 0);
        assert!(button.was_clicked());

        // Nothing further without a new press.
        frame(&mut button, &mut input, 110.0, 110.0, 0);
        assert!(!button.was_clicked());
    }

    #[test]
    fn test_pressed_on_press_begin_frame() {
        let mut button = icon_button();
        let mut input = InputState::new();

        // No hover warm-up: the very first frame presses inside bounds.
        frame(&mut button, &mut input, 110.0, 110.0, 1);
        assert!(button.is_pressed());

        frame(&mut button, &mut input, 110.0, 110.0, 1);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let mut button = icon_button();
        let mut input = InputState::new();

        frame(&mut button, &mut input, 110.0, 110.0, 1);
        frame(&mut button, &mut input, 500.0, 500.0, 1);
        frame(&mut button, &mut input, 500.0, 500.0, 0);
        assert!(!button.was_clicked());

        // A fresh cycle still works after the dud release.
        frame(&mut button, &mut input, 110.0, 110.0, 1);
        frame(&mut button, &mut input, 110.0, 110.0, 0);
        assert!(button.was_clicked());
    }

    #[test]
    fn test_press_outside_then_release_inside_does_not_click() {
        let mut button = icon_button();
        let mut input = InputState::new();

        frame(&mut button, &mut input, 500.0, 500.0, 1);
        frame(&mut button, &mut input, 110.0, 110.0, 1);
        frame(&mut button, &mut input, 110.0, 110.0, 0);

        assert!(!button.was_clicked());
    }
}
