//! Root of the UI tree.
//!
//! Owns the top-level widgets, hands out widget ids, and routes the
//! per-frame update/draw passes. Click notification is polled: after
//! `update`, ask [`UiRoot::was_clicked`] for any id you care about.

use std::rc::Rc;

use crux_assets::{FontMetrics, NinePatchRegions, RegionRect};

use crate::input::InputState;
use crate::layout::Rect;
use crate::render::{FontId, RenderCommand};
use crate::style::Color;
use crate::widget::{Button, FrameResponses, Icon, Stack, TextBlock, UiNode, WidgetId};

/// Font handle for the small (HUD) font.
pub const FONT_SMALL: FontId = FontId(0);
/// Font handle for the large (button label) font.
pub const FONT_LARGE: FontId = FontId(1);

/// Owns top-level UI elements and the shared UI resources.
pub struct UiRoot {
    viewport: Rect,
    button_bg: NinePatchRegions,
    font_small: Rc<FontMetrics>,
    font_large: Rc<FontMetrics>,
    elements: Vec<UiNode>,
    responses: FrameResponses,
    next_id: u64,
}

impl UiRoot {
    /// Creates a root for the given viewport and shared resources.
    #[must_use]
    pub fn new(
        viewport: Rect,
        button_bg: NinePatchRegions,
        font_small: Rc<FontMetrics>,
        font_large: Rc<FontMetrics>,
    ) -> Self {
        Self {
            viewport,
            button_bg,
            font_small,
            font_large,
            elements: Vec::new(),
            responses: FrameResponses::new(),
            next_id: 1,
        }
    }

    /// The root viewport rectangle.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Metrics of the small font.
    #[must_use]
    pub fn font_small(&self) -> &Rc<FontMetrics> {
        &self.font_small
    }

    /// Metrics of the large font.
    #[must_use]
    pub fn font_large(&self) -> &Rc<FontMetrics> {
        &self.font_large
    }

    /// Generates a fresh widget id.
    pub fn next_id(&mut self) -> WidgetId {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a top-level element. Returns its id.
    pub fn add_root_element(&mut self, node: UiNode) -> WidgetId {
        let id = node.element().id;
        self.elements.push(node);
        id
    }

    /// Removes a top-level element by id.
    pub fn remove_root_element(&mut self, id: WidgetId) -> Option<UiNode> {
        let index = self
            .elements
            .iter()
            .position(|node| node.element().id == id)?;
        Some(self.elements.remove(index))
    }

    /// Finds a widget anywhere in the tree.
    pub fn find_mut(&mut self, id: WidgetId) -> Option<&mut UiNode> {
        self.elements.iter_mut().find_map(|node| node.find_mut(id))
    }

    /// Builds a button labeled with large-font text.
    #[must_use]
    pub fn text_button(&mut self, text: &str, color: Color) -> Button {
        let text_id = self.next_id();
        let mut block = TextBlock::new(text_id, FONT_LARGE, Rc::clone(&self.font_large), text);
        block.element.color = color;

        let button_id = self.next_id();
        Button::new(button_id, self.button_bg, UiNode::Text(block))
    }

    /// Builds a button around an icon region.
    #[must_use]
    pub fn icon_button(&mut self, region: RegionRect, color: Color) -> Button {
        let icon_id = self.next_id();
        let mut icon = Icon::new(icon_id, region);
        icon.element.color = color;

        let button_id = self.next_id();
        Button::new(button_id, self.button_bg, UiNode::Icon(icon))
    }

    /// Builds an empty stack, optionally with the shared background.
    #[must_use]
    pub fn stack(&mut self, with_background: bool) -> Stack {
        let id = self.next_id();
        Stack::new(id, with_background.then_some(self.button_bg))
    }

    /// Relabels a button anywhere in the tree.
    ///
    /// # Panics
    ///
    /// Panics if the id does not name a button with text content;
    /// both are programming errors.
    pub fn set_button_text(&mut self, id: WidgetId, text: &str) {
        match self.find_mut(id) {
            Some(UiNode::Button(button)) => button.set_text(text),
            other => panic!("set_button_text on {other:?}"),
        }
    }

    /// Shows or hides a widget anywhere in the tree.
    ///
    /// # Panics
    ///
    /// Panics if the id is not in the tree.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        match self.find_mut(id) {
            Some(node) => node.element_mut().visible = visible,
            None => panic!("set_visible on unknown widget {id:?}"),
        }
    }

    /// Updates all visible top-level elements and collects responses.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.responses.clear();
        for node in &mut self.elements {
            if node.element().visible {
                node.update(self.viewport, self.viewport, input, dt, &mut self.responses);
            }
        }
    }

    /// Returns true if the widget was clicked during the last update.
    #[must_use]
    pub fn was_clicked(&self, id: WidgetId) -> bool {
        self.responses.was_clicked(id)
    }

    /// All widgets clicked during the last update.
    #[must_use]
    pub fn clicked(&self) -> &[WidgetId] {
        self.responses.clicked()
    }

    /// Emits render commands for all visible top-level elements.
    pub fn draw(&self, out: &mut Vec<RenderCommand>) {
        for node in &self.elements {
            if node.element().visible {
                node.draw(self.viewport, self.viewport, out);
            }
        }
    }

    /// Converts a root-level x offset to absolute pixels (negative
    /// offsets measure from the right viewport edge).
    #[must_use]
    pub fn absolute_x(&self, x: i32) -> i32 {
        if x < 0 {
            self.viewport.width as i32 + x
        } else {
            x
        }
    }

    /// Converts a root-level y offset to absolute pixels (negative
    /// offsets measure from the bottom viewport edge).
    #[must_use]
    pub fn absolute_y(&self, y: i32) -> i32 {
        if y < 0 {
            self.viewport.height as i32 + y
        } else {
            y
        }
    }
}

impl std::fmt::Debug for UiRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiRoot")
            .field("viewport", &self.viewport)
            .field("elements", &self.elements.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseSnapshot;

    fn test_root() -> UiRoot {
        let fnt = "common lineHeight=16\n\
                   char id=32 xadvance=4\n\
                   char id=69 xadvance=8\n\
                   char id=100 xadvance=8\n\
                   char id=105 xadvance=4\n\
                   char id=116 xadvance=6\n";
        let metrics = Rc::new(FontMetrics::from_bmfont(fnt).unwrap());
        let bg = NinePatchRegions::from_region(RegionRect::new(0, 0, 52, 52), 16, 2).unwrap();
        UiRoot::new(
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            bg,
            Rc::clone(&metrics),
            metrics,
        )
    }

    fn press_at(root: &mut UiRoot, x: f32, y: f32, buttons: u8, input: &mut InputState) {
        input.begin_frame(
            MouseSnapshot {
                x,
                y,
                buttons,
                scroll: 0.0,
            },
            &[],
        );
        root.update(input, 1.0 / 60.0);
    }

    #[test]
    fn test_click_routed_through_root() {
        let mut root = test_root();
        let mut button = root.text_button("Edit", Color::BLACK);
        button.element.bounds.x = 100;
        button.element.bounds.y = 100;
        let id = root.add_root_element(UiNode::Button(button));

        let mut input = InputState::new();
        press_at(&mut root, 110.0, 110.0, 1, &mut input);
        assert!(!root.was_clicked(id));
        press_at(&mut root, 110.0, 110.0, 0, &mut input);
        assert!(root.was_clicked(id));

        // Responses reset on the next update.
        press_at(&mut root, 110.0, 110.0, 0, &mut input);
        assert!(!root.was_clicked(id));
    }

    #[test]
    fn test_hidden_elements_do_not_update() {
        let mut root = test_root();
        let mut button = root.text_button("Edit", Color::BLACK);
        button.element.bounds.x = 100;
        button.element.bounds.y = 100;
        let id = root.add_root_element(UiNode::Button(button));
        root.set_visible(id, false);

        let mut input = InputState::new();
        press_at(&mut root, 110.0, 110.0, 1, &mut input);
        press_at(&mut root, 110.0, 110.0, 0, &mut input);
        assert!(!root.was_clicked(id));

        let mut out = Vec::new();
        root.draw(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_absolute_offsets() {
        let root = test_root();

        assert_eq!(root.absolute_x(-70), 1850);
        assert_eq!(root.absolute_y(200), 200);
    }

    #[test]
    fn test_set_button_text_relabels() {
        let mut root = test_root();
        let button = root.text_button("Edit", Color::BLACK);
        let id = root.add_root_element(UiNode::Button(button));

        root.set_button_text(id, "Hide");
        let Some(UiNode::Button(button)) = root.find_mut(id) else {
            panic!("button vanished");
        };
        let UiNode::Text(block) = button.content() else {
            panic!("content is not text");
        };
        assert_eq!(block.text(), "Hide");
    }
}
