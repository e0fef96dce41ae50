//! The routesetting editor.
//!
//! One button in the corner toggles between viewing and editing. While
//! editing, a palette of hold buttons sits above it; clicking one picks
//! the hold up, and a left release over a slot bolts it on. The drag
//! preview snaps to the nearest slot, or shows an error glyph when the
//! pointer is off the wall.

use crux_assets::RegionRect;
use crux_shared::Vec2;
use crux_ui::{Bounds, Color, InputState, MouseButton, RenderCommand, UiNode, WidgetId};
use crux_wall::{HoldState, HoldTypeId, SlotId};

use crate::context::GameContext;

/// Whether the editor surface is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Palette hidden, world live.
    Viewing,
    /// Palette shown, world paused.
    Editing,
}

/// A hold picked up from the palette and not yet placed.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// The hold being carried.
    pub hold: HoldTypeId,
    /// Slot the preview is snapped to, if the pointer is over the wall.
    pub hovered: Option<SlotId>,
    /// Pointer position in screen pixels.
    pub pointer: Vec2,
    /// Set on the frame the drag starts so the click that started it
    /// cannot also commit it.
    ignore_release: bool,
}

/// Editor controller: the edit toggle, the hold palette, and the
/// drag-to-place flow.
#[derive(Debug)]
pub struct EditMode {
    state: EditState,
    drag: Option<DragState>,
    edit_button: WidgetId,
    palette: WidgetId,
    palette_buttons: Vec<(WidgetId, HoldTypeId)>,
    error_region: RegionRect,
}

impl EditMode {
    /// Builds the editor UI into `ui` and wires it to the hold types in
    /// `hold_types`.
    pub fn new(context: &mut GameContext, error_region: RegionRect) -> Self {
        let ui = &mut context.ui;

        let mut edit = ui.text_button("Edit", Color::BLACK);
        edit.element.bounds = Bounds::new(-70, -70, 80, 40);
        edit.auto_size = false;
        let edit_button = ui.add_root_element(UiNode::Button(edit));

        // The palette sits one gap above the edit button and grows
        // upward as holds are added.
        let palette_y = ui.absolute_y(-70) - 20 - 40;
        let mut stack = ui.stack(true);
        stack.element.bounds = Bounds::new(-70, palette_y, 150, 0);
        stack.element.color = Color::gray8(220);
        stack.element.visible = false;
        stack.grow = crux_ui::GrowDirection::Up;
        stack.padding = (20, 20);
        stack.item_spacing = 20;

        let mut palette_buttons = Vec::new();
        for id in context.hold_types.ids_by_name_desc() {
            let Some(hold) = context.hold_types.get(id) else {
                continue;
            };
            let button = ui.text_button(&hold.label(), Color::BLACK);
            palette_buttons.push((button.element.id, id));
            stack.add_child(UiNode::Button(button));
        }
        let palette = ui.add_root_element(UiNode::Stack(stack));

        Self {
            state: EditState::Viewing,
            drag: None,
            edit_button,
            palette,
            palette_buttons,
            error_region,
        }
    }

    /// Current editor state.
    #[must_use]
    pub fn state(&self) -> EditState {
        self.state
    }

    /// The in-flight drag, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Id of the edit toggle button.
    #[must_use]
    pub fn edit_button(&self) -> WidgetId {
        self.edit_button
    }

    /// Id of the palette stack.
    #[must_use]
    pub fn palette(&self) -> WidgetId {
        self.palette
    }

    /// Palette buttons paired with the hold type they place.
    #[must_use]
    pub fn palette_buttons(&self) -> &[(WidgetId, HoldTypeId)] {
        &self.palette_buttons
    }

    /// Runs one editor frame. Must run after `ui.update` so click
    /// responses are fresh.
    pub fn update(&mut self, context: &mut GameContext, input: &InputState) {
        if context.ui.was_clicked(self.edit_button) {
            self.toggle(context);
        }

        if self.state == EditState::Editing {
            for (widget, hold) in &self.palette_buttons {
                if context.ui.was_clicked(*widget) {
                    let (x, y) = input.mouse_pos();
                    self.drag = Some(DragState {
                        hold: *hold,
                        hovered: None,
                        pointer: Vec2::new(x, y),
                        ignore_release: true,
                    });
                    tracing::debug!(hold = hold.0, "picked up hold");
                }
            }
        }

        let mut finished = false;
        if let Some(drag) = self.drag.as_mut() {
            if drag.ignore_release {
                // The release that clicked the palette button lands this
                // frame; swallow it.
                drag.ignore_release = false;
            } else {
                let (x, y) = input.mouse_pos();
                drag.pointer = Vec2::new(x, y);
                let world = context.camera.screen_to_world(drag.pointer);
                drag.hovered = context.wall.snap(world);

                if input.was_released(MouseButton::Left) {
                    if let Some(slot) = drag.hovered {
                        let state = HoldState::Occupied {
                            hold: drag.hold,
                            tint: Color::YELLOW,
                        };
                        if context.wall.set_slot_state(slot, state).is_some() {
                            tracing::info!(slot = slot.0, hold = drag.hold.0, "placed hold");
                        }
                        finished = true;
                    }
                } else if input.was_released(MouseButton::Right) {
                    finished = true;
                }
            }
        }
        if finished {
            self.drag = None;
        }
    }

    fn toggle(&mut self, context: &mut GameContext) {
        match self.state {
            EditState::Viewing => {
                self.state = EditState::Editing;
                context.paused = true;
                context.ui.set_button_text(self.edit_button, "Hide");
                context.ui.set_visible(self.palette, true);
            }
            EditState::Editing => {
                self.state = EditState::Viewing;
                context.paused = false;
                context.ui.set_button_text(self.edit_button, "Edit");
                context.ui.set_visible(self.palette, false);
                self.drag = None;
            }
        }
        tracing::info!(state = ?self.state, "edit mode toggled");
    }

    /// Emits the drag preview. Snapped previews are world-space (they
    /// belong under the camera transform); the error glyph follows the
    /// raw pointer in screen space.
    pub fn draw(
        &self,
        context: &GameContext,
        world_out: &mut Vec<RenderCommand>,
        screen_out: &mut Vec<RenderCommand>,
    ) {
        let Some(drag) = &self.drag else {
            return;
        };

        match drag.hovered {
            Some(slot_id) => {
                let (Some(slot), Some(hold)) = (
                    context.wall.slot(slot_id),
                    context.hold_types.get(drag.hold),
                ) else {
                    return;
                };
                let world = context.wall.wall_to_world(slot.position);
                world_out.push(RenderCommand::Sprite {
                    region: hold.region,
                    x: world.x - hold.region.width as f32 / 2.0,
                    y: world.y - hold.region.height as f32 / 2.0,
                    tint: Color::YELLOW,
                    clip: None,
                });
            }
            None => {
                screen_out.push(RenderCommand::Sprite {
                    region: self.error_region,
                    x: drag.pointer.x - self.error_region.width as f32 / 2.0,
                    y: drag.pointer.y - self.error_region.height as f32 / 2.0,
                    tint: Color::RED,
                    clip: None,
                });
            }
        }
    }
}
