//! Frame orchestration.
//!
//! The host loop owns the window and the clock; each frame it feeds an
//! input snapshot to [`Game::update`] and then drains two command
//! streams from [`Game::draw`]: one drawn under the camera transform,
//! one drawn in raw screen space.

use crux_assets::AtlasManifest;
use crux_ui::{InputState, Key, RenderCommand, UiRoot};

use crate::config::GameConfig;
use crate::context::{GameContext, GameError};
use crate::edit_mode::EditMode;

/// The whole game: shared context plus its controllers.
#[derive(Debug)]
pub struct Game {
    /// Shared mutable state.
    pub context: GameContext,
    edit: EditMode,
    quit: bool,
}

impl Game {
    /// Assembles the game from configuration and the two atlases.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if a required atlas region is missing or
    /// the configured wall cannot be built.
    pub fn new(
        config: &GameConfig,
        wall_atlas: &AtlasManifest,
        ui_atlas: &AtlasManifest,
        ui: UiRoot,
    ) -> Result<Self, GameError> {
        let error_region = ui_atlas.require("error")?;
        let mut context = GameContext::new(config, wall_atlas, ui)?;
        let edit = EditMode::new(&mut context, error_region);

        Ok(Self {
            context,
            edit,
            quit: false,
        })
    }

    /// The editor controller.
    #[must_use]
    pub fn edit(&self) -> &EditMode {
        &self.edit
    }

    /// True once the player asked to leave.
    #[must_use]
    pub fn wants_quit(&self) -> bool {
        self.quit
    }

    /// Runs one frame of game logic.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        if input.is_key_down(Key::Escape) {
            self.quit = true;
        }

        self.context.camera.update(input, dt);
        self.context.ui.update(input, dt);
        self.edit.update(&mut self.context, input);
    }

    /// Emits this frame's render commands. `world_out` is drawn under
    /// the camera transform, `screen_out` on top in screen space.
    pub fn draw(&self, world_out: &mut Vec<RenderCommand>, screen_out: &mut Vec<RenderCommand>) {
        self.context
            .wall
            .draw(&self.context.hold_types, world_out);
        self.context.ui.draw(screen_out);
        self.edit.draw(&self.context, world_out, screen_out);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crux_assets::{FontMetrics, NinePatchRegions, RegionRect};
    use crux_shared::Vec2;
    use crux_ui::{Color, MouseSnapshot, Rect, UiNode, WidgetId};
    use crux_wall::HoldState;

    use super::*;
    use crate::edit_mode::EditState;

    const WALL_ATLAS: &str = r#"<TextureAtlas imagePath="WallTiles.png">
        <SubTexture name="default" x="0" y="0" width="64" height="64"/>
        <SubTexture name="hole" x="64" y="0" width="8" height="8"/>
        <SubTexture name="jug" x="64" y="8" width="24" height="24"/>
        <SubTexture name="crimp" x="64" y="32" width="16" height="16"/>
        <SubTexture name="sloper" x="64" y="48" width="24" height="16"/>
    </TextureAtlas>"#;

    const UI_ATLAS: &str = r#"<TextureAtlas imagePath="Ui.png">
        <SubTexture name="error" x="0" y="0" width="16" height="16"/>
    </TextureAtlas>"#;

    fn game() -> Game {
        let wall_atlas = AtlasManifest::from_xml(WALL_ATLAS).unwrap();
        let ui_atlas = AtlasManifest::from_xml(UI_ATLAS).unwrap();
        let metrics = Rc::new(FontMetrics::from_bmfont("common lineHeight=16\n").unwrap());
        let bg = NinePatchRegions::from_region(RegionRect::new(0, 0, 52, 52), 16, 2).unwrap();
        let ui = UiRoot::new(
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            bg,
            Rc::clone(&metrics),
            metrics,
        );

        Game::new(&GameConfig::default(), &wall_atlas, &ui_atlas, ui).unwrap()
    }

    fn mouse_frame(game: &mut Game, input: &mut InputState, x: f32, y: f32, buttons: u8) {
        input.begin_frame(
            MouseSnapshot {
                x,
                y,
                buttons,
                scroll: 0.0,
            },
            &[],
        );
        game.update(input, 1.0 / 60.0);
    }

    fn click(game: &mut Game, input: &mut InputState, x: f32, y: f32) {
        mouse_frame(game, input, x, y, 1);
        mouse_frame(game, input, x, y, 0);
    }

    fn root_center(game: &mut Game, id: WidgetId) -> (f32, f32) {
        let viewport = game.context.ui.viewport();
        game.context
            .ui
            .find_mut(id)
            .unwrap()
            .absolute_bounds(viewport, viewport)
            .center()
    }

    /// Center of the `index`-th palette button, in screen pixels.
    /// Only valid after a frame in which the palette was visible.
    fn palette_button_center(game: &mut Game, index: usize) -> (f32, f32) {
        let viewport = game.context.ui.viewport();
        let palette_id = game.edit.palette();
        let (child_id, _) = game.edit.palette_buttons()[index];

        let node = game.context.ui.find_mut(palette_id).unwrap();
        let palette_rect = node.absolute_bounds(viewport, viewport);
        let UiNode::Stack(stack) = &*node else {
            panic!("palette is not a stack");
        };
        let child = stack
            .children()
            .iter()
            .find(|child| child.element().id == child_id)
            .unwrap();
        child.absolute_bounds(palette_rect, viewport).center()
    }

    fn open_editor(game: &mut Game, input: &mut InputState) {
        mouse_frame(game, input, 0.0, 0.0, 0);
        let button = game.edit.edit_button();
        let (x, y) = root_center(game, button);
        click(game, input, x, y);
        // Two more frames: the first lays the now-visible palette out
        // while its buttons still measure zero, the second re-lays it
        // out with real button sizes. Geometry is stable after that.
        mouse_frame(game, input, 0.0, 0.0, 0);
        mouse_frame(game, input, 0.0, 0.0, 0);
    }

    #[test]
    fn test_edit_button_toggles_palette() {
        let mut game = game();
        let mut input = InputState::new();

        open_editor(&mut game, &mut input);
        assert_eq!(game.edit.state(), EditState::Editing);
        assert!(game.context.paused);

        let button = game.edit.edit_button();
        let (x, y) = root_center(&mut game, button);
        click(&mut game, &mut input, x, y);
        assert_eq!(game.edit.state(), EditState::Viewing);
        assert!(!game.context.paused);
    }

    #[test]
    fn test_drag_from_palette_places_hold() {
        let mut game = game();
        let mut input = InputState::new();
        open_editor(&mut game, &mut input);

        let (x, y) = palette_button_center(&mut game, 0);
        let expected_hold = game.edit.palette_buttons()[0].1;
        click(&mut game, &mut input, x, y);

        let drag = game.edit.drag().expect("palette click starts a drag");
        assert_eq!(drag.hold, expected_hold);

        // Release over the middle of the wall commits the hold.
        let target = game.context.camera.world_to_screen(Vec2::new(0.0, -160.0));
        mouse_frame(&mut game, &mut input, target.x, target.y, 1);
        mouse_frame(&mut game, &mut input, target.x, target.y, 0);

        assert!(game.edit.drag().is_none());
        let placed: Vec<_> = game
            .context
            .wall
            .slots()
            .iter()
            .filter(|slot| slot.state.is_occupied())
            .collect();
        assert_eq!(placed.len(), 1);
        assert_eq!(
            placed[0].state,
            HoldState::Occupied {
                hold: expected_hold,
                tint: Color::YELLOW,
            }
        );
    }

    #[test]
    fn test_right_release_cancels_drag() {
        let mut game = game();
        let mut input = InputState::new();
        open_editor(&mut game, &mut input);

        let (x, y) = palette_button_center(&mut game, 0);
        click(&mut game, &mut input, x, y);
        assert!(game.edit.drag().is_some());

        let target = game.context.camera.world_to_screen(Vec2::new(0.0, -160.0));
        mouse_frame(&mut game, &mut input, target.x, target.y, 2);
        mouse_frame(&mut game, &mut input, target.x, target.y, 0);

        assert!(game.edit.drag().is_none());
        assert!(game
            .context
            .wall
            .slots()
            .iter()
            .all(|slot| !slot.state.is_occupied()));
    }

    #[test]
    fn test_starting_click_cannot_commit() {
        let mut game = game();
        let mut input = InputState::new();
        open_editor(&mut game, &mut input);

        // The release that clicked the palette button must not place a
        // hold, even though it is a left release during a drag.
        let (x, y) = palette_button_center(&mut game, 0);
        click(&mut game, &mut input, x, y);

        assert!(game.edit.drag().is_some());
        assert!(game
            .context
            .wall
            .slots()
            .iter()
            .all(|slot| !slot.state.is_occupied()));
    }

    #[test]
    fn test_offwall_drag_draws_error_glyph() {
        let mut game = game();
        let mut input = InputState::new();
        open_editor(&mut game, &mut input);

        let (x, y) = palette_button_center(&mut game, 0);
        click(&mut game, &mut input, x, y);
        // Top-left corner of the screen is far outside the wall.
        mouse_frame(&mut game, &mut input, 10.0, 10.0, 0);

        let mut world_out = Vec::new();
        let mut screen_out = Vec::new();
        game.draw(&mut world_out, &mut screen_out);

        let glyph = screen_out.last().expect("error glyph drawn on top");
        assert!(matches!(
            glyph,
            RenderCommand::Sprite { region, tint, .. }
                if region.width == 16 && *tint == Color::RED
        ));
    }

    #[test]
    fn test_escape_requests_quit() {
        let mut game = game();
        let mut input = InputState::new();

        input.begin_frame(
            MouseSnapshot {
                x: 0.0,
                y: 0.0,
                buttons: 0,
                scroll: 0.0,
            },
            &[Key::Escape],
        );
        game.update(&input, 1.0 / 60.0);

        assert!(game.wants_quit());
    }
}
