//! World camera: pan, zoom, and the screen/world mapping.
//!
//! Zoom is driven through a normalized `zoom_value` in `[0, 1]` that
//! maps into the actual zoom factor exponentially, so each wheel notch
//! feels like the same relative step whether zoomed far out or far in.

use crux_shared::{eerp, Vec2, PIXEL_BOUNDS};
use crux_ui::{InputState, Key, MouseButton, Rect};

use crate::config::CameraConfig;

/// Squared pointer travel (in screen pixels) before a right/middle
/// press turns into a camera drag instead of a click.
const DRAG_THRESHOLD_SQ: f32 = 25.0;

/// Orthographic world camera.
///
/// `position` is the top-left corner of the view in world pixels.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Top-left of the view in world pixels.
    pub position: Vec2,
    zoom_value: f32,
    config: CameraConfig,
    viewport: Vec2,
    drag_anchor: Option<Vec2>,
    dragging: bool,
}

impl Camera {
    /// Creates a camera centered on the world origin at half zoom.
    #[must_use]
    pub fn new(config: CameraConfig, viewport: Vec2) -> Self {
        Self {
            position: Vec2::new(-viewport.x / 2.0, -viewport.y / 2.0),
            zoom_value: 0.5,
            config,
            viewport,
            drag_anchor: None,
            dragging: false,
        }
    }

    /// Current zoom factor, exponentially interpolated between the
    /// configured minimum and maximum.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        eerp(self.config.min_zoom, self.config.max_zoom, self.zoom_value)
    }

    /// Normalized zoom value in `[0, 1]`.
    #[must_use]
    pub fn zoom_value(&self) -> f32 {
        self.zoom_value
    }

    /// The world-space rectangle currently visible.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        let zoom = self.zoom();
        Rect::new(
            self.position.x,
            self.position.y,
            self.viewport.x / zoom,
            self.viewport.y / zoom,
        )
    }

    /// Maps a screen-pixel point to world pixels.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.position + screen / self.zoom()
    }

    /// Maps a world-pixel point to screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom()
    }

    /// Moves the camera by a world-space delta.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position = self.position + delta;
    }

    /// Returns true while a pointer drag is panning the camera.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Applies one frame of camera input: wheel and Q/E zoom, WASD and
    /// arrow panning (Shift doubles the speed), right/middle drag
    /// panning, then clamps the view to the world bounds.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        let scroll = input.scroll_delta();
        if scroll > 0.0 {
            self.adjust_zoom(-self.config.zoom_speed);
        } else if scroll < 0.0 {
            self.adjust_zoom(self.config.zoom_speed);
        }

        if input.was_pressed(MouseButton::Right) || input.was_pressed(MouseButton::Middle) {
            let (x, y) = input.mouse_pos();
            self.drag_anchor = Some(Vec2::new(x, y));
        }
        if input.was_released(MouseButton::Right) || input.was_released(MouseButton::Middle) {
            self.drag_anchor = None;
            self.dragging = false;
        }

        if let Some(anchor) = self.drag_anchor {
            let (x, y) = input.mouse_pos();
            if (Vec2::new(x, y) - anchor).length_squared() > DRAG_THRESHOLD_SQ {
                self.dragging = true;
            }
        }

        if self.dragging {
            // The world follows the pointer, so the camera moves the
            // opposite way, scaled into world units.
            let (dx, dy) = input.mouse_delta();
            self.move_by(Vec2::new(-dx, -dy) / self.zoom());
        }

        if input.is_key_down(Key::Q) {
            self.adjust_zoom(-self.config.keyboard_zoom_speed * dt);
        }
        if input.is_key_down(Key::E) {
            self.adjust_zoom(self.config.keyboard_zoom_speed * dt);
        }

        let mut pan_speed = self.config.scroll_speed;
        if input.is_key_down(Key::Shift) {
            pan_speed *= 2.0;
        }

        if input.is_key_down(Key::A) || input.is_key_down(Key::Left) {
            self.move_by(Vec2::new(-pan_speed * dt, 0.0));
        }
        if input.is_key_down(Key::D) || input.is_key_down(Key::Right) {
            self.move_by(Vec2::new(pan_speed * dt, 0.0));
        }
        if input.is_key_down(Key::W) || input.is_key_down(Key::Up) {
            self.move_by(Vec2::new(0.0, -pan_speed * dt));
        }
        if input.is_key_down(Key::S) || input.is_key_down(Key::Down) {
            self.move_by(Vec2::new(0.0, pan_speed * dt));
        }

        self.clamp_to_bounds();
    }

    /// Pushes the camera back so the view never leaves the world's
    /// pixel bounds.
    fn clamp_to_bounds(&mut self) {
        let left = PIXEL_BOUNDS.0 as f32;
        let top = PIXEL_BOUNDS.1 as f32;
        let right = left + PIXEL_BOUNDS.2 as f32;
        let bottom = top + PIXEL_BOUNDS.3 as f32;

        let view = self.view_rect();
        if view.x < left {
            self.position.x -= view.x - left;
        } else if view.right() > right {
            self.position.x -= view.right() - right;
        }
        if view.y < top {
            self.position.y -= view.y - top;
        } else if view.bottom() > bottom {
            self.position.y -= view.bottom() - bottom;
        }
    }

    fn adjust_zoom(&mut self, delta: f32) {
        self.zoom_value = (self.zoom_value + delta).clamp(0.0, 1.0);
    }
}
