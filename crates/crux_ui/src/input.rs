//! Input state for widget interaction.
//!
//! The host windowing layer polls the real devices and pushes one
//! snapshot per frame; edge queries (`was_pressed`, `was_released`)
//! compare the current snapshot against the previous one.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

impl MouseButton {
    const fn mask(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Middle => 4,
        }
    }
}

/// Keyboard key (the subset the game binds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Shift (either side).
    Shift,
    /// W - pan up.
    W,
    /// A - pan left.
    A,
    /// S - pan down.
    S,
    /// D - pan right.
    D,
    /// Q - zoom out.
    Q,
    /// E - zoom in.
    E,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

/// One frame's raw mouse state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseSnapshot {
    /// Pointer X in screen pixels.
    pub x: f32,
    /// Pointer Y in screen pixels.
    pub y: f32,
    /// Held button bits.
    pub buttons: u8,
    /// Accumulated scroll wheel value.
    pub scroll: f32,
}

/// Input state for the current frame: current + previous snapshots.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    current: MouseSnapshot,
    previous: MouseSnapshot,
    keys_down: Vec<Key>,
    prev_keys_down: Vec<Key>,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame: the current snapshot becomes the previous one.
    pub fn begin_frame(&mut self, mouse: MouseSnapshot, keys: &[Key]) {
        self.previous = self.current;
        self.current = mouse;
        std::mem::swap(&mut self.keys_down, &mut self.prev_keys_down);
        self.keys_down.clear();
        self.keys_down.extend_from_slice(keys);
    }

    /// Marks a mouse button as held in the current snapshot.
    ///
    /// Convenience for hosts (and tests) that feed buttons one at a time.
    pub fn press(&mut self, button: MouseButton) {
        self.current.buttons |= button.mask();
    }

    /// Clears a mouse button in the current snapshot.
    pub fn release(&mut self, button: MouseButton) {
        self.current.buttons &= !button.mask();
    }

    /// Current pointer position in screen pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        (self.current.x, self.current.y)
    }

    /// Pointer movement since last frame.
    #[must_use]
    pub fn mouse_delta(&self) -> (f32, f32) {
        (
            self.current.x - self.previous.x,
            self.current.y - self.previous.y,
        )
    }

    /// Scroll wheel movement since last frame.
    #[must_use]
    pub fn scroll_delta(&self) -> f32 {
        self.current.scroll - self.previous.scroll
    }

    /// Returns true if the button is currently held.
    #[must_use]
    pub fn is_down(&self, button: MouseButton) -> bool {
        (self.current.buttons & button.mask()) != 0
    }

    /// Returns true if the button went down this frame.
    #[must_use]
    pub fn was_pressed(&self, button: MouseButton) -> bool {
        (self.current.buttons & button.mask()) != 0 && (self.previous.buttons & button.mask()) == 0
    }

    /// Returns true if the button went up this frame.
    #[must_use]
    pub fn was_released(&self, button: MouseButton) -> bool {
        (self.current.buttons & button.mask()) == 0 && (self.previous.buttons & button.mask()) != 0
    }

    /// Returns true if the key is currently held.
    #[must_use]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns true if the key went down this frame.
    #[must_use]
    pub fn was_key_pressed(&self, key: Key) -> bool {
        self.keys_down.contains(&key) && !self.prev_keys_down.contains(&key)
    }
}
