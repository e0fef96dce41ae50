//! Colors and widget tint defaults.

/// RGBA color, components 0-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white (no tint).
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Error red.
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    /// Committed-hold yellow.
    pub const YELLOW: Self = Self::rgba(1.0, 1.0, 0.0, 1.0);
    /// Wall tile tint.
    pub const WHEAT: Self = Self::rgba(0.96, 0.87, 0.70, 1.0);

    /// Default button background.
    pub const BUTTON_NORMAL: Self = Self::gray8(220);
    /// Hovered button background.
    pub const BUTTON_HOVER: Self = Self::gray8(230);
    /// Pressed button background.
    pub const BUTTON_PRESSED: Self = Self::gray8(240);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates an opaque gray from one 8-bit channel value.
    #[must_use]
    pub const fn gray8(v: u8) -> Self {
        let c = v as f32 / 255.0;
        Self::rgba(c, c, c, 1.0)
    }

    /// Creates an opaque color from 8-bit channel values.
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
