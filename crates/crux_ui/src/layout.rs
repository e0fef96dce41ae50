//! Layout primitives and coordinate resolution.
//!
//! The resolution routine is the contract everything else leans on: pure,
//! called on demand, and fatal on precondition violations. A widget whose
//! bounds cannot be placed is a layout bug, not a runtime condition.

/// A rectangle in absolute screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if two rectangles intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::new(x, y, right - x, bottom - y))
    }
}

/// Signed local bounds of a UI element, in pixels.
///
/// Negative `x`/`y` measure from the parent's far edge; negative
/// `width`/`height` grow left/up from the anchor point. Both conventions
/// compose: a stack growing `Up` has negative height and can still be
/// bottom-anchored with negative `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    /// Pixels from the left edge; negative anchors to the right instead.
    pub x: i32,
    /// Pixels from the top edge; negative anchors to the bottom instead.
    pub y: i32,
    /// Width; negative grows left from `x`.
    pub width: i32,
    /// Height; negative grows up from `y`.
    pub height: i32,
}

impl Bounds {
    /// Creates new signed bounds.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// One of nine compass reference points used to place content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Top-left corner.
    #[default]
    TopLeft,
    /// Top edge, horizontally centered.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Left edge, vertically centered.
    CenterLeft,
    /// Dead center.
    Center,
    /// Right edge, vertically centered.
    CenterRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge, horizontally centered.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

impl Anchor {
    /// True for the left column (TopLeft, CenterLeft, BottomLeft).
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::CenterLeft | Self::BottomLeft)
    }

    /// True for the center column (TopCenter, Center, BottomCenter).
    #[must_use]
    pub const fn is_center_x(self) -> bool {
        matches!(self, Self::TopCenter | Self::Center | Self::BottomCenter)
    }

    /// True for the top row (TopLeft, TopCenter, TopRight).
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }

    /// True for the middle row (CenterLeft, Center, CenterRight).
    #[must_use]
    pub const fn is_center_y(self) -> bool {
        matches!(self, Self::CenterLeft | Self::Center | Self::CenterRight)
    }
}

/// Resolves signed local bounds into absolute screen bounds.
///
/// Pure and uncached: callers invoke it whenever they need current
/// absolute bounds, so resolution always reflects the latest layout pass.
///
/// 1. Negative width/height flip their origin so sizes become positive.
/// 2. Negative x/y place the element's far edge relative to the parent's
///    far edge; non-negative offsets add to the parent's near edge.
/// 3. The resolved origin must land inside `viewport`.
///
/// # Panics
///
/// Panics on the two precondition violations: a negative position combined
/// with a negative size on the same axis (unresolvable), and a resolved
/// origin outside the viewport. Both indicate a layout bug upstream.
#[must_use]
pub fn resolve_bounds(local: Bounds, parent: Rect, viewport: Rect) -> Rect {
    assert!(
        !(local.x < 0 && local.width < 0) && !(local.y < 0 && local.height < 0),
        "unresolvable bounds: negative position with negative size ({local:?})"
    );

    let mut x = local.x;
    let mut y = local.y;
    let mut width = local.width;
    let mut height = local.height;

    // flip negative sizes, ie. growing left/up
    if width < 0 {
        x += width;
        width = -width;
    }
    if height < 0 {
        y += height;
        height = -height;
    }

    // negative offsets measure from the far edge
    let abs_x = if x < 0 {
        parent.right() + (x - width) as f32
    } else {
        x as f32 + parent.x
    };
    let abs_y = if y < 0 {
        parent.bottom() + (y - height) as f32
    } else {
        y as f32 + parent.y
    };

    assert!(
        abs_x >= viewport.x
            && abs_x < viewport.right()
            && abs_y >= viewport.y
            && abs_y < viewport.bottom(),
        "resolved bounds ({abs_x}, {abs_y}) outside viewport {viewport:?}"
    );

    Rect::new(abs_x, abs_y, width as f32, height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(50.0, 30.0));
        assert!(!rect.contains(5.0, 30.0));
        assert!(!rect.contains(50.0, 80.0));
    }

    #[test]
    fn test_positive_bounds_translate_by_parent() {
        let parent = Rect::new(100.0, 200.0, 400.0, 300.0);
        let resolved = resolve_bounds(Bounds::new(10, 20, 50, 40), parent, VIEWPORT);

        assert_eq!(resolved, Rect::new(110.0, 220.0, 50.0, 40.0));
    }

    #[test]
    fn test_no_flip_resolution_is_identity_modulo_translation() {
        let parent = Rect::new(37.0, 91.0, 800.0, 600.0);
        let local = Bounds::new(123, 45, 60, 30);
        let resolved = resolve_bounds(local, parent, VIEWPORT);

        assert_eq!(resolved.x - parent.x, local.x as f32);
        assert_eq!(resolved.y - parent.y, local.y as f32);
    }

    #[test]
    fn test_negative_offset_measures_from_far_edge() {
        let resolved = resolve_bounds(Bounds::new(-70, -70, 60, 40), VIEWPORT, VIEWPORT);

        // Right edge sits 70px in from the viewport's right edge.
        assert_eq!(resolved.right(), 1920.0 - 70.0);
        assert_eq!(resolved.bottom(), 1080.0 - 70.0);
    }

    #[test]
    fn test_negative_size_flips_origin() {
        let resolved = resolve_bounds(Bounds::new(500, 400, -100, -50), VIEWPORT, VIEWPORT);

        assert_eq!(resolved, Rect::new(400.0, 350.0, 100.0, 50.0));
    }

    #[test]
    #[should_panic(expected = "unresolvable")]
    fn test_negative_position_and_size_panics() {
        let _ = resolve_bounds(Bounds::new(-10, 0, -20, 10), VIEWPORT, VIEWPORT);
    }

    #[test]
    #[should_panic(expected = "outside viewport")]
    fn test_escaping_viewport_panics() {
        let _ = resolve_bounds(Bounds::new(5000, 0, 10, 10), VIEWPORT, VIEWPORT);
    }
}
