//! Common widget state.

use crate::layout::{Anchor, Bounds};
use crate::style::Color;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// State every widget carries: signed local bounds, anchor, tint,
/// visibility. Resolution to absolute pixels happens on demand via
/// [`crate::layout::resolve_bounds`].
#[derive(Debug, Clone)]
pub struct UiElement {
    /// Widget identifier.
    pub id: WidgetId,
    /// Signed local bounds.
    pub bounds: Bounds,
    /// Reference corner for content placement.
    pub anchor: Anchor,
    /// Tint color.
    pub color: Color,
    /// Hidden widgets neither update nor draw.
    pub visible: bool,
}

impl UiElement {
    /// Creates a new element record with default anchor and tint.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            bounds: Bounds::default(),
            anchor: Anchor::TopLeft,
            color: Color::WHITE,
            visible: true,
        }
    }
}

/// Responses collected over one update pass.
///
/// Click notification is polled, not callback-driven: after
/// `UiRoot::update` the caller asks which widgets were clicked this frame.
#[derive(Debug, Default)]
pub struct FrameResponses {
    clicked: Vec<WidgetId>,
}

impl FrameResponses {
    /// Creates an empty response set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a click for this frame.
    pub fn push_clicked(&mut self, id: WidgetId) {
        self.clicked.push(id);
    }

    /// Returns true if the widget was clicked this frame.
    #[must_use]
    pub fn was_clicked(&self, id: WidgetId) -> bool {
        self.clicked.contains(&id)
    }

    /// All widgets clicked this frame, in update order.
    #[must_use]
    pub fn clicked(&self) -> &[WidgetId] {
        &self.clicked
    }

    /// Clears the set for the next frame.
    pub fn clear(&mut self) {
        self.clicked.clear();
    }
}
