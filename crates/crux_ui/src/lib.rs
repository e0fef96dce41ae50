//! # CRUX UI System
//!
//! Anchored retained-mode UI for the wall editor:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI PIPELINE                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  InputState → UiRoot::update → widget layout → responses │
//! │                      UiRoot::draw → RenderCommand stream │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coordinate convention
//!
//! Local bounds are signed: negative `x`/`y` measure from the parent's far
//! edge, negative `width`/`height` grow left/up from the anchor point.
//! [`layout::resolve_bounds`] turns signed local bounds into absolute
//! pixels, on demand, every time - layout always reflects current state.
//!
//! ## Ownership
//!
//! Containers own their children outright: a [`widget::Stack`] owns its
//! list, a [`widget::Button`] owns its single content node. There are no
//! parent back-pointers; the parent's resolved rectangle is passed down
//! during update and draw.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod input;
pub mod layout;
pub mod render;
pub mod root;
pub mod style;
pub mod widget;

pub use input::{InputState, Key, MouseButton, MouseSnapshot};
pub use layout::{resolve_bounds, Anchor, Bounds, Rect};
pub use render::{FontId, RenderCommand, UiVertex};
pub use root::{UiRoot, FONT_LARGE, FONT_SMALL};
pub use style::Color;
pub use widget::{
    Button, FrameResponses, GrowDirection, Icon, Stack, TextBlock, UiElement, UiNode, WidgetId,
};
