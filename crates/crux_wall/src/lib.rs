//! # CRUX Wall
//!
//! The climbing wall: a fixed tile grid plus a derived lattice of hold
//! slots at sub-tile resolution.
//!
//! ## Coordinate systems
//!
//! - **World**: pixels, Y increasing downward, the wall's left edge at
//!   `x_offset` tiles.
//! - **Wall-local**: tiles, origin at the wall's bottom-left, Y
//!   increasing upward.
//!
//! [`Wall::snap`] maps a world point into wall-local space and answers
//! the nearest-slot query the editor drags against.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod hold;
pub mod wall;

pub use error::WallError;
pub use hold::{HoldState, HoldType, HoldTypeId, HoldTypeSet};
pub use wall::{HoldSlot, SlotId, Wall};
