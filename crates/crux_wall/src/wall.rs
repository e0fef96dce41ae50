//! The wall itself: tile grid, hold-slot lattice, snapping.

use std::collections::HashMap;

use crux_assets::RegionRect;
use crux_shared::constants::TILE_SIZE;
use crux_shared::Vec2;
use crux_ui::{Color, Rect, RenderCommand};

use crate::error::WallError;
use crate::hold::{HoldState, HoldTypeSet};

/// Index of a slot within a wall's lattice.
///
/// Ids are stable for the lifetime of a lattice; [`Wall::resize`]
/// rebuilds the lattice and invalidates previously held ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub usize);

/// One point of the lattice where a hold may be bolted on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldSlot {
    /// Wall-local position, fixed at lattice generation.
    pub position: Vec2,
    /// What currently occupies the slot.
    pub state: HoldState,
}

/// A climbing wall: a `width x height` tile grid (wall-local units,
/// 1 unit = 1 tile, Y up, origin at the bottom-left) and a masonry
/// lattice of hold slots spaced `separation` units apart.
#[derive(Debug, Clone)]
pub struct Wall {
    width: u32,
    height: u32,
    separation: f32,
    x_offset: i32,
    default_tile: RegionRect,
    hole_region: RegionRect,
    /// Row-major, row 0 at the bottom.
    tiles: Vec<RegionRect>,
    slots: Vec<HoldSlot>,
}

impl Wall {
    /// Builds a wall and generates its slot lattice.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::InvalidDimensions`] if either dimension is
    /// zero, or [`WallError::InvalidSeparation`] if `separation` is not
    /// a positive finite value that fits at least one slot.
    pub fn new(
        width: u32,
        height: u32,
        separation: f32,
        x_offset: i32,
        default_tile: RegionRect,
        hole_region: RegionRect,
    ) -> Result<Self, WallError> {
        Self::validate(width, height, separation)?;

        let tiles = vec![default_tile; (width as usize) * (height as usize)];
        let slots = generate_lattice(width, height, separation);
        tracing::info!(width, height, separation, slots = slots.len(), "built wall");

        Ok(Self {
            width,
            height,
            separation,
            x_offset,
            default_tile,
            hole_region,
            tiles,
            slots,
        })
    }

    fn validate(width: u32, height: u32, separation: f32) -> Result<(), WallError> {
        if width == 0 || height == 0 {
            return Err(WallError::InvalidDimensions { width, height });
        }
        // The first lattice row sits at y = separation and the first slot
        // at x = separation; both must land strictly inside the wall.
        if !separation.is_finite()
            || separation <= 0.0
            || separation >= height as f32
            || separation >= width as f32 - separation
        {
            return Err(WallError::InvalidSeparation(separation));
        }
        Ok(())
    }

    /// Wall width in tiles.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Wall height in tiles.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Hold separation in wall-local units.
    #[must_use]
    pub fn separation(&self) -> f32 {
        self.separation
    }

    /// All slots, indexable by [`SlotId`].
    #[must_use]
    pub fn slots(&self) -> &[HoldSlot] {
        &self.slots
    }

    /// Looks up a slot.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&HoldSlot> {
        self.slots.get(id.0)
    }

    /// Looks up a slot mutably.
    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut HoldSlot> {
        self.slots.get_mut(id.0)
    }

    /// Writes a slot's state, returning the previous state.
    ///
    /// Returns `None` if the id is stale.
    pub fn set_slot_state(&mut self, id: SlotId, state: HoldState) -> Option<HoldState> {
        let slot = self.slots.get_mut(id.0)?;
        let previous = slot.state;
        slot.state = state;
        tracing::debug!(slot = id.0, ?state, "slot state changed");
        Some(previous)
    }

    /// Tile art at `(x, y)`, row 0 at the bottom.
    #[must_use]
    pub fn tile(&self, x: u32, y: u32) -> Option<RegionRect> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[(y * self.width + x) as usize])
    }

    /// Replaces the tile art at `(x, y)`. Out-of-range coordinates are
    /// ignored and return `false`.
    pub fn set_tile(&mut self, x: u32, y: u32, region: RegionRect) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.tiles[(y * self.width + x) as usize] = region;
        true
    }

    /// Maps a world-pixel point into wall-local units.
    #[must_use]
    pub fn world_to_wall(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            world.x / TILE_SIZE as f32 - self.x_offset as f32,
            -world.y / TILE_SIZE as f32,
        )
    }

    /// Maps a wall-local point into world pixels.
    #[must_use]
    pub fn wall_to_world(&self, local: Vec2) -> Vec2 {
        Vec2::new(
            (local.x + self.x_offset as f32) * TILE_SIZE as f32,
            -local.y * TILE_SIZE as f32,
        )
    }

    /// The wall's bounding rectangle in world pixels.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        Rect::new(
            (self.x_offset * TILE_SIZE) as f32,
            -((self.height as i32) * TILE_SIZE) as f32,
            (self.width as i32 * TILE_SIZE) as f32,
            (self.height as i32 * TILE_SIZE) as f32,
        )
    }

    /// Nearest slot to a world-pixel point, or `None` if the point lies
    /// outside the wall rectangle.
    ///
    /// Ties go to the lowest slot id.
    #[must_use]
    pub fn snap(&self, world: Vec2) -> Option<SlotId> {
        let local = self.world_to_wall(world);
        if local.x < 0.0
            || local.x > self.width as f32
            || local.y < 0.0
            || local.y > self.height as f32
        {
            return None;
        }

        let mut best = None;
        let mut best_distance = f32::INFINITY;
        for (index, slot) in self.slots.iter().enumerate() {
            let distance = slot.position.distance_squared(local);
            if distance < best_distance {
                best_distance = distance;
                best = Some(SlotId(index));
            }
        }
        best
    }

    /// Resizes the wall, keeping tile art in the overlapping region and
    /// regenerating the lattice. Occupied slots whose position survives
    /// in the new lattice keep their hold; the rest are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`WallError`] if the new dimensions are invalid for the
    /// current separation.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), WallError> {
        Self::validate(width, height, self.separation)?;

        let mut tiles = vec![self.default_tile; (width as usize) * (height as usize)];
        for y in 0..height.min(self.height) {
            for x in 0..width.min(self.width) {
                tiles[(y * width + x) as usize] = self.tiles[(y * self.width + x) as usize];
            }
        }

        // Slot positions are generated by the same arithmetic every time,
        // so surviving slots match bit-for-bit.
        let occupied: HashMap<(u32, u32), HoldState> = self
            .slots
            .iter()
            .filter(|slot| slot.state.is_occupied())
            .map(|slot| {
                (
                    (slot.position.x.to_bits(), slot.position.y.to_bits()),
                    slot.state,
                )
            })
            .collect();

        let mut slots = generate_lattice(width, height, self.separation);
        let mut carried = 0usize;
        for slot in &mut slots {
            let key = (slot.position.x.to_bits(), slot.position.y.to_bits());
            if let Some(state) = occupied.get(&key) {
                slot.state = *state;
                carried += 1;
            }
        }

        tracing::info!(
            width,
            height,
            carried,
            dropped = occupied.len() - carried,
            "resized wall"
        );

        self.width = width;
        self.height = height;
        self.tiles = tiles;
        self.slots = slots;
        Ok(())
    }

    /// Emits the wall's render commands: tiles, hole markers for empty
    /// slots, and occupied holds centered on their slot.
    pub fn draw(&self, hold_types: &HoldTypeSet, out: &mut Vec<RenderCommand>) {
        for y in 0..self.height {
            for x in 0..self.width {
                let region = self.tiles[(y * self.width + x) as usize];
                // Adjacent tiles are nudged half a pixel toward the wall
                // origin so the art overlaps and no seams show when the
                // camera lands on fractional zoom.
                let px = ((self.x_offset + x as i32) * TILE_SIZE) as f32 - 0.5 * x as f32;
                let py = -(((y + 1) as i32) * TILE_SIZE) as f32 + 0.5 * y as f32;
                out.push(RenderCommand::Sprite {
                    region,
                    x: px,
                    y: py,
                    tint: Color::WHITE,
                    clip: None,
                });
            }
        }

        for slot in &self.slots {
            match slot.state {
                HoldState::Empty => {
                    self.push_centered(self.hole_region, slot.position, Color::WHITE, out);
                }
                HoldState::Occupied { hold, tint } => {
                    if let Some(hold_type) = hold_types.get(hold) {
                        self.push_centered(hold_type.region, slot.position, tint, out);
                    }
                }
            }
        }
    }

    fn push_centered(
        &self,
        region: RegionRect,
        local: Vec2,
        tint: Color,
        out: &mut Vec<RenderCommand>,
    ) {
        let world = self.wall_to_world(local);
        out.push(RenderCommand::Sprite {
            region,
            x: world.x - region.width as f32 / 2.0,
            y: world.y - region.height as f32 / 2.0,
            tint,
            clip: None,
        });
    }
}

/// Generates the masonry lattice for a `width x height` wall.
///
/// Rows sit at `y = i * separation` for `i >= 1` while `y < height`;
/// every second row is shifted right by half a separation. Within a row,
/// slots sit at `x = separation + offset + j * separation` while
/// `x < width - separation`. Positions are computed by multiplication,
/// never accumulation, so the lattice is deterministic.
fn generate_lattice(width: u32, height: u32, separation: f32) -> Vec<HoldSlot> {
    let mut slots = Vec::new();
    let mut row = 1u32;
    loop {
        let y = row as f32 * separation;
        if y >= height as f32 {
            break;
        }
        let offset = if row % 2 == 0 { separation / 2.0 } else { 0.0 };
        let mut column = 0u32;
        loop {
            let x = separation + offset + column as f32 * separation;
            if x >= width as f32 - separation {
                break;
            }
            slots.push(HoldSlot {
                position: Vec2::new(x, y),
                state: HoldState::Empty,
            });
            column += 1;
        }
        row += 1;
    }
    slots
}
