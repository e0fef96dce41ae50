//! Nine-patch slicing.
//!
//! A nine-patch is a region cut into a 3x3 grid: four fixed corners, four
//! stretchable edges, one stretchable center. Packed sources lay the nine
//! cells out with a small gutter between them so that bilinear sampling
//! never bleeds across cells.

use crate::atlas::RegionRect;
use crate::error::AssetError;

/// The nine source cells of a nine-patch, row-major from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NinePatchRegions {
    /// Source cells within the texture.
    pub patches: [RegionRect; 9],
    /// Corner cell size in pixels (corners never stretch).
    pub corner: u32,
}

impl NinePatchRegions {
    /// Slices a packed region into nine cells of `corner` pixels each,
    /// separated by `spacing` pixels of gutter.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::RegionTooSmall`] if the region cannot hold a
    /// 3x3 grid of `corner`-sized cells with the given gutters.
    pub fn from_region(
        region: RegionRect,
        corner: u32,
        spacing: u32,
    ) -> Result<Self, AssetError> {
        let needed = corner * 3 + spacing * 2;
        if region.width < needed || region.height < needed {
            return Err(AssetError::RegionTooSmall {
                width: region.width,
                height: region.height,
                corner,
            });
        }

        let step = corner + spacing;
        let mut patches = [RegionRect::new(0, 0, 0, 0); 9];
        for row in 0..3u32 {
            for col in 0..3u32 {
                patches[(row * 3 + col) as usize] = RegionRect::new(
                    region.x + col * step,
                    region.y + row * step,
                    corner,
                    corner,
                );
            }
        }

        Ok(Self { patches, corner })
    }

    /// Computes the nine destination cells for a target rectangle of
    /// `width` x `height` pixels, as `(x, y, width, height)` offsets from
    /// the target's top-left corner.
    ///
    /// Corners keep their size; edges and center absorb the remainder.
    /// A target smaller than two corners collapses the stretchable cells
    /// to zero rather than overlapping the corners.
    #[must_use]
    pub fn layout(&self, width: f32, height: f32) -> [(f32, f32, f32, f32); 9] {
        let corner = self.corner as f32;
        let mid_w = (width - corner * 2.0).max(0.0);
        let mid_h = (height - corner * 2.0).max(0.0);

        let xs = [0.0, corner, corner + mid_w];
        let ys = [0.0, corner, corner + mid_h];
        let ws = [corner, mid_w, corner];
        let hs = [corner, mid_h, corner];

        let mut cells = [(0.0, 0.0, 0.0, 0.0); 9];
        for row in 0..3 {
            for col in 0..3 {
                cells[row * 3 + col] = (xs[col], ys[row], ws[col], hs[row]);
            }
        }
        cells
    }
}
