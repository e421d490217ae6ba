//! Orthographic view projections.

use glam::Vec3;

use crate::core::{Axis, BoundingBox};

/// Pure mapping from a world-space sample to a pixel in one silhouette.
///
/// One world axis feeds the column, another feeds the row; the row axis
/// may be inverted so that the world maximum lands on row 0 (image up).
/// Projection is total: out-of-box samples clamp to an edge pixel after
/// rounding.
#[derive(Clone, Copy, Debug)]
pub struct ViewProjection {
    col_axis: Axis,
    row_axis: Axis,
    invert_row: bool,
    width: usize,
    height: usize,
    col_min: f32,
    col_inv_extent: f32,
    row_min: f32,
    row_inv_extent: f32,
}

impl ViewProjection {
    /// Build a projection for one view of the given mask dimensions.
    pub fn new(
        bounds: &BoundingBox,
        col_axis: Axis,
        row_axis: Axis,
        invert_row: bool,
        width: usize,
        height: usize,
    ) -> Self {
        let (col_min, col_max) = bounds.interval(col_axis);
        let (row_min, row_max) = bounds.interval(row_axis);
        Self {
            col_axis,
            row_axis,
            invert_row,
            width,
            height,
            col_min,
            col_inv_extent: 1.0 / (col_max - col_min),
            row_min,
            row_inv_extent: 1.0 / (row_max - row_min),
        }
    }

    /// Front view: world X across the columns, world Z (up) toward row 0.
    pub fn front(bounds: &BoundingBox, width: usize, height: usize) -> Self {
        Self::new(bounds, Axis::X, Axis::Z, true, width, height)
    }

    /// Side view (viewer on +X): world Y across the columns, world Z up.
    pub fn side(bounds: &BoundingBox, width: usize, height: usize) -> Self {
        Self::new(bounds, Axis::Y, Axis::Z, true, width, height)
    }

    /// Top view (looking down): world X across the columns, +Y toward row 0.
    pub fn top(bounds: &BoundingBox, width: usize, height: usize) -> Self {
        Self::new(bounds, Axis::X, Axis::Y, true, width, height)
    }

    /// Project a sample to a clamped `(row, col)` pixel index.
    #[inline]
    pub fn project(&self, sample: Vec3) -> (usize, usize) {
        let col_norm = (sample[self.col_axis.index()] - self.col_min) * self.col_inv_extent;
        let mut row_norm = (sample[self.row_axis.index()] - self.row_min) * self.row_inv_extent;
        if self.invert_row {
            row_norm = 1.0 - row_norm;
        }
        let col = (col_norm * (self.width - 1) as f32).round();
        let row = (row_norm * (self.height - 1) as f32).round();
        (clamp_index(row, self.height), clamp_index(col, self.width))
    }
}

#[inline]
fn clamp_index(value: f32, len: usize) -> usize {
    value.clamp(0.0, (len - 1) as f32) as usize
}
