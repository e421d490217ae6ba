//! Voxel-center sample generation.

use glam::Vec3;

use crate::core::{Axis, CarveConfig};

/// Deterministic enumeration of voxel-center samples over the carve grid.
///
/// The linear order is (x, y, z) with z fastest:
/// `linear = (ix * R + iy) * R + iz`. [`crate::volume::OccupancyVolume`]
/// packs carve results with the same formula, so the two sides can never
/// disagree about which flag belongs to which voxel.
///
/// Samples are computed on demand; batches never materialize the full
/// R³ set.
#[derive(Clone, Copy, Debug)]
pub struct SampleGrid {
    config: CarveConfig,
}

impl SampleGrid {
    pub fn new(config: &CarveConfig) -> Self {
        Self { config: *config }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.config.resolution
    }

    /// Total sample count (R³).
    pub fn sample_count(&self) -> usize {
        self.config.voxel_count()
    }

    /// Axis value at grid index i: `min + i * spacing`.
    #[inline]
    pub fn axis_value(&self, axis: Axis, i: usize) -> f32 {
        let (lo, _) = self.config.bounds.interval(axis);
        lo + i as f32 * self.config.spacing(axis)
    }

    /// Split a linear index into (ix, iy, iz) grid indices.
    #[inline]
    pub fn delinearize(&self, linear: usize) -> [usize; 3] {
        let r = self.config.resolution;
        let iz = linear % r;
        let rest = linear / r;
        [rest / r, rest % r, iz]
    }

    /// Voxel-center sample at a linear index.
    #[inline]
    pub fn sample_at(&self, linear: usize) -> Vec3 {
        let [ix, iy, iz] = self.delinearize(linear);
        Vec3::new(
            self.axis_value(Axis::X, ix),
            self.axis_value(Axis::Y, iy),
            self.axis_value(Axis::Z, iz),
        )
    }

    /// Iterate all samples in linear order.
    pub fn samples(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.sample_count()).map(move |i| self.sample_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoundingBox;

    fn grid(min: Vec3, max: Vec3, resolution: usize) -> SampleGrid {
        let config = CarveConfig::new(BoundingBox::new(min, max), resolution).unwrap();
        SampleGrid::new(&config)
    }

    #[test]
    fn emits_r_cubed_samples() {
        for r in [2, 3, 8, 17] {
            let g = grid(Vec3::ZERO, Vec3::ONE, r);
            assert_eq!(g.sample_count(), r * r * r);
            assert_eq!(g.samples().count(), r * r * r);
        }
    }

    #[test]
    fn axis_values_are_inclusive_linspace() {
        let g = grid(Vec3::new(-0.5, -0.5, 0.0), Vec3::new(0.5, 0.5, 1.8), 10);
        assert_eq!(g.axis_value(Axis::X, 0), -0.5);
        assert!((g.axis_value(Axis::X, 9) - 0.5).abs() < 1e-6);
        assert_eq!(g.axis_value(Axis::Z, 0), 0.0);
        assert!((g.axis_value(Axis::Z, 9) - 1.8).abs() < 1e-6);
        // value at index i = min + i * step
        let step = 1.8 / 9.0;
        for i in 0..10 {
            assert!((g.axis_value(Axis::Z, i) - i as f32 * step).abs() < 1e-6);
        }
    }

    #[test]
    fn linear_order_is_x_outer_z_fastest() {
        let g = grid(Vec3::ZERO, Vec3::ONE, 3);
        assert_eq!(g.delinearize(0), [0, 0, 0]);
        assert_eq!(g.delinearize(1), [0, 0, 1]);
        assert_eq!(g.delinearize(3), [0, 1, 0]);
        assert_eq!(g.delinearize(9), [1, 0, 0]);
        assert_eq!(g.delinearize(26), [2, 2, 2]);
    }

    #[test]
    fn first_and_last_samples_are_box_corners() {
        let g = grid(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0), 5);
        assert_eq!(g.sample_at(0), Vec3::new(1.0, 2.0, 3.0));
        let last = g.sample_at(g.sample_count() - 1);
        assert!((last - Vec3::new(4.0, 5.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn iterator_matches_indexed_access() {
        let g = grid(Vec3::ZERO, Vec3::ONE, 4);
        for (i, sample) in g.samples().enumerate() {
            assert_eq!(sample, g.sample_at(i));
        }
    }
}
