//! Core configuration types for the carving pipeline.

use glam::Vec3;

use crate::error::CarveError;

/// World axis selector, used by view projections and the axis remapping
/// that feeds the surface extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in (x, y, z) order.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase axis name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Axis-aligned bounding box of the carved volume, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a bounding box. Call [`BoundingBox::validate`] (or go
    /// through [`CarveConfig::new`]) before carving with it.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Check that every axis interval is finite and non-degenerate.
    pub fn validate(&self) -> Result<(), CarveError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CarveError::Config {
                reason: "bounding box must be finite".into(),
            });
        }
        for axis in Axis::ALL {
            let (lo, hi) = self.interval(axis);
            if lo >= hi {
                return Err(CarveError::Config {
                    reason: format!(
                        "{} interval is degenerate or inverted: [{lo}, {hi}]",
                        axis.name()
                    ),
                });
            }
        }
        Ok(())
    }

    /// (min, max) along one axis.
    #[inline]
    pub fn interval(&self, axis: Axis) -> (f32, f32) {
        let i = axis.index();
        (self.min[i], self.max[i])
    }

    /// Extent (max - min) along one axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        let (lo, hi) = self.interval(axis);
        hi - lo
    }
}

/// Immutable carve configuration.
///
/// Constructed once, validated up front, and passed by reference into
/// every component; nothing in the pipeline mutates it.
#[derive(Clone, Copy, Debug)]
pub struct CarveConfig {
    pub bounds: BoundingBox,
    /// Grid resolution per axis; the carved volume has `resolution³` voxels.
    pub resolution: usize,
}

impl CarveConfig {
    /// Create and validate a configuration.
    pub fn new(bounds: BoundingBox, resolution: usize) -> Result<Self, CarveError> {
        let config = Self { bounds, resolution };
        config.validate()?;
        Ok(config)
    }

    /// Check resolution and bounding box constraints.
    pub fn validate(&self) -> Result<(), CarveError> {
        if self.resolution < 2 {
            return Err(CarveError::Config {
                reason: format!("resolution must be >= 2 (got {})", self.resolution),
            });
        }
        self.bounds.validate()
    }

    /// Total number of voxels in the cubic grid.
    pub fn voxel_count(&self) -> usize {
        self.resolution * self.resolution * self.resolution
    }

    /// Grid spacing along one axis: (max - min) / (R - 1).
    ///
    /// Voxel centers sit at `min + i * spacing`, inclusive of both bounds.
    #[inline]
    pub fn spacing(&self, axis: Axis) -> f32 {
        self.bounds.extent(axis) / (self.resolution - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn accepts_valid_config() {
        assert!(CarveConfig::new(unit_box(), 2).is_ok());
        assert!(CarveConfig::new(unit_box(), 200).is_ok());
    }

    #[test]
    fn rejects_small_resolution() {
        for r in [0, 1] {
            let err = CarveConfig::new(unit_box(), r).unwrap_err();
            assert!(matches!(err, CarveError::Config { .. }));
        }
    }

    #[test]
    fn rejects_inverted_interval() {
        let bounds = BoundingBox::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 1.0));
        let err = CarveConfig::new(bounds, 8).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("y interval"), "got: {message}");
    }

    #[test]
    fn rejects_degenerate_interval() {
        let bounds = BoundingBox::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        assert!(CarveConfig::new(bounds, 8).is_err());
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let bounds = BoundingBox::new(Vec3::ZERO, Vec3::new(f32::NAN, 1.0, 1.0));
        assert!(bounds.validate().is_err());
        let bounds = BoundingBox::new(Vec3::splat(f32::NEG_INFINITY), Vec3::ONE);
        assert!(bounds.validate().is_err());
    }

    #[test]
    fn spacing_divides_extent() {
        let config = CarveConfig::new(
            BoundingBox::new(Vec3::new(-0.5, -0.5, 0.0), Vec3::new(0.5, 0.5, 1.8)),
            10,
        )
        .unwrap();
        assert!((config.spacing(Axis::X) - 1.0 / 9.0).abs() < 1e-6);
        assert!((config.spacing(Axis::Z) - 0.2).abs() < 1e-6);
    }
}
