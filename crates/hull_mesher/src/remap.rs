//! Axis remapping between the storage volume and the extractor.
//!
//! The extraction routine's axis convention is a library contract, not a
//! design choice of the carver, so it is modeled as a configurable
//! permutation. The inverse mapping back to world coordinates is the one
//! canonical lattice-to-world formula in the whole pipeline.

use carver::{Axis, CarveConfig};
use glam::Vec3;
use thiserror::Error;

/// Rejected axis-order permutation.
#[derive(Debug, Error)]
#[error("axis order {0:?} is not a permutation of (x, y, z)")]
pub struct InvalidAxisOrder(pub [Axis; 3]);

/// Permutation describing the extraction routine's axis convention.
///
/// `axes()[d]` names the world axis carried by extractor dimension `d`,
/// where dimension 0 varies fastest in the extractor's linear layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisOrder {
    axes: [Axis; 3],
}

impl AxisOrder {
    /// Storage order (x, y, z).
    pub const IDENTITY: AxisOrder = AxisOrder {
        axes: [Axis::X, Axis::Y, Axis::Z],
    };

    /// Reversed order (z, y, x), the usual volume-imaging convention.
    pub const REVERSED: AxisOrder = AxisOrder {
        axes: [Axis::Z, Axis::Y, Axis::X],
    };

    /// Build an order from an explicit permutation.
    pub fn new(axes: [Axis; 3]) -> Result<Self, InvalidAxisOrder> {
        for axis in Axis::ALL {
            if !axes.contains(&axis) {
                return Err(InvalidAxisOrder(axes));
            }
        }
        Ok(Self { axes })
    }

    /// World axis carried by each extractor dimension.
    #[inline]
    pub fn axes(&self) -> [Axis; 3] {
        self.axes
    }

    /// Extractor dimension carrying the given world axis.
    #[inline]
    pub fn dimension_of(&self, axis: Axis) -> usize {
        // The constructor guarantees a permutation; the fallback is
        // unreachable for the provided constants.
        self.axes
            .iter()
            .position(|&a| a == axis)
            .unwrap_or(axis.index())
    }
}

/// Per-axis grid spacing of the carve configuration, in world units.
pub fn world_spacing(config: &CarveConfig) -> Vec3 {
    Vec3::new(
        config.spacing(Axis::X),
        config.spacing(Axis::Y),
        config.spacing(Axis::Z),
    )
}

/// Map an extractor-lattice vertex back to world coordinates.
///
/// Applied once per axis: `world[axis] = vertex[dim(axis)] * spacing[axis]
/// + min[axis]`. This is the only place lattice coordinates become world
/// coordinates.
pub fn vertex_to_world(order: &AxisOrder, config: &CarveConfig, vertex: [f32; 3]) -> Vec3 {
    let spacing = world_spacing(config);
    let mut world = Vec3::ZERO;
    for axis in Axis::ALL {
        let i = axis.index();
        world[i] = vertex[order.dimension_of(axis)] * spacing[i] + config.bounds.min[i];
    }
    world
}

/// Inverse-permute an extractor-space normal into world axis order and
/// renormalize.
pub fn normal_to_world(order: &AxisOrder, normal: [f32; 3]) -> Vec3 {
    let mut world = Vec3::ZERO;
    for axis in Axis::ALL {
        world[axis.index()] = normal[order.dimension_of(axis)];
    }
    world.normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use carver::BoundingBox;

    fn config() -> CarveConfig {
        // Deliberately anisotropic: spacing (1, 2, 4) at R = 9.
        CarveConfig::new(
            BoundingBox::new(Vec3::ZERO, Vec3::new(8.0, 16.0, 32.0)),
            9,
        )
        .unwrap()
    }

    #[test]
    fn reversed_order_dimensions() {
        let order = AxisOrder::REVERSED;
        assert_eq!(order.dimension_of(Axis::X), 2);
        assert_eq!(order.dimension_of(Axis::Y), 1);
        assert_eq!(order.dimension_of(Axis::Z), 0);
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(AxisOrder::new([Axis::X, Axis::X, Axis::Z]).is_err());
        assert!(AxisOrder::new([Axis::Z, Axis::X, Axis::Y]).is_ok());
    }

    #[test]
    fn spacing_matches_config() {
        assert_eq!(world_spacing(&config()), Vec3::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn lattice_origin_maps_to_box_min() {
        let cfg = config();
        for order in [AxisOrder::IDENTITY, AxisOrder::REVERSED] {
            let world = vertex_to_world(&order, &cfg, [0.0, 0.0, 0.0]);
            assert_eq!(world, cfg.bounds.min);
        }
    }

    #[test]
    fn lattice_corner_maps_to_box_max() {
        let cfg = config();
        // Under REVERSED, extractor dimension 0 is Z, so the far lattice
        // corner is (R-1, R-1, R-1) in every order.
        let world = vertex_to_world(&AxisOrder::REVERSED, &cfg, [8.0, 8.0, 8.0]);
        assert!((world - cfg.bounds.max).length() < 1e-5);
    }

    #[test]
    fn reversed_vertex_components_swap_x_and_z() {
        let cfg = config();
        let world = vertex_to_world(&AxisOrder::REVERSED, &cfg, [1.0, 2.0, 3.0]);
        // world.x from vertex[2], world.y from vertex[1], world.z from vertex[0].
        assert_eq!(world, Vec3::new(3.0, 4.0, 4.0));
    }

    #[test]
    fn normals_permute_and_renormalize() {
        let n = normal_to_world(&AxisOrder::REVERSED, [0.0, 0.0, 2.0]);
        assert!((n - Vec3::X).length() < 1e-6);
        assert_eq!(normal_to_world(&AxisOrder::REVERSED, [0.0; 3]), Vec3::ZERO);
    }
}
