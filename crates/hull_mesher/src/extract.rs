//! Adapter around the external surface-nets extractor.

use carver::{CarveConfig, OccupancyVolume};
use fast_surface_nets::ndshape::Shape;
use fast_surface_nets::{surface_nets, SurfaceNetsBuffer};

use crate::mesh::SurfaceMesh;
use crate::remap::{normal_to_world, vertex_to_world, AxisOrder};

/// Runtime cubic grid shape in the extractor's axis order.
///
/// Dimension 0 varies fastest in the linear layout, matching what
/// `surface_nets` expects of its shape parameter.
#[derive(Clone, Copy)]
struct GridShape {
    dims: [u32; 3],
}

impl Shape<3> for GridShape {
    type Coord = u32;

    #[inline]
    fn as_array(&self) -> [u32; 3] {
        self.dims
    }

    fn size(&self) -> u32 {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    fn usize(&self) -> usize {
        self.size() as usize
    }

    #[inline]
    fn linearize(&self, p: [u32; 3]) -> u32 {
        (p[2] * self.dims[1] + p[1]) * self.dims[0] + p[0]
    }

    #[inline]
    fn delinearize(&self, i: u32) -> [u32; 3] {
        let d0 = i % self.dims[0];
        let rest = i / self.dims[0];
        [d0, rest % self.dims[1], rest / self.dims[1]]
    }
}

/// Extract the boundary surface of an occupancy volume as a world-space
/// mesh.
///
/// The 0/1 occupancy field is handed to the extractor as the signed
/// field `0.5 - occupancy`, so the library's zero crossing coincides
/// with isovalue 0.5 of the boolean field. Vertices come back in
/// extractor lattice coordinates and are remapped through `order` and
/// the config's spacing; an entirely empty or entirely full volume
/// yields an empty mesh.
pub fn extract_surface(
    config: &CarveConfig,
    volume: &OccupancyVolume,
    order: &AxisOrder,
) -> SurfaceMesh {
    debug_assert_eq!(config.resolution, volume.resolution());
    let r = volume.resolution() as u32;
    let shape = GridShape { dims: [r, r, r] };

    // Re-linearize the volume into the extractor's axis order.
    let mut field = vec![0.5f32; shape.usize()];
    let axes = order.axes();
    for d2 in 0..r {
        for d1 in 0..r {
            for d0 in 0..r {
                let lattice = [d0, d1, d2];
                let mut idx = [0usize; 3];
                for (dim, &axis) in axes.iter().enumerate() {
                    idx[axis.index()] = lattice[dim] as usize;
                }
                if volume.get(idx[0], idx[1], idx[2]) {
                    field[shape.linearize(lattice) as usize] = -0.5;
                }
            }
        }
    }

    let mut buffer = SurfaceNetsBuffer::default();
    surface_nets(&field, &shape, [0; 3], [r - 1; 3], &mut buffer);

    let mut mesh = SurfaceMesh {
        positions: Vec::with_capacity(buffer.positions.len() * 3),
        normals: Vec::with_capacity(buffer.normals.len() * 3),
        indices: buffer.indices,
    };
    for (&position, &normal) in buffer.positions.iter().zip(&buffer.normals) {
        let world = vertex_to_world(order, config, position);
        mesh.positions.extend_from_slice(&world.to_array());
        let world_normal = normal_to_world(order, normal);
        mesh.normals.extend_from_slice(&world_normal.to_array());
    }
    mesh
}
