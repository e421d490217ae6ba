//! Surface extraction and export for carved occupancy volumes.
//!
//! Bridges the carver's (x, y, z) storage order and the external
//! surface-nets extractor, which consumes the grid in its own axis
//! convention. Every vertex leaves this crate in world coordinates;
//! the lattice-to-world transform lives in exactly one place
//! ([`remap::vertex_to_world`]).

pub mod export;
pub mod extract;
pub mod mesh;
pub mod remap;

pub use crate::export::{write_obj, write_obj_to, ExportError};
pub use crate::extract::extract_surface;
pub use crate::mesh::SurfaceMesh;
pub use crate::remap::{vertex_to_world, world_spacing, AxisOrder, InvalidAxisOrder};
