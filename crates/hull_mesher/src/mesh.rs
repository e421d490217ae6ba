//! Triangle mesh container.

/// Extracted surface mesh in world coordinates.
///
/// Flat layouts, ready for export or GPU upload.
#[derive(Default, Clone)]
pub struct SurfaceMesh {
    /// Vertex positions (3 floats per vertex).
    pub positions: Vec<f32>,
    /// Per-vertex normals (3 floats per vertex).
    pub normals: Vec<f32>,
    /// Triangle indices (3 per triangle).
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the mesh carries no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
