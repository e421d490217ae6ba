//! Wavefront OBJ export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::mesh::SurfaceMesh;

/// Failure while persisting a mesh artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot create output file '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Write a mesh as Wavefront OBJ at the given path.
pub fn write_obj(path: &Path, mesh: &SurfaceMesh) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_obj_to(&mut writer, mesh).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Write a mesh as Wavefront OBJ to any writer.
///
/// Vertices and normals keep world coordinates; faces use 1-based
/// `v//vn` references with shared position/normal indexing.
pub fn write_obj_to<W: Write>(out: &mut W, mesh: &SurfaceMesh) -> io::Result<()> {
    writeln!(out, "# carved visual hull")?;
    writeln!(
        out,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(out)?;

    for p in mesh.positions.chunks_exact(3) {
        writeln!(out, "v {:.6} {:.6} {:.6}", p[0], p[1], p[2])?;
    }
    for n in mesh.normals.chunks_exact(3) {
        writeln!(out, "vn {:.6} {:.6} {:.6}", n[0], n[1], n[2])?;
    }
    for t in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (t[0] + 1, t[1] + 1, t[2] + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> SurfaceMesh {
        SurfaceMesh {
            positions: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 1.0, 0.0,
            ],
            normals: vec![
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0,
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    #[test]
    fn writes_counts_and_one_based_faces() {
        let mut out = Vec::new();
        write_obj_to(&mut out, &quad()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 4);
        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces, ["f 1//1 2//2 3//3", "f 1//1 3//3 4//4"]);
    }

    #[test]
    fn empty_mesh_writes_header_only() {
        let mut out = Vec::new();
        write_obj_to(&mut out, &SurfaceMesh::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("# 0 vertices, 0 triangles"));
        assert!(!text.lines().any(|l| l.starts_with("v ") || l.starts_with("f ")));
    }

    #[test]
    fn fixed_precision_vertices() {
        let mut out = Vec::new();
        write_obj_to(&mut out, &quad()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("v 0.000000 0.000000 0.000000"));
        assert!(text.contains("v 1.000000 1.000000 0.000000"));
    }
}
