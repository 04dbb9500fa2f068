//! # Mesh Buffer Export
//!
//! Flat, contiguous vertex/index buffers for zero-copy consumption by a
//! rendering or numeric layer. Internal `f64` precision is narrowed to
//! `f32` only at this boundary.

use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// Mesh buffers suitable for GPU rendering.
///
/// # Examples
/// ```
/// use footprint_mesh::{Geometry, Polygon};
/// use glam::DVec2;
///
/// let square = Polygon::square(DVec2::splat(1.0), false).unwrap();
/// let solid = Geometry::new(square).extrude(1.0).unwrap();
/// let buffers = solid.to_buffers();
///
/// assert_eq!(buffers.vertices.len(), 8 * 3); // 8 vertices * 3 components
/// assert_eq!(buffers.indices.len(), 12 * 3); // 12 triangles * 3 indices
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Mesh {
    /// Exports the mesh to GPU-friendly flat buffers.
    pub fn to_buffers(&self) -> MeshBuffers {
        let mut buffers = MeshBuffers {
            vertices: Vec::with_capacity(self.vertex_count() * 3),
            indices: Vec::with_capacity(self.triangle_count() * 3),
        };

        for vertex in self.vertices() {
            buffers.vertices.push(vertex.x as f32);
            buffers.vertices.push(vertex.y as f32);
            buffers.vertices.push(vertex.z as f32);
        }

        for triangle in self.triangles() {
            buffers.indices.extend_from_slice(triangle);
        }

        buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_empty_buffers() {
        let buffers = MeshBuffers::new();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
    }

    #[test]
    fn test_export_layout() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        mesh.add_vertex(DVec3::new(7.0, 8.0, 9.0));
        mesh.add_triangle(0, 1, 2);

        let buffers = mesh.to_buffers();
        assert_eq!(buffers.vertices, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(buffers.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_indices_in_range() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);

        let buffers = mesh.to_buffers();
        let vertex_count = buffers.vertex_count() as u32;
        for &idx in &buffers.indices {
            assert!(idx < vertex_count, "Index {} out of range", idx);
        }
    }
}
