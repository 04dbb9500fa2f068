//! # Mesh Data Structure
//!
//! Triangle mesh representation shared by the flat (triangulated) and
//! extruded outputs.
//!
//! All geometry calculations use f64 internally. Conversion to f32 flat
//! buffers happens only at the export boundary (see [`crate::buffers`]).

use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// # Example
///
/// ```rust
/// use footprint_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Creates a mesh from existing buffers.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    // =========================================================================
    // BUILD OPERATIONS
    // =========================================================================

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Axis-aligned bounding box as (min, max).
    ///
    /// Returns the zero box for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for v in &self.vertices {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Unit normal of the triangle at `index`.
    ///
    /// Follows the right-hand rule over the triangle's winding. Returns
    /// the zero vector for a degenerate triangle.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        let v0 = self.vertex(a);
        let v1 = self.vertex(b);
        let v2 = self.vertex(c);
        let normal = (v1 - v0).cross(v2 - v0);
        let len = normal.length();
        if len > 0.0 {
            normal / len
        } else {
            DVec3::ZERO
        }
    }

    /// Signed volume enclosed by the mesh (divergence theorem).
    ///
    /// Positive when triangle windings face outward. Only meaningful for
    /// closed meshes; open meshes report the net signed sum of the
    /// tetrahedra spanned from the origin.
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;
        for &[a, b, c] in &self.triangles {
            let v0 = self.vertex(a);
            let v1 = self.vertex(b);
            let v2 = self.vertex(c);
            volume += v0.dot(v1.cross(v2));
        }
        volume / 6.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
