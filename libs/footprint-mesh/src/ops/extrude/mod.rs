//! # Extrusion
//!
//! Extrudes a triangulated footprint along the Z axis into a closed
//! solid: two caps plus side walls for every ring boundary.
//!
//! ## Vertex layout
//!
//! The solid's vertex buffer always lists the base copy (z unchanged)
//! at indices `0..N` and the offset copy (z + height) at `N..2N`, for
//! both extrusion directions. Index `i < N` therefore refers to
//! footprint vertex `i` regardless of the sign of the height, and the
//! solids for heights `h` and `-h` have identical vertex positions up
//! to the sign of the z offset.
//!
//! ## Winding
//!
//! Cap triangles arrive counter-clockwise (+z normals) from the
//! triangulator. The geometric top cap keeps that winding; the bottom
//! cap reverses it; walls follow each ring's traversal with outward
//! normals. All sign handling branches once on [`Orientation`].


use config::constants::EPSILON;
use glam::DVec3;

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Mesh;
use crate::polygon::{signed_area, Polygon};

// =============================================================================
// ORIENTATION
// =============================================================================

/// Extrusion direction, derived from the sign of the height.
///
/// Consumed uniformly by cap and wall generation instead of scattering
/// sign checks: a flipped extrusion is the mirror image of the normal
/// one, so every face winding swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Positive height: the offset copy is the geometric top
    Normal,
    /// Negative height: the base copy is the geometric top
    Flipped,
}

impl Orientation {
    /// Derives the orientation from a non-zero height.
    pub fn from_height(height: f64) -> Self {
        if height < 0.0 {
            Self::Flipped
        } else {
            Self::Normal
        }
    }

    /// Applies the orientation to a triangle: identity for `Normal`,
    /// winding swap for `Flipped`.
    #[inline]
    pub fn wind(&self, [a, b, c]: [u32; 3]) -> [u32; 3] {
        match self {
            Self::Normal => [a, b, c],
            Self::Flipped => [a, c, b],
        }
    }
}

// =============================================================================
// EXTRUDE
// =============================================================================

/// Extrudes a triangulated footprint into a closed solid.
///
/// # Arguments
///
/// * `polygon` - The footprint; supplies ring layouts for wall
///   stitching
/// * `vertices` - Flattened footprint vertices per the addressing
///   contract (ring order, then point order, z = 0)
/// * `faces` - Cap triangulation addressing `vertices`
/// * `height` - Signed extrusion distance along Z
///
/// # Returns
///
/// A mesh with `2N` vertices and, in order, bottom-cap, top-cap, and
/// side-wall triangles: `2F + 2E` total (F cap triangles, E boundary
/// edges).
///
/// # Errors
///
/// * `NonFiniteHeight` / `ZeroHeightExtrusion` for unusable heights
/// * `VertexCountMismatch` if `vertices` does not cover the footprint
/// * `IndexOutOfRange` if a cap face addresses outside `vertices`
pub fn extrude(
    polygon: &Polygon,
    vertices: &[DVec3],
    faces: &[[u32; 3]],
    height: f64,
) -> GeometryResult<Mesh> {
    if !height.is_finite() {
        return Err(GeometryError::NonFiniteHeight { height });
    }
    if height.abs() <= EPSILON {
        return Err(GeometryError::ZeroHeightExtrusion);
    }

    let n = vertices.len();
    // Ring layouts address this buffer; a mismatch would stitch walls
    // past the duplicated vertex range
    if n != polygon.vertex_count() {
        return Err(GeometryError::VertexCountMismatch {
            expected: polygon.vertex_count(),
            actual: n,
        });
    }
    for face in faces {
        for &index in face {
            if index as usize >= n {
                return Err(GeometryError::index_out_of_range(index, n));
            }
        }
    }

    let orientation = Orientation::from_height(height);
    let shift = n as u32;
    let wall_triangles = 2 * polygon.edge_count();
    let mut mesh = Mesh::with_capacity(2 * n, 2 * faces.len() + wall_triangles);

    // Base copy first, offset copy second
    for v in vertices {
        mesh.add_vertex(*v);
    }
    for v in vertices {
        mesh.add_vertex(DVec3::new(v.x, v.y, v.z + height));
    }

    // Caps: bottom reversed, top as triangulated; the orientation
    // decides which copy is the bottom
    let (bottom_shift, top_shift) = match orientation {
        Orientation::Normal => (0, shift),
        Orientation::Flipped => (shift, 0),
    };
    for &[a, b, c] in faces {
        mesh.add_triangle(a + bottom_shift, c + bottom_shift, b + bottom_shift);
    }
    for &[a, b, c] in faces {
        mesh.add_triangle(a + top_shift, b + top_shift, c + top_shift);
    }

    // Side walls, one closed loop per ring. Traversal is normalized so
    // the outer ring runs counter-clockwise and holes clockwise, which
    // keeps wall normals pointing away from the solid interior.
    for (ring_index, (ring, layout)) in polygon
        .rings()
        .iter()
        .zip(polygon.ring_layouts())
        .enumerate()
    {
        let is_outer = ring_index == 0;
        let input_ccw = signed_area(ring) >= 0.0;
        let forward = input_ccw == is_outer;

        for local in 0..layout.len {
            let (a, b) = if forward {
                (layout.index(local), layout.next(local))
            } else {
                (layout.next(local), layout.index(local))
            };

            let quad_lower = orientation.wind([a, b, b + shift]);
            let quad_upper = orientation.wind([a, b + shift, a + shift]);
            mesh.add_triangle(quad_lower[0], quad_lower[1], quad_lower[2]);
            mesh.add_triangle(quad_upper[0], quad_upper[1], quad_upper[2]);
        }
    }

    Ok(mesh)
}
