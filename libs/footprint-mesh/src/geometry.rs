//! # Geometry
//!
//! Facade over a validated footprint polygon with lazily computed,
//! cached derived data.
//!
//! The flattened 3D vertex buffer and the cap triangulation are
//! produced on first access and reused afterwards. The polygon is
//! immutable once constructed, so the cache never invalidates; a
//! [`std::sync::OnceLock`] makes the laziness safe to share across
//! threads.

use std::sync::OnceLock;

use glam::DVec3;

use crate::error::GeometryResult;
use crate::mesh::Mesh;
use crate::ops::extrude::extrude;
use crate::ops::triangulate::{triangulate, Triangulation};
use crate::polygon::Polygon;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Cached flat-mesh view of a footprint: the flattened z = 0 vertex
/// buffer and its cap triangulation, computed together.
#[derive(Debug)]
struct FlatMesh {
    vertices: Vec<DVec3>,
    triangulation: Triangulation,
}

/// A footprint polygon together with its derived flat mesh.
///
/// Construction takes an already-validated [`Polygon`]; triangulation
/// and extrusion then cannot fail on polygon shape. All accessors that
/// need the flat mesh share one cached computation.
///
/// # Example
///
/// ```rust
/// use footprint_mesh::{Geometry, Polygon};
/// use glam::DVec2;
///
/// let geometry = Geometry::new(Polygon::square(DVec2::splat(2.0), true).unwrap());
/// assert_eq!(geometry.faces().len(), 2);
///
/// let solid = geometry.extrude(1.0).unwrap();
/// assert_eq!(solid.vertex_count(), 8);
/// ```
#[derive(Debug)]
pub struct Geometry {
    polygon: Polygon,
    flat: OnceLock<FlatMesh>,
}

impl Geometry {
    /// Wraps a validated polygon. No derived data is computed yet.
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            flat: OnceLock::new(),
        }
    }

    /// The underlying footprint polygon.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    fn flat_mesh(&self) -> &FlatMesh {
        self.flat.get_or_init(|| FlatMesh {
            vertices: self.polygon.flat_vertices(),
            triangulation: triangulate(&self.polygon),
        })
    }

    /// Flattened footprint vertices at z = 0, in ring order.
    pub fn vertices(&self) -> &[DVec3] {
        &self.flat_mesh().vertices
    }

    /// Cap triangulation as index triples into [`Self::vertices`].
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.flat_mesh().triangulation.faces
    }

    /// Number of best-effort clips the triangulation needed; zero for
    /// well-formed footprints.
    pub fn fallback_clips(&self) -> u32 {
        self.flat_mesh().triangulation.fallback_clips
    }

    /// Extrudes the footprint into a closed solid.
    ///
    /// # Errors
    ///
    /// Returns an error for zero or non-finite heights.
    pub fn extrude(&self, height: f64) -> GeometryResult<Mesh> {
        let flat = self.flat_mesh();
        extrude(&self.polygon, &flat.vertices, &flat.triangulation.faces, height)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::new(polygon)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn square_geometry() -> Geometry {
        Geometry::new(Polygon::square(DVec2::splat(1.0), false).unwrap())
    }

    #[test]
    fn test_flat_vertices_at_zero() {
        let geometry = square_geometry();
        assert_eq!(geometry.vertices().len(), 4);
        for v in geometry.vertices() {
            assert_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn test_derived_data_is_cached() {
        let geometry = square_geometry();
        let first = geometry.vertices().as_ptr();
        let second = geometry.vertices().as_ptr();
        assert_eq!(first, second);

        assert_eq!(geometry.faces().len(), 2);
        assert_eq!(geometry.fallback_clips(), 0);
    }

    #[test]
    fn test_extrude_through_facade() {
        let geometry = square_geometry();
        let solid = geometry.extrude(2.0).unwrap();
        assert_eq!(solid.vertex_count(), 8);
        assert_eq!(solid.triangle_count(), 12);
        assert_relative_eq!(solid.signed_volume(), 2.0);
    }

    #[test]
    fn test_extrude_does_not_consume() {
        let geometry = square_geometry();
        let up = geometry.extrude(1.0).unwrap();
        let down = geometry.extrude(-1.0).unwrap();
        assert_eq!(up.vertex_count(), down.vertex_count());
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Geometry>();
    }
}
