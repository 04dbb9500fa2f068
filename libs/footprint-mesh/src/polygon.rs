//! # Polygon Data Model
//!
//! Validated 2D footprints: an outer boundary ring plus optional hole
//! rings, each an ordered, implicitly closed loop of points.
//!
//! A `Polygon` is immutable after construction. Validation happens once
//! in the constructors, so every downstream operation can assume a
//! well-formed footprint. Transform helpers return new polygons.

use config::constants::{AREA_EPSILON, MIN_CIRCLE_SEGMENTS, MIN_RING_VERTICES};
use glam::{DVec2, DVec3};

use crate::error::{GeometryError, GeometryResult};

// =============================================================================
// RING GEOMETRY
// =============================================================================

/// Returns twice the signed area contribution of one ring edge.
#[inline]
fn edge_cross(a: DVec2, b: DVec2) -> f64 {
    a.perp_dot(b)
}

/// Signed area of an implicitly closed ring (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
///
/// # Example
///
/// ```rust
/// use footprint_mesh::polygon::signed_area;
/// use glam::DVec2;
///
/// let ccw = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// assert_eq!(signed_area(&ccw), 1.0);
/// ```
pub fn signed_area(points: &[DVec2]) -> f64 {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum += edge_cross(points[i], points[j]);
    }
    sum / 2.0
}

/// Tessellates a circular arc from `start` to `end` around `center`.
///
/// The radius is taken from the distance between `center` and `start`.
/// When `start` equals `end` the arc is a full circle and the duplicate
/// closing point is omitted (rings are implicitly closed). `segments` is
/// the sample count for a full circle; partial arcs use a proportional
/// share of it.
pub fn arc_points(
    start: DVec2,
    end: DVec2,
    center: DVec2,
    clockwise: bool,
    segments: u32,
) -> Vec<DVec2> {
    let radius = (start - center).length();
    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let full_circle = start == end;

    let sweep = if full_circle {
        std::f64::consts::TAU
    } else {
        let end_angle = (end.y - center.y).atan2(end.x - center.x);
        let delta = if clockwise {
            start_angle - end_angle
        } else {
            end_angle - start_angle
        };
        delta.rem_euclid(std::f64::consts::TAU)
    };

    let per_circle = segments.max(MIN_CIRCLE_SEGMENTS) as f64;
    let steps = ((per_circle * sweep / std::f64::consts::TAU).ceil() as usize).max(1);
    let direction = if clockwise { -1.0 } else { 1.0 };

    let mut points = Vec::with_capacity(steps + 1);
    points.push(start);
    for n in 1..steps {
        let angle = start_angle + direction * sweep * n as f64 / steps as f64;
        points.push(center + radius * DVec2::new(angle.cos(), angle.sin()));
    }
    if !full_circle {
        points.push(end);
    }
    points
}

// =============================================================================
// RING LAYOUT
// =============================================================================

/// Position of one ring inside the flattened vertex layout.
///
/// The flattened layout lists every ring's points in ring order, then
/// point order. All index math in the extruder goes through this value
/// instead of re-deriving ring offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RingLayout {
    /// Flattened index of the ring's first point
    pub start: u32,
    /// Number of points (and boundary edges) in the ring
    pub len: u32,
}

impl RingLayout {
    /// Flattened index of the ring-local point `local`.
    #[inline]
    pub fn index(&self, local: u32) -> u32 {
        self.start + local
    }

    /// Flattened index of the point after `local`, wrapping to the
    /// ring's first point.
    #[inline]
    pub fn next(&self, local: u32) -> u32 {
        self.start + (local + 1) % self.len
    }
}

// =============================================================================
// POLYGON
// =============================================================================

/// A validated 2D footprint: outer boundary plus optional holes.
///
/// Rings are ordered, implicitly closed point loops. The first ring is
/// the outer boundary; subsequent rings are holes nested within it. No
/// particular winding is required per ring; operations rely on each
/// ring's signed-area sign.
///
/// Construction validates the footprint, so a `Polygon` value is always
/// well-formed; there are no mutating accessors.
///
/// # Example
///
/// ```rust
/// use footprint_mesh::Polygon;
/// use glam::DVec2;
///
/// let square = Polygon::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ])
/// .unwrap();
/// assert_eq!(square.vertex_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Polygon {
    /// All rings; index 0 is the outer boundary
    rings: Vec<Vec<DVec2>>,
    /// Per-ring spans in the flattened layout, computed once
    layouts: Vec<RingLayout>,
}

impl Polygon {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Creates a polygon from its outer boundary.
    ///
    /// # Errors
    ///
    /// `InvalidPolygon` if the ring has fewer than 3 points, contains a
    /// non-finite coordinate, or has zero signed area.
    pub fn new(outer: Vec<DVec2>) -> GeometryResult<Self> {
        Self::with_holes(outer, Vec::new())
    }

    /// Creates a polygon with holes.
    ///
    /// Hole rings are validated like the outer ring; a degenerate hole
    /// is rejected rather than silently dropped, because dropping it
    /// would change the flattened vertex layout the caller addresses.
    pub fn with_holes(outer: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> GeometryResult<Self> {
        validate_ring(&outer, "outer ring")?;
        for (i, hole) in holes.iter().enumerate() {
            validate_ring(hole, &format!("hole ring {i}"))?;
        }

        let mut rings = Vec::with_capacity(1 + holes.len());
        rings.push(outer);
        rings.extend(holes);

        let mut layouts = Vec::with_capacity(rings.len());
        let mut start = 0u32;
        for ring in &rings {
            let len = ring.len() as u32;
            layouts.push(RingLayout { start, len });
            start += len;
        }

        Ok(Self { rings, layouts })
    }

    /// Creates an axis-aligned rectangle.
    ///
    /// # Arguments
    ///
    /// * `size` - Width and height
    /// * `center` - If true, center at the origin
    pub fn square(size: DVec2, center: bool) -> GeometryResult<Self> {
        let (x, y) = if center {
            (-size.x / 2.0, -size.y / 2.0)
        } else {
            (0.0, 0.0)
        };

        Self::new(vec![
            DVec2::new(x, y),
            DVec2::new(x + size.x, y),
            DVec2::new(x + size.x, y + size.y),
            DVec2::new(x, y + size.y),
        ])
    }

    /// Creates a regular polygon approximating a circle.
    ///
    /// # Arguments
    ///
    /// * `radius` - Circle radius
    /// * `segments` - Number of segments (clamped to at least 3)
    pub fn circle(radius: f64, segments: u32) -> GeometryResult<Self> {
        let n = segments.max(MIN_CIRCLE_SEGMENTS) as usize;
        let mut vertices = Vec::with_capacity(n);
        for i in 0..n {
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            vertices.push(DVec2::new(radius * theta.cos(), radius * theta.sin()));
        }
        Self::new(vertices)
    }

    /// Returns a copy of this polygon translated by `offset`.
    pub fn translated(&self, offset: DVec2) -> GeometryResult<Self> {
        let mut rings = self.rings.clone();
        for ring in &mut rings {
            for point in ring.iter_mut() {
                *point += offset;
            }
        }
        let outer = rings.remove(0);
        Self::with_holes(outer, rings)
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Returns all rings; index 0 is the outer boundary.
    #[inline]
    pub fn rings(&self) -> &[Vec<DVec2>] {
        &self.rings
    }

    /// Returns the outer boundary ring.
    #[inline]
    pub fn outer(&self) -> &[DVec2] {
        &self.rings[0]
    }

    /// Returns the hole rings.
    #[inline]
    pub fn holes(&self) -> &[Vec<DVec2>] {
        &self.rings[1..]
    }

    /// Returns true if the polygon has holes.
    #[inline]
    pub fn has_holes(&self) -> bool {
        self.rings.len() > 1
    }

    /// Returns the per-ring spans in the flattened vertex layout.
    #[inline]
    pub fn ring_layouts(&self) -> &[RingLayout] {
        &self.layouts
    }

    /// Total point count across all rings.
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    /// Total boundary edge count across all rings.
    ///
    /// Equal to the vertex count, since every ring is implicitly closed.
    pub fn edge_count(&self) -> usize {
        self.vertex_count()
    }

    /// Enclosed area: outer ring area minus hole areas.
    pub fn area(&self) -> f64 {
        let outer = signed_area(&self.rings[0]).abs();
        let holes: f64 = self.rings[1..]
            .iter()
            .map(|ring| signed_area(ring).abs())
            .sum();
        outer - holes
    }

    /// Flattens all rings into 3D vertices at z = 0.
    ///
    /// The result follows the addressing contract used by triangulation
    /// output: ring order, then point order within each ring.
    pub fn flat_vertices(&self) -> Vec<DVec3> {
        let mut vertices = Vec::with_capacity(self.vertex_count());
        for ring in &self.rings {
            for point in ring {
                vertices.push(DVec3::new(point.x, point.y, 0.0));
            }
        }
        vertices
    }
}

/// Validates one ring: point count, finite coordinates, non-zero area.
fn validate_ring(ring: &[DVec2], label: &str) -> GeometryResult<()> {
    if ring.len() < MIN_RING_VERTICES {
        return Err(GeometryError::invalid_polygon(format!(
            "{label} has {} points, need at least {MIN_RING_VERTICES}",
            ring.len()
        )));
    }
    for point in ring {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(GeometryError::invalid_polygon(format!(
                "{label} contains a non-finite coordinate ({}, {})",
                point.x, point.y
            )));
        }
    }
    if signed_area(ring).abs() <= AREA_EPSILON {
        return Err(GeometryError::invalid_polygon(format!(
            "{label} has zero signed area"
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = unit_square();
        assert_relative_eq!(signed_area(&ccw), 1.0);

        let cw: Vec<DVec2> = ccw.into_iter().rev().collect();
        assert_relative_eq!(signed_area(&cw), -1.0);
    }

    #[test]
    fn test_too_few_points_rejected() {
        let result = Polygon::new(vec![DVec2::ZERO, DVec2::X]);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidPolygon { .. })
        ));
    }

    #[test]
    fn test_zero_area_rejected() {
        // Three collinear points
        let result = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
        ]);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidPolygon { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(f64::NAN, 0.0),
            DVec2::new(1.0, 1.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_degenerate_hole_rejected() {
        let hole = vec![DVec2::new(0.2, 0.2), DVec2::new(0.4, 0.2)];
        let result = Polygon::with_holes(unit_square(), vec![hole]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ring_layouts() {
        let hole = vec![
            DVec2::new(0.25, 0.25),
            DVec2::new(0.75, 0.25),
            DVec2::new(0.75, 0.75),
            DVec2::new(0.25, 0.75),
        ];
        let polygon = Polygon::with_holes(unit_square(), vec![hole]).unwrap();

        let layouts = polygon.ring_layouts();
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0], RingLayout { start: 0, len: 4 });
        assert_eq!(layouts[1], RingLayout { start: 4, len: 4 });
        assert_eq!(layouts[1].next(3), 4);
        assert_eq!(polygon.vertex_count(), 8);
        assert_eq!(polygon.edge_count(), 8);
    }

    #[test]
    fn test_area_with_hole() {
        let hole = vec![
            DVec2::new(0.25, 0.25),
            DVec2::new(0.75, 0.25),
            DVec2::new(0.75, 0.75),
            DVec2::new(0.25, 0.75),
        ];
        let polygon = Polygon::with_holes(unit_square(), vec![hole]).unwrap();
        assert_relative_eq!(polygon.area(), 0.75);
    }

    #[test]
    fn test_square_centered() {
        let square = Polygon::square(DVec2::splat(10.0), true).unwrap();
        assert_eq!(square.outer()[0], DVec2::new(-5.0, -5.0));
        assert_eq!(square.outer()[2], DVec2::new(5.0, 5.0));
    }

    #[test]
    fn test_circle() {
        let circle = Polygon::circle(5.0, config::constants::DEFAULT_CIRCLE_SEGMENTS).unwrap();
        assert_eq!(circle.vertex_count(), 32);
        assert_relative_eq!(circle.outer()[0].x, 5.0);
        assert_relative_eq!(circle.outer()[0].y, 0.0);
        // Area approaches PI * r^2 from below
        assert!(circle.area() > 76.0 && circle.area() < 25.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_translated() {
        let square = Polygon::square(DVec2::splat(1.0), false).unwrap();
        let moved = square.translated(DVec2::new(10.0, -2.0)).unwrap();
        assert_eq!(moved.outer()[0], DVec2::new(10.0, -2.0));
        assert_relative_eq!(moved.area(), 1.0);
    }

    #[test]
    fn test_flat_vertices_layout() {
        let hole = vec![
            DVec2::new(0.25, 0.25),
            DVec2::new(0.75, 0.25),
            DVec2::new(0.75, 0.75),
            DVec2::new(0.25, 0.75),
        ];
        let polygon = Polygon::with_holes(unit_square(), vec![hole]).unwrap();
        let vertices = polygon.flat_vertices();

        assert_eq!(vertices.len(), 8);
        assert_eq!(vertices[0], DVec3::new(0.0, 0.0, 0.0));
        // Hole points follow the outer ring's
        assert_eq!(vertices[4], DVec3::new(0.25, 0.25, 0.0));
        assert!(vertices.iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn test_arc_points_quarter() {
        // Quarter circle from (1, 0) to (0, 1) around the origin
        let points = arc_points(DVec2::X, DVec2::Y, DVec2::ZERO, false, 32);
        assert_eq!(points.first(), Some(&DVec2::X));
        assert_eq!(points.last(), Some(&DVec2::Y));
        assert_eq!(points.len(), 9);
        for p in &points {
            assert_relative_eq!(p.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_arc_points_full_circle() {
        let points = arc_points(DVec2::X, DVec2::X, DVec2::ZERO, false, 8);
        // Full circle omits the duplicate closing point
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], DVec2::X);
    }
}
