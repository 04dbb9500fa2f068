//! # Triangulation
//!
//! Ear-clipping triangulation of a validated footprint polygon,
//! hole-aware.
//!
//! ## Algorithm
//!
//! 1. Link the outer ring into a circular list, normalized to
//!    counter-clockwise traversal.
//! 2. Splice each hole ring (normalized clockwise) into the outer cycle
//!    through a bridge found by casting a ray in +x from the hole's
//!    rightmost vertex, producing one simple boundary.
//! 3. Repeatedly clip ears until three vertices remain.
//!
//! Nodes carry their original flattened vertex index, so winding
//! normalization never changes output addressing: triangle indices
//! always reference the polygon's flattened (outer ring, then holes in
//! input order) vertex layout.
//!
//! Output triangles wind counter-clockwise in the xy-plane. Output is
//! deterministic for identical input. Worst case O(n²), typical O(n)
//! for mostly-convex boundaries.


use config::constants::AREA_EPSILON;
use glam::DVec2;

use crate::polygon::{signed_area, Polygon};

// =============================================================================
// RESULT TYPE
// =============================================================================

/// Result of triangulating a footprint polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangulation {
    /// Triangles as index triples into the flattened vertex layout
    pub faces: Vec<[u32; 3]>,

    /// Number of best-effort clips taken because no valid ear was found
    /// in a full pass (plus any holes whose bridge search failed).
    ///
    /// Zero for well-formed input. A non-zero count means the boundary
    /// was near-degenerate or self-intersecting and the output is a
    /// best-effort cover rather than an exact triangulation.
    pub fallback_clips: u32,
}

/// Triangulates a polygon into counter-clockwise index triples.
///
/// Polygon validity (ring sizes, finite coordinates, non-zero outer
/// area) is enforced by [`Polygon`] construction, so this operation is
/// total. Near-degenerate boundaries are handled by best-effort
/// clipping, reported through [`Triangulation::fallback_clips`].
///
/// # Example
///
/// ```rust
/// use footprint_mesh::{triangulate, Polygon};
/// use glam::DVec2;
///
/// let square = Polygon::square(DVec2::splat(1.0), false).unwrap();
/// let result = triangulate(&square);
/// assert_eq!(result.faces.len(), 2);
/// assert_eq!(result.fallback_clips, 0);
/// ```
pub fn triangulate(polygon: &Polygon) -> Triangulation {
    let rings = polygon.rings();
    let layouts = polygon.ring_layouts();

    let mut clipper = EarClipper::with_capacity(polygon.vertex_count());

    // Outer ring traversed counter-clockwise
    let outer_reversed = signed_area(&rings[0]) < 0.0;
    let Some((head, mut remaining)) =
        clipper.link_ring(layouts[0].start, &rings[0], outer_reversed)
    else {
        // Unreachable for a validated polygon; nothing sensible to emit
        return Triangulation {
            faces: Vec::new(),
            fallback_clips: 1,
        };
    };

    // Hole rings traversed clockwise
    let mut holes = Vec::new();
    for (ring, layout) in rings[1..].iter().zip(&layouts[1..]) {
        let hole_reversed = signed_area(ring) > 0.0;
        match clipper.link_ring(layout.start, ring, hole_reversed) {
            Some((hole_head, hole_count)) => holes.push((hole_head, hole_count)),
            None => clipper.fallback_clips += 1,
        }
    }
    remaining += clipper.eliminate_holes(head, holes);

    clipper.run(head, remaining);

    Triangulation {
        faces: clipper.faces,
        fallback_clips: clipper.fallback_clips,
    }
}

// =============================================================================
// LINKED VERTEX CYCLE
// =============================================================================

/// One vertex in the doubly-linked boundary cycle.
///
/// Nodes live in a flat arena; `prev`/`next` are arena indices. Removed
/// nodes keep their own links so the clip cursor can step off them.
#[derive(Debug, Clone, Copy)]
struct Node {
    /// Index into the flattened vertex layout
    index: u32,
    point: DVec2,
    prev: usize,
    next: usize,
}

/// Working state for one triangulation run.
struct EarClipper {
    nodes: Vec<Node>,
    faces: Vec<[u32; 3]>,
    fallback_clips: u32,
}

/// Twice the signed area of triangle (a, b, c); positive for a
/// counter-clockwise turn.
#[inline]
fn cross(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Inclusive point-in-triangle test for a counter-clockwise triangle.
/// Points on an edge count as inside.
#[inline]
fn point_in_triangle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
}

impl EarClipper {
    fn with_capacity(vertex_count: usize) -> Self {
        Self {
            // Each bridged hole adds two duplicate nodes
            nodes: Vec::with_capacity(vertex_count + 8),
            faces: Vec::with_capacity(vertex_count),
            fallback_clips: 0,
        }
    }

    #[inline]
    fn point(&self, node: usize) -> DVec2 {
        self.nodes[node].point
    }

    #[inline]
    fn next(&self, node: usize) -> usize {
        self.nodes[node].next
    }

    #[inline]
    fn prev(&self, node: usize) -> usize {
        self.nodes[node].prev
    }

    /// Links one ring into a circular list and returns its head node and
    /// node count, or None if the ring collapses below a triangle.
    ///
    /// Nodes are pushed in traversal order (reversed iteration when
    /// `reversed`), keeping the original flattened index of every point.
    /// Consecutive duplicate points, including a closing duplicate of
    /// the first point, are skipped.
    fn link_ring(
        &mut self,
        start_index: u32,
        ring: &[DVec2],
        reversed: bool,
    ) -> Option<(usize, usize)> {
        let first = self.nodes.len();

        let order: Vec<usize> = if reversed {
            (0..ring.len()).rev().collect()
        } else {
            (0..ring.len()).collect()
        };

        for local in order {
            let point = ring[local];
            if let Some(last) = self.nodes.last() {
                if self.nodes.len() > first && last.point == point {
                    continue;
                }
            }
            self.nodes.push(Node {
                index: start_index + local as u32,
                point,
                prev: 0,
                next: 0,
            });
        }

        // Drop a closing duplicate of the head
        while self.nodes.len() - first >= 2
            && self.nodes[self.nodes.len() - 1].point == self.nodes[first].point
        {
            self.nodes.pop();
        }

        let count = self.nodes.len() - first;
        if count < 3 {
            self.nodes.truncate(first);
            return None;
        }

        let last = self.nodes.len() - 1;
        for i in first..=last {
            self.nodes[i].prev = if i == first { last } else { i - 1 };
            self.nodes[i].next = if i == last { first } else { i + 1 };
        }

        Some((first, count))
    }

    /// Unlinks a node from the cycle. The node keeps its own links so a
    /// cursor standing on it can still step forward.
    fn remove(&mut self, node: usize) {
        let prev = self.nodes[node].prev;
        let next = self.nodes[node].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    // =========================================================================
    // HOLE ELIMINATION
    // =========================================================================

    /// Splices every hole cycle into the outer cycle and returns the
    /// number of nodes added to it (hole nodes plus bridge duplicates).
    ///
    /// Holes are bridged rightmost-anchor first so that earlier bridges
    /// cannot occlude later ones. A hole whose bridge search fails is
    /// skipped and counted as a fallback.
    fn eliminate_holes(&mut self, outer_head: usize, holes: Vec<(usize, usize)>) -> usize {
        // (anchor node, hole node count), sorted by anchor x descending
        let mut anchored: Vec<(usize, usize)> = holes
            .into_iter()
            .map(|(head, count)| (self.rightmost(head), count))
            .collect();
        anchored.sort_by(|a, b| {
            self.point(b.0)
                .x
                .partial_cmp(&self.point(a.0).x)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut added = 0;
        for (anchor, count) in anchored {
            match self.find_bridge(outer_head, anchor) {
                Some(bridge) => {
                    self.split_polygon(bridge, anchor);
                    added += count + 2;
                }
                None => self.fallback_clips += 1,
            }
        }
        added
    }

    /// Node with the maximum x coordinate in a cycle (first hit wins).
    fn rightmost(&self, head: usize) -> usize {
        let mut best = head;
        let mut p = self.next(head);
        while p != head {
            if self.point(p).x > self.point(best).x {
                best = p;
            }
            p = self.next(p);
        }
        best
    }

    /// Finds an outer-cycle node mutually visible from the hole anchor.
    ///
    /// Casts a ray in +x from the anchor: the nearest crossing over an
    /// upward edge yields a candidate endpoint, then the candidate is
    /// refined to the reflex vertex inside the anchor/crossing triangle
    /// with the smallest angular deviation from the ray, if any.
    fn find_bridge(&self, outer_head: usize, anchor: usize) -> Option<usize> {
        let h = self.point(anchor);
        let mut qx = f64::INFINITY;
        let mut bridge: Option<usize> = None;

        let mut p = outer_head;
        loop {
            let next = self.next(p);
            let a = self.point(p);
            let b = self.point(next);
            // Upward edges cross the +x ray on a counter-clockwise cycle
            if h.y >= a.y && h.y <= b.y && b.y != a.y {
                let x = a.x + (h.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if x >= h.x && x < qx {
                    qx = x;
                    bridge = Some(if a.x > b.x { p } else { next });
                    if x == h.x {
                        // Ray hits a boundary vertex exactly
                        return bridge;
                    }
                }
            }
            p = next;
            if p == outer_head {
                break;
            }
        }

        let mut bridge = bridge?;
        let q = DVec2::new(qx, h.y);
        let m = self.point(bridge);
        let mx = m.x;

        // Normalize the (anchor, crossing, candidate) triangle to CCW
        let (t1, t2) = if cross(h, q, m) >= 0.0 { (q, m) } else { (m, q) };
        if cross(h, t1, t2).abs() <= AREA_EPSILON {
            return Some(bridge);
        }

        // A reflex vertex inside the triangle would block the bridge;
        // redirect to the blocking vertex closest to the ray direction.
        // The triangle reaches out to the candidate endpoint's x, which
        // can lie beyond the ray crossing.
        let mut best_tan = f64::INFINITY;
        let mut p = outer_head;
        loop {
            let pt = self.point(p);
            if p != bridge
                && pt != h
                && pt.x > h.x
                && pt.x <= mx
                && cross(self.point(self.prev(p)), pt, self.point(self.next(p))) < 0.0
                && point_in_triangle(h, t1, t2, pt)
            {
                let tan = (h.y - pt.y).abs() / (pt.x - h.x);
                if tan < best_tan || (tan == best_tan && pt.x < self.point(bridge).x) {
                    best_tan = tan;
                    bridge = p;
                }
            }
            p = self.next(p);
            if p == outer_head {
                break;
            }
        }

        Some(bridge)
    }

    /// Splices the cycle containing `b` into the cycle containing `a`
    /// through a bridge edge, duplicating both endpoints.
    fn split_polygon(&mut self, a: usize, b: usize) {
        let a2 = self.nodes.len();
        let b2 = a2 + 1;
        let an = self.nodes[a].next;
        let bp = self.nodes[b].prev;

        self.nodes.push(Node {
            index: self.nodes[a].index,
            point: self.nodes[a].point,
            prev: b2,
            next: an,
        });
        self.nodes.push(Node {
            index: self.nodes[b].index,
            point: self.nodes[b].point,
            prev: bp,
            next: a2,
        });

        self.nodes[a].next = b;
        self.nodes[b].prev = a;
        self.nodes[an].prev = a2;
        self.nodes[bp].next = b2;
    }

    // =========================================================================
    // EAR CLIPPING LOOP
    // =========================================================================

    /// Clips ears until three nodes remain, then emits the final
    /// triangle. Every full pass without progress falls back to
    /// clipping the most convex remaining vertex, which bounds the
    /// total work at O(n²).
    fn run(&mut self, head: usize, count: usize) {
        let mut remaining = count;
        let mut ear = head;
        let mut stalled = 0usize;

        while remaining > 3 {
            if self.is_ear(ear) {
                let prev = self.prev(ear);
                let next = self.next(ear);
                self.faces.push([
                    self.nodes[prev].index,
                    self.nodes[ear].index,
                    self.nodes[next].index,
                ]);
                self.remove(ear);
                remaining -= 1;
                stalled = 0;
                ear = next;
            } else {
                ear = self.next(ear);
                stalled += 1;
                if stalled > remaining {
                    ear = self.fallback_clip(ear);
                    remaining -= 1;
                    stalled = 0;
                }
            }
        }

        let prev = self.prev(ear);
        let next = self.next(ear);
        let area = cross(self.point(prev), self.point(ear), self.point(next));
        // A clockwise final triangle only arises from a self-intersecting
        // boundary; drop it rather than emit a negative-area face
        if area > AREA_EPSILON {
            self.faces.push([
                self.nodes[prev].index,
                self.nodes[ear].index,
                self.nodes[next].index,
            ]);
        } else {
            self.fallback_clips += 1;
        }
    }

    /// A node is an ear when its corner turns counter-clockwise with
    /// non-zero area and no other cycle node lies inside (or on) its
    /// triangle. Nodes coincident with a corner -- bridge duplicates --
    /// do not block.
    fn is_ear(&self, ear: usize) -> bool {
        let prev = self.prev(ear);
        let next = self.next(ear);
        let a = self.point(prev);
        let b = self.point(ear);
        let c = self.point(next);

        if cross(a, b, c) <= AREA_EPSILON {
            return false;
        }

        let mut p = self.next(next);
        while p != prev {
            let pt = self.point(p);
            if pt != a && pt != b && pt != c && point_in_triangle(a, b, c, pt) {
                return false;
            }
            p = self.next(p);
        }
        true
    }

    /// Clips the most convex remaining vertex, emitting its triangle
    /// only when it is counter-clockwise with usable area. Returns the
    /// next cursor position.
    fn fallback_clip(&mut self, start: usize) -> usize {
        let mut best = start;
        let mut best_cross = f64::NEG_INFINITY;
        let mut p = start;
        loop {
            let c = cross(
                self.point(self.prev(p)),
                self.point(p),
                self.point(self.next(p)),
            );
            if c > best_cross {
                best_cross = c;
                best = p;
            }
            p = self.next(p);
            if p == start {
                break;
            }
        }

        if best_cross > AREA_EPSILON {
            self.faces.push([
                self.nodes[self.prev(best)].index,
                self.nodes[best].index,
                self.nodes[self.next(best)].index,
            ]);
        }
        self.fallback_clips += 1;
        self.remove(best);
        self.next(best)
    }
}
