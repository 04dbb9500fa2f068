//! # Footprint Mesh
//!
//! Polygon triangulation and extrusion engine. Converts a 2D footprint
//! (an outer boundary plus optional holes) into a triangulated flat mesh
//! and, on demand, into a closed 3D solid.
//!
//! ## Architecture
//!
//! ```text
//! Polygon (validated rings) → Triangulator (ear clipping) → flat Mesh
//!                                      ↓
//!                             Extruder (caps + walls) → solid Mesh
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Triangulation**: Ear clipping over a linked vertex cycle, with
//!   hole bridging
//! - **Extrusion**: Vertex duplication, cap winding flips, per-ring
//!   side-wall stitching
//!
//! ## Usage
//!
//! ```rust
//! use footprint_mesh::{Geometry, Polygon};
//! use glam::DVec2;
//!
//! let square = Polygon::square(DVec2::splat(1.0), false).unwrap();
//! let geometry = Geometry::new(square);
//!
//! assert_eq!(geometry.faces().len(), 2);
//! let solid = geometry.extrude(1.0).unwrap();
//! assert_eq!(solid.vertex_count(), 8);
//! assert_eq!(solid.triangle_count(), 12);
//! ```

pub mod buffers;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod ops;
pub mod polygon;

pub use buffers::MeshBuffers;
pub use error::{GeometryError, GeometryResult};
pub use geometry::Geometry;
pub use mesh::Mesh;
pub use ops::extrude::{extrude, Orientation};
pub use ops::triangulate::{triangulate, Triangulation};
pub use polygon::{Polygon, RingLayout};
