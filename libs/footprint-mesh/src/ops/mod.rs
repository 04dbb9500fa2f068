//! # Geometry Operations
//!
//! The two core operations over validated polygons:
//! - **triangulate**: Ear-clipping planar triangulation with hole support
//! - **extrude**: 2D footprint to closed 3D solid

pub mod extrude;
pub mod triangulate;
