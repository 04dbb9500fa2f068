//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_area_epsilon_tighter_than_epsilon() {
    assert!(
        AREA_EPSILON <= EPSILON,
        "AREA_EPSILON should be at most EPSILON"
    );
}

// =============================================================================
// VALIDATION TESTS
// =============================================================================

#[test]
fn test_min_ring_vertices_is_triangle() {
    // A triangle is the smallest ring that encloses area
    assert_eq!(MIN_RING_VERTICES, 3);
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_circle_segment_bounds() {
    assert!(MIN_CIRCLE_SEGMENTS >= 3);
    assert!(DEFAULT_CIRCLE_SEGMENTS >= MIN_CIRCLE_SEGMENTS);
}
