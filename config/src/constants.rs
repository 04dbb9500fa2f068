//! # Configuration Constants
//!
//! Centralized constants for the footprint-mesh pipeline. All geometry
//! calculations, validation thresholds, and tessellation parameters are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Validation**: Polygon well-formedness limits
//! - **Tessellation**: Defaults for curved boundary sampling

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for signed-area degeneracy checks.
///
/// A ring whose signed area has absolute value at or below this threshold
/// is considered degenerate (all points collinear or coincident). Also used
/// by the ear-clipping loop to reject zero-area candidate triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::AREA_EPSILON;
///
/// fn is_degenerate(signed_area: f64) -> bool {
///     signed_area.abs() <= AREA_EPSILON
/// }
///
/// assert!(is_degenerate(0.0));
/// assert!(!is_degenerate(0.5));
/// ```
pub const AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// VALIDATION CONSTANTS
// =============================================================================

/// Minimum number of vertices in a polygon ring.
///
/// A ring with fewer points cannot enclose any area; polygon
/// construction rejects any ring below this limit.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RING_VERTICES;
///
/// let points = 4;
/// assert!(points >= MIN_RING_VERTICES);
/// ```
pub const MIN_RING_VERTICES: usize = 3;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default number of segments when tessellating a full circle.
///
/// Arc tessellation scales this count by the swept angle fraction.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CIRCLE_SEGMENTS;
///
/// let user_segments: Option<u32> = None;
/// let segments = user_segments.unwrap_or(DEFAULT_CIRCLE_SEGMENTS);
/// assert_eq!(segments, 32);
/// ```
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 32;

/// Minimum number of segments for any tessellated curve.
///
/// Fewer than 3 segments cannot approximate a closed curve.
pub const MIN_CIRCLE_SEGMENTS: u32 = 3;
