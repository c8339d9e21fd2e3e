//! Configuration constants for cut-plan compilation and rendering.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Standard raw material rod length in feet.
///
/// The optimization service packs pieces onto rods of this length unless a
/// different length is negotiated out of band.
pub const DEFAULT_ROD_LENGTH_FT: f64 = 19.0;

/// Minimum denominator when scaling reused-material pieces.
///
/// A reused group whose pieces sum to less than this many feet is still laid
/// out against this floor, so a single small piece never fills 100% of the
/// bar.
pub const REUSED_SCALE_FLOOR_FT: f64 = 5.0;

/// Width of a rendered rod bar in characters.
pub const ROD_BAR_WIDTH: usize = 60;

/// Upper bound on any single length accepted into a rendered report, in feet.
///
/// Optimizer data beyond this is garbage even if technically finite; the
/// affected material degrades to an error card instead of rendering it.
pub const MAX_REPORT_LENGTH_FT: f64 = 1.0e6;

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}
