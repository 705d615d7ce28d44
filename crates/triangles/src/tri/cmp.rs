//! Relative-tolerance comparison used by every geometric equality check.

/// Relative tolerance for [`approx_eq`].
pub const REL_TOL: f64 = 1e-5;

/// Approximate equality with the tolerance scaled by the FIRST operand:
/// `|a - b| < a * REL_TOL`.
///
/// The relation is not symmetric: `approx_eq(a, b)` and `approx_eq(b, a)` can
/// disagree when the magnitudes differ, and for `a <= 0` the window is empty
/// so the result is always false. Call sites pass the reference quantity
/// (squared hypotenuse, reference ratio, left perimeter) first; keep that
/// order when adding new checks.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < a * REL_TOL
}
