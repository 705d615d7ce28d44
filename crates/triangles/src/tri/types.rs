//! Triangle value, validation, and single-triangle operations.
//!
//! - `Triangle`: immutable triple of side lengths, no stored angles.
//! - Validation checks side positivity only; the triangle inequality is
//!   deliberately unchecked, so `area` can return NaN for degenerate sides.
//!
//! Code cross-refs: `cmp::approx_eq` (all side/square comparisons).

use nalgebra::Vector3;

use super::cmp::approx_eq;

/// Triangle given by three side lengths.
///
/// Invariants (enforced by callers, not by the constructor):
/// - All sides strictly positive (`is_valid`).
/// - Field order carries no meaning; ascending order is computed on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub sides: Vector3<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(side1: f64, side2: f64, side3: f64) -> Self {
        Self {
            sides: Vector3::new(side1, side2, side3),
        }
    }

    #[inline]
    pub fn side1(&self) -> f64 {
        self.sides.x
    }
    #[inline]
    pub fn side2(&self) -> f64 {
        self.sides.y
    }
    #[inline]
    pub fn side3(&self) -> f64 {
        self.sides.z
    }

    /// True iff all three sides are strictly positive. The sum-of-two-sides
    /// constraint is NOT checked here; downstream operations tolerate the
    /// resulting non-finite values instead.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.sides.x > 0.0 && self.sides.y > 0.0 && self.sides.z > 0.0
    }

    /// Sides in ascending order.
    pub fn sides_sorted(&self) -> [f64; 3] {
        let mut s = [self.sides.x, self.sides.y, self.sides.z];
        s.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        s
    }

    /// Sum of the three sides, in field order. Total for any real inputs.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.sides.x + self.sides.y + self.sides.z
    }

    /// Heron's formula via the semi-perimeter.
    ///
    /// If the sides violate the triangle inequality the radicand is negative
    /// and the result is NaN; that is propagated, not guarded.
    pub fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        (s * (s - self.sides.x) * (s - self.sides.y) * (s - self.sides.z)).sqrt()
    }

    /// True iff some cyclic assignment of one side as hypotenuse satisfies
    /// Pythagoras up to [`approx_eq`]. All three assignments are tried; the
    /// first match wins.
    pub fn is_right_angled(&self) -> bool {
        right_angle_at(self.sides.x, self.sides.y, self.sides.z)
            || right_angle_at(self.sides.y, self.sides.z, self.sides.x)
            || right_angle_at(self.sides.z, self.sides.x, self.sides.y)
    }

    /// All three sides approximately equal (first side is the reference
    /// operand of both comparisons).
    #[inline]
    pub fn is_equilateral(&self) -> bool {
        approx_eq(self.sides.x, self.sides.y) && approx_eq(self.sides.x, self.sides.z)
    }

    /// Some pair of sides approximately equal. An equilateral triangle is
    /// also isosceles under this definition.
    #[inline]
    pub fn is_isosceles(&self) -> bool {
        approx_eq(self.sides.x, self.sides.y)
            || approx_eq(self.sides.x, self.sides.z)
            || approx_eq(self.sides.y, self.sides.z)
    }
}

/// Squared-hypotenuse test for one assignment: the square of `hypotenuse` is
/// the reference operand, compared against `side1² + side2²`.
#[inline]
fn right_angle_at(side1: f64, side2: f64, hypotenuse: f64) -> bool {
    approx_eq(hypotenuse * hypotenuse, side1 * side1 + side2 * side2)
}
