//! Pairwise relations between two triangles.
//!
//! Both relations are logical proxies with observable quirks to keep:
//! - Congruence compares perimeters only (two non-congruent triangles with
//!   the same perimeter count as congruent).
//! - Similarity tries the three cyclic side alignments, never all six
//!   permutations, so mirrored orientations can be reported non-similar.

use super::cmp::approx_eq;
use super::types::Triangle;

/// Perimeter-proxy congruence: `approx_eq(perimeter(x), perimeter(y))`, with
/// the left triangle's perimeter as the reference operand.
#[inline]
pub fn are_congruent(x: &Triangle, y: &Triangle) -> bool {
    approx_eq(x.perimeter(), y.perimeter())
}

/// Similarity under one of the three cyclic alignments of `b`'s sides:
/// `(1,2,3)`, `(2,3,1)`, `(3,1,2)`. For each alignment the ratio
/// `a.side1 / b.side<first>` is the reference operand of both checks.
pub fn are_similar(a: &Triangle, b: &Triangle) -> bool {
    ratios_match(a, b.side1(), b.side2(), b.side3())
        || ratios_match(a, b.side2(), b.side3(), b.side1())
        || ratios_match(a, b.side3(), b.side1(), b.side2())
}

#[inline]
fn ratios_match(a: &Triangle, b1: f64, b2: f64, b3: f64) -> bool {
    let r = a.side1() / b1;
    approx_eq(r, a.side2() / b2) && approx_eq(r, a.side3() / b3)
}
