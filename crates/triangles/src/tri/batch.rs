//! Reductions over a batch of triangles.

use thiserror::Error;

use super::relate::are_similar;
use super::types::Triangle;

/// A batch reduction has no defined result for zero elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no triangles supplied")]
pub struct EmptyBatch;

/// Triangle with the greatest perimeter, by left-to-right reduction: the
/// running best is replaced only by a strictly greater perimeter, so ties
/// keep the earliest element.
pub fn greatest_by_perimeter(triangles: &[Triangle]) -> Result<&Triangle, EmptyBatch> {
    greatest_by(triangles, Triangle::perimeter)
}

/// Triangle with the greatest area, same reduction policy as
/// [`greatest_by_perimeter`].
pub fn greatest_by_area(triangles: &[Triangle]) -> Result<&Triangle, EmptyBatch> {
    greatest_by(triangles, Triangle::area)
}

fn greatest_by(
    triangles: &[Triangle],
    key: impl Fn(&Triangle) -> f64,
) -> Result<&Triangle, EmptyBatch> {
    let (first, rest) = triangles.split_first().ok_or(EmptyBatch)?;
    let mut best = first;
    let mut best_key = key(first);
    for t in rest {
        let k = key(t);
        if k > best_key {
            best = t;
            best_key = k;
        }
    }
    Ok(best)
}

/// Indices (1-based) of every unordered pair that is NOT similar, in
/// increasing `(i, j)` order with `i < j`. O(n²) comparisons; batches are
/// expected to stay small.
pub fn pairwise_not_similar(triangles: &[Triangle]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..triangles.len() {
        for j in i + 1..triangles.len() {
            if !are_similar(&triangles[i], &triangles[j]) {
                pairs.push((i + 1, j + 1));
            }
        }
    }
    pairs
}
