//! Text reports rendered by the engine.
//!
//! The layouts are part of the wire contract and are reproduced exactly:
//! line endings are `\n`, `info` keeps the trailing space after the header
//! colon and ends without a newline, and the pairwise report joins its lines
//! with no trailing terminator.

use std::fmt::Write;

use super::batch::{greatest_by_area, greatest_by_perimeter, pairwise_not_similar, EmptyBatch};
use super::types::Triangle;

/// Multi-line description of one triangle: sides ascending, each sorted side
/// divided by the perimeter (2 decimals), area (2 decimals), perimeter with
/// default float formatting.
pub fn info(t: &Triangle) -> String {
    let perimeter = t.perimeter();
    let [a, b, c] = t.sides_sorted();

    let mut out = String::new();
    let _ = writeln!(out, "Triangle: ");
    let _ = writeln!(out, "({a}, {b}, {c})");
    let _ = writeln!(
        out,
        "({:.2}, {:.2}, {:.2})",
        a / perimeter,
        b / perimeter,
        c / perimeter
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Area = {:.2}", t.area());
    let _ = write!(out, "Perimeter = {perimeter}");
    out
}

/// [`info`] of the greatest-perimeter triangle in the batch.
pub fn info_greatest_perimeter(triangles: &[Triangle]) -> Result<String, EmptyBatch> {
    greatest_by_perimeter(triangles).map(info)
}

/// [`info`] of the greatest-area triangle in the batch.
pub fn info_greatest_area(triangles: &[Triangle]) -> Result<String, EmptyBatch> {
    greatest_by_area(triangles).map(info)
}

/// One line `"(i, j)"` (1-based) per non-similar pair, in increasing order,
/// no trailing newline. Empty string when nothing is reported.
pub fn pairwise_not_similar_report(triangles: &[Triangle]) -> String {
    let lines: Vec<String> = pairwise_not_similar(triangles)
        .into_iter()
        .map(|(i, j)| format!("({i}, {j})"))
        .collect();
    lines.join("\n")
}
