//! Triangle values and the operations over them.
//!
//! Purpose
//! - Provide a single immutable [`Triangle`] value (three side lengths) plus
//!   the full operation set: validation, perimeter, Heron area,
//!   classification predicates, pairwise congruence/similarity, and the
//!   batch reductions with their text reports.
//!
//! Why this design
//! - All equality between derived quantities goes through the one explicit
//!   relative-tolerance helper [`approx_eq`]; its asymmetry (tolerance scaled
//!   by the first operand) is part of the observable contract, so no
//!   `PartialEq` impls or operator sugar hide the operand order.
//! - Batch reductions return a typed [`EmptyBatch`] error rather than a
//!   silent default for zero-length input.
//!
//! Code cross-refs: `types::Triangle`, `cmp::approx_eq`, `relate`, `batch`,
//! `report`, `rand`.

mod batch;
mod cmp;
pub mod rand;
mod relate;
mod report;
mod types;

pub use batch::{greatest_by_area, greatest_by_perimeter, pairwise_not_similar, EmptyBatch};
pub use cmp::{approx_eq, REL_TOL};
pub use relate::{are_congruent, are_similar};
pub use report::{
    info, info_greatest_area, info_greatest_perimeter, pairwise_not_similar_report,
};
pub use types::Triangle;

#[cfg(test)]
mod tests;
