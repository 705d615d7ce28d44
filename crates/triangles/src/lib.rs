//! Triangle geometry engine.
//!
//! Purpose
//! - Pure, stateless computations over triangles given by three side lengths:
//!   perimeter, Heron area, right-angle/equilateral/isosceles classification,
//!   congruence and similarity between two triangles, and batch reductions
//!   (greatest perimeter/area, pairwise non-similarity report).
//!
//! API Policy
//! - Every operation is a synchronous, side-effect-free function. Callers
//!   (the CLI shim, tests, benches) validate side positivity with
//!   [`tri::Triangle::is_valid`] before invoking anything else; the engine
//!   itself never re-validates and never does I/O.
//! - Degenerate geometry (positive sides violating the triangle inequality)
//!   is not rejected: [`tri::Triangle::area`] yields NaN and callers must
//!   tolerate non-finite results.

pub mod api;
pub mod tri;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use tri::{approx_eq, are_congruent, are_similar, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::tri::rand::{draw_batch, draw_triangle, ReplayToken, SampleCfg};
    pub use crate::tri::{
        approx_eq, are_congruent, are_similar, greatest_by_area, greatest_by_perimeter, info,
        info_greatest_area, info_greatest_perimeter, pairwise_not_similar,
        pairwise_not_similar_report, EmptyBatch, Triangle,
    };
}
