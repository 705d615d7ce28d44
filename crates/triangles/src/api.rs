//! Curated flat re-export surface for the engine.
//!
//! Prefer these re-exports at call sites (CLI, benches, examples) so imports
//! stay consistent as the module layout evolves.

// Triangle value, validator, single-triangle operations
pub use crate::tri::{approx_eq, Triangle, REL_TOL};
// Pairwise relations
pub use crate::tri::{are_congruent, are_similar};
// Batch reductions and reports
pub use crate::tri::{
    greatest_by_area, greatest_by_perimeter, info, info_greatest_area, info_greatest_perimeter,
    pairwise_not_similar, pairwise_not_similar_report, EmptyBatch,
};
// Seeded sampler
pub use crate::tri::rand::{draw_batch, draw_triangle, ReplayToken, SampleCfg};
