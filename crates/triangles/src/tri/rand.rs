//! Random valid triangles (point sampling + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for non-degenerate triangles used
//!   by property tests, benches, and examples. Sampling three plane points
//!   and taking the pairwise distances as sides guarantees the triangle
//!   inequality, so every draw passes `is_valid` AND has finite positive
//!   area.
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//! - Near-collinear point triples are redrawn until the doubled triangle
//!   area clears `min_area`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Triangle;

/// Point-sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Points are drawn uniformly from `[-bound, bound]²`.
    pub bound: f64,
    /// Minimum doubled area (parallelogram area of the two edge vectors)
    /// below which a draw is rejected as near-collinear.
    pub min_area: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            bound: 10.0,
            min_area: 1e-3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one non-degenerate triangle: three points in the configured box, side
/// lengths are the pairwise distances.
pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let bound = cfg.bound.max(1e-6);
    loop {
        let p = draw_point(&mut rng, bound);
        let q = draw_point(&mut rng, bound);
        let r = draw_point(&mut rng, bound);
        let doubled_area = parallelogram_area(q - p, r - p).abs();
        if doubled_area < cfg.min_area {
            continue;
        }
        return Triangle::new((q - p).norm(), (r - q).norm(), (p - r).norm());
    }
}

/// Draw `count` triangles under consecutive indices starting at `tok.index`.
pub fn draw_batch(cfg: SampleCfg, tok: ReplayToken, count: usize) -> Vec<Triangle> {
    (0..count as u64)
        .map(|k| {
            draw_triangle(
                cfg,
                ReplayToken {
                    seed: tok.seed,
                    index: tok.index.wrapping_add(k),
                },
            )
        })
        .collect()
}

#[inline]
fn draw_point<R: Rng>(rng: &mut R, bound: f64) -> Vector2<f64> {
    Vector2::new(
        rng.gen_range(-bound..bound),
        rng.gen_range(-bound..bound),
    )
}

/// Signed area of the parallelogram spanned by `a` and `b`.
#[inline]
fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
