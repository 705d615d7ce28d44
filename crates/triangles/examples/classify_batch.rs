//! Batch classification probe over sampled triangles.
//!
//! Purpose
//! - Provide a reproducible data point for "how long do the batch reductions
//!   take on a realistic batch?" and show the full operation set on real
//!   draws.
//!
//! Why this shape
//! - The sampler builds sides from three plane points, so every draw is a
//!   valid, non-degenerate triangle and the reductions run unguarded.

use std::time::Instant;

use triangles::api::{
    draw_batch, info_greatest_perimeter, pairwise_not_similar_report, ReplayToken, SampleCfg,
};

fn main() {
    let batch = draw_batch(SampleCfg::default(), ReplayToken { seed: 42, index: 0 }, 16);

    for (k, t) in batch.iter().enumerate() {
        println!(
            "triangle={} perimeter={:.4} area={:.4} right_angled={} isosceles={}",
            k + 1,
            t.perimeter(),
            t.area(),
            t.is_right_angled(),
            t.is_isosceles()
        );
    }

    let start = Instant::now();
    let best = info_greatest_perimeter(&batch).expect("batch is non-empty");
    let best_elapsed = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let report = pairwise_not_similar_report(&batch);
    let pairs_elapsed = start.elapsed().as_secs_f64() * 1e3;

    println!("\n{best}\n");
    println!("non_similar_pairs={}", report.lines().count());
    println!("greatest_time_ms={best_elapsed:.3}");
    println!("pairwise_time_ms={pairs_elapsed:.3}");
}
