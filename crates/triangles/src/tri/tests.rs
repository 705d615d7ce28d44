use super::rand::{draw_batch, draw_triangle, ReplayToken, SampleCfg};
use super::*;
use proptest::prelude::*;

#[test]
fn validator_checks_positivity_only() {
    assert!(!Triangle::new(0.0, 5.0, 5.0).is_valid());
    assert!(!Triangle::new(3.0, -4.0, 5.0).is_valid());
    assert!(Triangle::new(5.0, 5.0, 5.0).is_valid());
    // Positive sides violating the triangle inequality still validate.
    assert!(Triangle::new(1.0, 1.0, 10.0).is_valid());
}

#[test]
fn approx_eq_scales_tolerance_by_first_operand() {
    assert!(approx_eq(1.0, 1.0));
    assert!(approx_eq(1.0, 1.0 + 5e-6));
    assert!(!approx_eq(1.0, 1.1));
    // The window is a * REL_TOL, so swapping operands can flip the result:
    // 1.0 < 100000 * 1e-5 is false, 1.0 < 100001 * 1e-5 is true.
    assert!(!approx_eq(100000.0, 100001.0));
    assert!(approx_eq(100001.0, 100000.0));
    // Non-positive first operand gives an empty window.
    assert!(!approx_eq(-1.0, -1.0));
    assert!(!approx_eq(0.0, 0.0));
}

#[test]
fn perimeter_is_exact_sum() {
    let t = Triangle::new(3.0, 4.0, 5.0);
    assert_eq!(t.perimeter(), 12.0);
}

#[test]
fn area_heron_right_triangle() {
    let t = Triangle::new(3.0, 4.0, 5.0);
    assert!((t.area() - 6.0).abs() < 1e-12);
}

#[test]
fn area_degenerate_sides_propagate_nan() {
    // 1 + 1 < 10: negative radicand, NaN is passed through, not guarded.
    assert!(Triangle::new(1.0, 1.0, 10.0).area().is_nan());
}

#[test]
fn right_angle_found_in_any_position() {
    assert!(Triangle::new(3.0, 4.0, 5.0).is_right_angled());
    assert!(Triangle::new(5.0, 3.0, 4.0).is_right_angled());
    assert!(Triangle::new(4.0, 5.0, 3.0).is_right_angled());
    assert!(!Triangle::new(2.0, 2.0, 3.0).is_right_angled());
}

#[test]
fn equilateral_and_isosceles() {
    let eq = Triangle::new(5.0, 5.0, 5.0);
    assert!(eq.is_equilateral());
    assert!(eq.is_isosceles());

    assert!(!Triangle::new(5.0, 5.0, 4.0).is_equilateral());
    assert!(Triangle::new(5.0, 5.0, 4.0).is_isosceles());
    assert!(Triangle::new(5.0, 4.0, 5.0).is_isosceles());
    assert!(Triangle::new(4.0, 5.0, 5.0).is_isosceles());
    assert!(!Triangle::new(3.0, 4.0, 5.0).is_isosceles());
}

#[test]
fn congruence_is_a_perimeter_proxy() {
    let t = Triangle::new(3.0, 4.0, 5.0);
    assert!(are_congruent(&t, &t));
    // Different shape, same perimeter: still "congruent" by contract.
    let other = Triangle::new(4.5, 3.5, 4.0);
    assert_eq!(other.perimeter(), 12.0);
    assert!(are_congruent(&t, &other));
    assert!(!are_congruent(&t, &Triangle::new(1.0, 1.0, 1.0)));
}

#[test]
fn similar_triangles_scale_and_rotate() {
    let t = Triangle::new(3.0, 4.0, 5.0);
    assert!(are_similar(&t, &t));
    assert!(are_similar(&t, &Triangle::new(6.0, 8.0, 10.0)));
    // Cyclic rotation of the second triangle's sides.
    assert!(are_similar(&t, &Triangle::new(8.0, 10.0, 6.0)));
    assert!(are_similar(&t, &Triangle::new(10.0, 6.0, 8.0)));
    assert!(!are_similar(&t, &Triangle::new(1.0, 1.0, 1.0)));
}

#[test]
fn similar_checks_only_cyclic_alignments() {
    // Same side multiset, but the correspondence needs a swap, not a
    // rotation; the three-alignment check reports non-similar.
    let t = Triangle::new(3.0, 4.0, 5.0);
    assert!(!are_similar(&t, &Triangle::new(4.0, 3.0, 5.0)));
}

#[test]
fn greatest_by_perimeter_reduction() {
    let ts = [
        Triangle::new(3.0, 4.0, 5.0),
        Triangle::new(1.0, 1.0, 1.0),
        Triangle::new(10.0, 10.0, 10.0),
    ];
    let best = greatest_by_perimeter(&ts).unwrap();
    assert_eq!(best.perimeter(), 30.0);

    // Ties keep the earliest element.
    let tied = [Triangle::new(3.0, 4.0, 5.0), Triangle::new(5.0, 4.0, 3.0)];
    let best = greatest_by_perimeter(&tied).unwrap();
    assert_eq!(best.sides_sorted(), [3.0, 4.0, 5.0]);
    assert!(std::ptr::eq(best, &tied[0]));

    assert_eq!(greatest_by_perimeter(&[]), Err(EmptyBatch));
}

#[test]
fn greatest_by_area_reduction() {
    let ts = [Triangle::new(3.0, 4.0, 5.0), Triangle::new(6.0, 8.0, 10.0)];
    let best = greatest_by_area(&ts).unwrap();
    assert!(std::ptr::eq(best, &ts[1]));
    assert_eq!(greatest_by_area(&[]), Err(EmptyBatch));
}

#[test]
fn info_layout_is_exact() {
    let t = Triangle::new(3.0, 4.0, 5.0);
    assert_eq!(
        info(&t),
        "Triangle: \n(3, 4, 5)\n(0.25, 0.33, 0.42)\n\nArea = 6.00\nPerimeter = 12"
    );
    // Sides are sorted for display regardless of field order.
    assert_eq!(info(&Triangle::new(5.0, 3.0, 4.0)), info(&t));
}

#[test]
fn info_greatest_reports() {
    let ts = [
        Triangle::new(3.0, 4.0, 5.0),
        Triangle::new(1.0, 1.0, 1.0),
        Triangle::new(10.0, 10.0, 10.0),
    ];
    assert_eq!(
        info_greatest_perimeter(&ts).unwrap(),
        info(&Triangle::new(10.0, 10.0, 10.0))
    );
    assert_eq!(
        info_greatest_area(&ts).unwrap(),
        info(&Triangle::new(10.0, 10.0, 10.0))
    );
    assert_eq!(info_greatest_perimeter(&[]), Err(EmptyBatch));
}

#[test]
fn pairwise_report_example() {
    let ts = [
        Triangle::new(3.0, 4.0, 5.0),
        Triangle::new(6.0, 8.0, 10.0),
        Triangle::new(1.0, 1.0, 1.0),
    ];
    assert_eq!(pairwise_not_similar(&ts), vec![(1, 3), (2, 3)]);
    assert_eq!(pairwise_not_similar_report(&ts), "(1, 3)\n(2, 3)");

    // All-similar batches and short batches report nothing.
    let similar = [Triangle::new(3.0, 4.0, 5.0), Triangle::new(6.0, 8.0, 10.0)];
    assert_eq!(pairwise_not_similar_report(&similar), "");
    assert_eq!(pairwise_not_similar_report(&[]), "");
}

#[test]
fn sampler_is_replayable() {
    let cfg = SampleCfg::default();
    let tok = ReplayToken { seed: 7, index: 3 };
    assert_eq!(draw_triangle(cfg, tok), draw_triangle(cfg, tok));
    let batch = draw_batch(cfg, ReplayToken { seed: 7, index: 0 }, 8);
    assert_eq!(batch.len(), 8);
    assert_eq!(batch[3], draw_triangle(cfg, tok));
}

proptest! {
    #[test]
    fn sampled_triangles_are_valid_with_finite_area(seed in any::<u64>(), index in any::<u64>()) {
        let t = draw_triangle(SampleCfg::default(), ReplayToken { seed, index });
        prop_assert!(t.is_valid());
        let area = t.area();
        prop_assert!(area.is_finite());
        prop_assert!(area > 0.0);
    }

    #[test]
    fn perimeter_equals_side_sum(seed in any::<u64>(), index in any::<u64>()) {
        let t = draw_triangle(SampleCfg::default(), ReplayToken { seed, index });
        prop_assert_eq!(t.perimeter(), t.side1() + t.side2() + t.side3());
    }

    #[test]
    fn equilateral_implies_isosceles(side in 1e-3..1e6f64) {
        let t = Triangle::new(side, side, side);
        prop_assert!(t.is_equilateral());
        prop_assert!(t.is_isosceles());
    }

    #[test]
    fn similarity_and_congruence_are_reflexive(seed in any::<u64>(), index in any::<u64>()) {
        let t = draw_triangle(SampleCfg::default(), ReplayToken { seed, index });
        prop_assert!(are_similar(&t, &t));
        prop_assert!(are_congruent(&t, &t));
    }

    #[test]
    fn uniform_scaling_preserves_similarity(
        seed in any::<u64>(),
        index in any::<u64>(),
        scale in 1e-2..1e3f64,
    ) {
        let t = draw_triangle(SampleCfg::default(), ReplayToken { seed, index });
        let scaled = Triangle::new(t.side1() * scale, t.side2() * scale, t.side3() * scale);
        prop_assert!(are_similar(&t, &scaled));
    }
}
