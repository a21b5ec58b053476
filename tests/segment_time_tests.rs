use polytraj::core::traits::FuzzyEq;
use polytraj::vertex::{
    compute_time_velocity_ramp, create_random_vertices, estimate_segment_times,
    estimate_segment_times_baca, estimate_segment_times_euclidean,
    estimate_segment_times_velocity_ramp, derivative_order, Vertex,
};

fn path(points: &[[f64; 3]]) -> Vec<Vertex> {
    points
        .iter()
        .map(|p| {
            let mut v = Vertex::new(3);
            v.add_constraint(derivative_order::POSITION, p);
            v
        })
        .collect()
}

#[test]
fn all_estimators_return_positive_times() {
    let vertices = create_random_vertices(4, 12, &[-10.0, -10.0, 0.0], &[10.0, 10.0, 5.0], 321);
    let n_segments = vertices.len() - 1;

    let results = [
        estimate_segment_times(&vertices, 2.0, 2.0, 4.0),
        estimate_segment_times_euclidean(&vertices, 2.0),
        estimate_segment_times_velocity_ramp(&vertices, 2.0, 2.0, 1.0),
        estimate_segment_times_baca(&vertices, 2.0, 2.0, 4.0),
    ];

    for times in &results {
        assert_eq!(times.len(), n_segments);
        assert!(times.iter().all(|&t| t > 0.0));
    }
}

#[test]
fn euclidean_two_vertex_exact() {
    let vertices = path(&[[0.0, 0.0, 0.0], [3.0, 4.0, 0.0]]);
    let times = estimate_segment_times_euclidean(&vertices, 2.0);
    assert_eq!(times, vec![2.5]);
}

#[test]
fn euclidean_clamps_tiny_segments() {
    let vertices = path(&[[0.0, 0.0, 0.0], [0.001, 0.0, 0.0]]);
    let times = estimate_segment_times_euclidean(&vertices, 1.0);
    assert_eq!(times, vec![0.01]);
}

#[test]
fn euclidean_unit_square() {
    let vertices = path(&[
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
    ]);
    let times = estimate_segment_times_euclidean(&vertices, 1.0);
    assert_eq!(times, vec![1.0, 1.0, 1.0]);
}

#[test]
fn dispatch_wrapper_matches_euclidean() {
    let vertices = create_random_vertices(3, 8, &[-4.0, -4.0], &[4.0, 4.0], 7);
    // The dynamic limits beyond v_max make no difference to the dispatcher.
    assert_eq!(
        estimate_segment_times(&vertices, 1.5, 0.1, 0.1),
        estimate_segment_times_euclidean(&vertices, 1.5)
    );
    assert_eq!(
        estimate_segment_times(&vertices, 1.5, 100.0, 100.0),
        estimate_segment_times_euclidean(&vertices, 1.5)
    );
}

#[test]
fn velocity_ramp_triangular_profile() {
    // Too short to reach v_max: t = 2 * sqrt(d / a).
    let t = compute_time_velocity_ramp(&[0.0], &[1.0], 10.0, 1.0);
    assert!(t.fuzzy_eq(2.0));
}

#[test]
fn velocity_ramp_trapezoidal_profile() {
    // d = 10, acc/dec cover v^2/a = 4 of it, cruise covers 6 at v = 2.
    let t = compute_time_velocity_ramp(&[0.0], &[10.0], 2.0, 1.0);
    assert!(t.fuzzy_eq(2.0 * 2.0 + 6.0 / 2.0));
}

#[test]
fn velocity_ramp_branches_agree_at_boundary() {
    // Boundary distance between the profiles: d = v_max^2 / a_max.
    let v_max = 2.0;
    let a_max = 1.0;
    let d = v_max * v_max / a_max;

    let triangular = 2.0 * f64::sqrt(d / a_max);
    let trapezoidal = 2.0 * v_max / a_max;
    assert!(triangular.fuzzy_eq(trapezoidal));

    let t = compute_time_velocity_ramp(&[0.0], &[d], v_max, a_max);
    assert!(t.fuzzy_eq(triangular));
}

#[test]
fn velocity_ramp_estimator_floors_at_one_tenth() {
    let vertices = path(&[[0.0, 0.0, 0.0], [0.001, 0.0, 0.0]]);
    let times = estimate_segment_times_velocity_ramp(&vertices, 1.0, 1.0, 1.0);
    assert_eq!(times, vec![0.1]);
}

#[test]
fn baca_straight_path_has_no_interior_ramp() {
    // Collinear path: the interior vertex contributes a zero turn
    // coefficient, so each segment only carries the ramp of its open end,
    // capped at sqrt(d / a_max) = 1.
    let vertices = path(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
    let times = estimate_segment_times_baca(&vertices, 1.0, 1.0, 1.0);

    assert_eq!(times.len(), 2);
    assert!(times[0].fuzzy_eq(1.0));
    assert!(times[1].fuzzy_eq(1.0));
}

#[test]
fn baca_direction_reversal_uses_full_ramp() {
    // The path doubles back on itself, so the interior vertex gets the full
    // turn coefficient and both segments carry two capped ramps.
    let vertices = path(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
    let times = estimate_segment_times_baca(&vertices, 1.0, 1.0, 1.0);

    assert!(times[0].fuzzy_eq(2.0));
    assert!(times[1].fuzzy_eq(2.0));
}

#[test]
fn baca_long_segment_cruises() {
    // Single segment of length 10 at v = 1, a = 1, j = 1: full ramps of
    // nominal length 2 capped at sqrt(10), cruise (10 - 1) / 1 = 9.
    let vertices = path(&[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]]);
    let times = estimate_segment_times_baca(&vertices, 1.0, 1.0, 1.0);
    assert!(times[0].fuzzy_eq(9.0 + 2.0 + 2.0));
}

#[test]
#[should_panic]
fn estimators_need_two_vertices() {
    let vertices = path(&[[0.0, 0.0, 0.0]]);
    estimate_segment_times_euclidean(&vertices, 1.0);
}

#[test]
#[should_panic]
fn estimators_need_position_constraints() {
    let vertices = vec![Vertex::new(3), Vertex::new(3)];
    estimate_segment_times_euclidean(&vertices, 1.0);
}
