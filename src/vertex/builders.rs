//! Vertex sequence builders used for testing and benchmarking.
//!
//! All builders return the vertices in path order with the first and last
//! vertex pinned to rest (zero constraints for derivative orders 1 through
//! the requested maximum). Random builders own a locally seeded generator so
//! the same arguments always produce the same sequence, independent of call
//! order or any other use of randomness in the process.

use super::{derivative_order, Vertex};
use crate::core::math;
use crate::core::traits::Real;
use num_traits::cast;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimum distance kept between consecutive random waypoints.
const MIN_WAYPOINT_SEPARATION: f64 = 0.2;

/// Create `n_segments + 1` vertices at random positions within the axis
/// aligned box `[pos_min, pos_max]`.
///
/// Interior vertices carry only a position constraint; the first and last
/// vertex are made start/end vertices up to `max_derivative`. Consecutive
/// positions are rejection sampled until they are separated by more than
/// `0.2`, so degenerate segments are never produced.
///
/// # Panics
/// If `n_segments` is zero, the bounds differ in length, the bounds are less
/// than `0.2` apart, or `max_derivative` is zero.
///
/// # Examples
/// ```
/// use polytraj::vertex::{create_random_vertices, derivative_order};
/// let vertices =
///     create_random_vertices(3, 4, &[-5.0, -5.0, 0.0], &[5.0, 5.0, 3.0], 42);
/// assert_eq!(vertices.len(), 5);
/// assert!(vertices[0].has_constraint(derivative_order::JERK));
/// assert_eq!(vertices[1].constraint_count(), 1);
/// ```
pub fn create_random_vertices<T>(
    max_derivative: usize,
    n_segments: usize,
    pos_min: &[T],
    pos_max: &[T],
    seed: u64,
) -> Vec<Vertex<T>>
where
    T: Real,
{
    assert!(n_segments >= 1, "at least one segment is required");
    assert_eq!(
        pos_min.len(),
        pos_max.len(),
        "position bounds must have the same dimension"
    );
    assert!(
        math::dist(pos_min, pos_max) >= T::from_f64(MIN_WAYPOINT_SEPARATION),
        "position bounds are too close together to sample waypoints"
    );
    assert!(max_derivative > 0, "maximum derivative must be positive");

    let dimension = pos_min.len();
    let min_distance = T::from_f64(MIN_WAYPOINT_SEPARATION);
    let mut rng = StdRng::seed_from_u64(seed);

    // Sampling happens in f64 space, one uniform range per axis. An axis
    // whose bounds coincide stays pinned at that coordinate.
    let ranges: Vec<(f64, f64)> = pos_min
        .iter()
        .zip(pos_max)
        .map(|(&lo, &hi)| (cast(lo).unwrap(), cast(hi).unwrap()))
        .collect();
    let sample_position = |rng: &mut StdRng| -> Vec<T> {
        ranges
            .iter()
            .map(|&(lo, hi)| {
                let value = if hi > lo { rng.gen_range(lo..hi) } else { lo };
                T::from_f64(value)
            })
            .collect()
    };

    let n_vertices = n_segments + 1;
    let mut vertices = Vec::with_capacity(n_vertices);

    let mut last_pos = sample_position(&mut rng);
    let mut first = Vertex::new(dimension);
    first.make_start_or_end(&last_pos, max_derivative);
    vertices.push(first);

    for _ in 1..n_vertices {
        let pos = loop {
            let candidate = sample_position(&mut rng);
            if math::dist(&candidate, &last_pos) > min_distance {
                break candidate;
            }
        };

        let mut vertex = Vertex::new(dimension);
        vertex.add_constraint(derivative_order::POSITION, &pos);
        vertices.push(vertex);
        last_pos = pos;
    }

    let last = vertices.last_mut().unwrap();
    last.make_start_or_end(&last_pos, max_derivative);

    vertices
}

/// One dimensional convenience wrapper around [create_random_vertices].
pub fn create_random_vertices_1d<T>(
    max_derivative: usize,
    n_segments: usize,
    pos_min: T,
    pos_max: T,
    seed: u64,
) -> Vec<Vertex<T>>
where
    T: Real,
{
    create_random_vertices(max_derivative, n_segments, &[pos_min], &[pos_max], seed)
}

/// Create a closed square path of side `side_length` around `center`,
/// traversed `rounds` times.
///
/// The square lies in the plane `z = center[2]`; the first corner is both the
/// start and end of the path and is pinned to rest up to `max_derivative`.
/// The result has `4 * rounds + 1` vertices and is fully deterministic.
pub fn create_square_vertices<T>(
    max_derivative: usize,
    center: &[T; 3],
    side_length: T,
    rounds: usize,
) -> Vec<Vertex<T>>
where
    T: Real,
{
    let dimension = center.len();
    let half_side = side_length * T::half();

    let corners = [
        [center[0] - half_side, center[1] - half_side, center[2]],
        [center[0] - half_side, center[1] + half_side, center[2]],
        [center[0] + half_side, center[1] + half_side, center[2]],
        [center[0] + half_side, center[1] - half_side, center[2]],
    ];

    let corner_vertices: Vec<Vertex<T>> = corners
        .iter()
        .map(|corner| {
            let mut v = Vertex::new(dimension);
            v.add_constraint(derivative_order::POSITION, corner);
            v
        })
        .collect();

    let mut vertices = Vec::with_capacity(4 * rounds + 1);
    vertices.push(corner_vertices[0].clone());
    vertices[0].make_start_or_end(&corners[0], max_derivative);

    for _ in 0..rounds {
        vertices.push(corner_vertices[1].clone());
        vertices.push(corner_vertices[2].clone());
        vertices.push(corner_vertices[3].clone());
        vertices.push(corner_vertices[0].clone());
    }

    let last = vertices.last_mut().unwrap();
    last.make_start_or_end(&corners[0], max_derivative);

    vertices
}
