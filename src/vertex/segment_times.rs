//! Heuristics allocating a time duration to each segment of a vertex path.
//!
//! All estimators share the same contract: the input holds at least two
//! vertices, every vertex carries a position constraint, and the result holds
//! one strictly positive duration per consecutive vertex pair, in path order.
//! Durations below a small floor are clamped up so that downstream polynomial
//! optimization stays well posed even for degenerate geometry. Callers must
//! pass strictly positive dynamic limits; zero limits would turn the interior
//! arithmetic into divisions by zero.

use super::{derivative_order, Vertex};
use crate::core::math;
use crate::core::traits::Real;

/// Floor applied to every duration by the Euclidean and Baca estimators.
const MIN_SEGMENT_TIME: f64 = 0.01;

/// Floor applied to every duration by the velocity ramp estimator.
const MIN_RAMP_SEGMENT_TIME: f64 = 0.1;

fn position_of<T>(vertex: &Vertex<T>) -> &[T]
where
    T: Real,
{
    vertex
        .constraint(derivative_order::POSITION)
        .expect("every vertex must carry a position constraint")
}

fn check_input<T>(vertices: &[Vertex<T>])
where
    T: Real,
{
    assert!(
        vertices.len() >= 2,
        "at least two vertices are required to form a segment"
    );
}

/// General entry point for segment time estimation.
///
/// Currently this always delegates to [estimate_segment_times_euclidean];
/// `a_max` and `j_max` are accepted for call site compatibility with the
/// richer estimators but are not used.
pub fn estimate_segment_times<T>(vertices: &[Vertex<T>], v_max: T, a_max: T, j_max: T) -> Vec<T>
where
    T: Real,
{
    let _ = (a_max, j_max);
    estimate_segment_times_euclidean(vertices, v_max)
}

/// Estimate segment times from straight line distance at maximum velocity.
///
/// Each duration is `max(0.01, dist / v_max)`. Acceleration is ignored, so
/// the result underestimates the time a real vehicle needs on short segments.
///
/// # Examples
/// ```
/// use polytraj::vertex::{derivative_order, estimate_segment_times_euclidean, Vertex};
/// let positions = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]];
/// let vertices: Vec<Vertex> = positions
///     .iter()
///     .map(|p| {
///         let mut v = Vertex::new(3);
///         v.add_constraint(derivative_order::POSITION, p);
///         v
///     })
///     .collect();
/// assert_eq!(estimate_segment_times_euclidean(&vertices, 1.0), vec![1.0, 1.0, 1.0]);
/// ```
pub fn estimate_segment_times_euclidean<T>(vertices: &[Vertex<T>], v_max: T) -> Vec<T>
where
    T: Real,
{
    check_input(vertices);

    let min_time = T::from_f64(MIN_SEGMENT_TIME);
    let mut segment_times = Vec::with_capacity(vertices.len() - 1);

    for pair in vertices.windows(2) {
        let distance = math::dist(position_of(&pair[0]), position_of(&pair[1]));
        let t = distance / v_max;
        segment_times.push(t.max(min_time));
    }

    segment_times
}

/// Estimate segment times with a trapezoidal velocity ramp per segment.
///
/// Each duration comes from [compute_time_velocity_ramp] clamped to a floor
/// of `0.1`. The `time_factor` parameter is accepted for call site
/// compatibility but is currently not applied to the result.
pub fn estimate_segment_times_velocity_ramp<T>(
    vertices: &[Vertex<T>],
    v_max: T,
    a_max: T,
    time_factor: T,
) -> Vec<T>
where
    T: Real,
{
    let _ = time_factor;
    check_input(vertices);

    let min_time = T::from_f64(MIN_RAMP_SEGMENT_TIME);
    let mut segment_times = Vec::with_capacity(vertices.len() - 1);

    for pair in vertices.windows(2) {
        let t = compute_time_velocity_ramp(position_of(&pair[0]), position_of(&pair[1]), v_max, a_max);
        segment_times.push(t.max(min_time));
    }

    segment_times
}

/// Time to traverse the straight line from `start` to `goal` with a
/// trapezoidal (or, on short segments, triangular) velocity profile.
///
/// The vehicle accelerates at `a_max` towards `v_max`, cruises if the
/// distance allows reaching `v_max` at all, and decelerates symmetrically.
/// The two branches agree at the boundary distance `v_max^2 / a_max`.
pub fn compute_time_velocity_ramp<T>(start: &[T], goal: &[T], v_max: T, a_max: T) -> T
where
    T: Real,
{
    let distance = math::dist(start, goal);
    // Time and distance spent accelerating from rest to maximum velocity.
    let acc_time = v_max / a_max;
    let acc_distance = T::half() * v_max * acc_time;

    if distance < T::two() * acc_distance {
        // Too short to reach maximum velocity: triangular profile.
        T::two() * (distance / a_max).sqrt()
    } else {
        // Accelerate, cruise, decelerate.
        T::two() * acc_time + (distance - T::two() * acc_distance) / v_max
    }
}

/// Estimate segment times with acceleration ramps scaled by how sharply the
/// path turns at each vertex (after Baca et al.).
///
/// For each segment an entry and an exit coefficient in `[0, 1]` are derived
/// from the angle between the adjacent path directions: `1` for a full
/// direction reversal or an open path end (full ramp needed), `0` for
/// straight continuation (no ramp needed). Each coefficient scales a nominal
/// acceleration phase `v_max / a_max + a_max / j_max`, capped by what the
/// segment distance can justify (`sqrt(dist / a_max)`). Jerk phase durations
/// are modeled and capped the same way but are not currently part of the
/// returned total. The cruise phase covers the remaining distance at
/// `v_max`. Durations are floored at `0.01`.
pub fn estimate_segment_times_baca<T>(vertices: &[Vertex<T>], v_max: T, a_max: T, j_max: T) -> Vec<T>
where
    T: Real,
{
    check_input(vertices);

    let min_time = T::from_f64(MIN_SEGMENT_TIME);
    let nominal_acc_time = v_max / a_max + a_max / j_max;
    let nominal_jerk_time = T::two() * (a_max / j_max);
    let acc_time_cap = |distance: T| (distance / a_max).sqrt();
    let jerk_time_cap = (v_max / j_max).sqrt();

    // Coefficient scaling the ramp at a vertex from the unit directions of
    // the path before and after it: 1 - max(0, dot).
    let turn_coefficient = |incoming: &[T], outgoing: &[T]| -> T {
        let scalar = math::dot(&math::normalized(incoming), &math::normalized(outgoing));
        T::one() - scalar.max(T::zero())
    };

    let n = vertices.len();
    let mut segment_times = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        let start = position_of(&vertices[i]);
        let end = position_of(&vertices[i + 1]);
        let distance = math::dist(start, end);

        // Entry ramp at vertex i: scaled by the turn from the previous
        // segment, or the full ramp at the start of the path.
        let (entry_acc_time, _entry_jerk_time) = if i == 0 {
            (nominal_acc_time, nominal_jerk_time)
        } else {
            let prev = position_of(&vertices[i - 1]);
            let coeff = turn_coefficient(&math::sub(start, prev), &math::sub(end, start));
            (coeff * nominal_acc_time, coeff * nominal_jerk_time)
        };

        // Exit ramp at vertex i + 1: scaled by the turn into the next
        // segment, or the full ramp at the end of the path.
        let (exit_acc_time, _exit_jerk_time) = if i == n - 2 {
            (nominal_acc_time, nominal_jerk_time)
        } else {
            let post = position_of(&vertices[i + 2]);
            let coeff = turn_coefficient(&math::sub(end, start), &math::sub(post, end));
            (coeff * nominal_acc_time, coeff * nominal_jerk_time)
        };

        let entry_acc_time = entry_acc_time.min(acc_time_cap(distance));
        let exit_acc_time = exit_acc_time.min(acc_time_cap(distance));
        let _entry_jerk_time = _entry_jerk_time.min(jerk_time_cap);
        let _exit_jerk_time = _exit_jerk_time.min(jerk_time_cap);

        // Whatever is left of the segment after accelerating to v_max is
        // covered at cruise speed; short segments never cruise.
        let cruise_time = if distance - v_max * v_max / a_max < T::zero() {
            distance / v_max
        } else {
            (distance - v_max * v_max / a_max) / v_max
        };

        let t = cruise_time + entry_acc_time + exit_acc_time;
        segment_times.push(t.max(min_time));
    }

    segment_times
}
