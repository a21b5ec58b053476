//! Capability traits for external polynomial trajectory optimizers.
//!
//! This crate produces the inputs of a polynomial optimizer (a vertex
//! sequence plus one duration per segment) without depending on any concrete
//! optimizer implementation. The traits below describe the surface such an
//! implementation must expose so that benchmarking and comparison code can be
//! written against the interface alone, with linear and nonlinear back ends
//! freely substituted for each other.

use crate::core::traits::Real;
use crate::vertex::Vertex;

/// A polynomial trajectory optimizer consuming a vertex sequence and segment
/// times.
///
/// Implementations are expected to uphold the same input contract as the
/// segment time estimators: `vertices.len() >= 2`, one segment time per
/// consecutive vertex pair, identical dimension across all vertices.
pub trait TrajectoryOptimizer<T>
where
    T: Real,
{
    /// The piecewise polynomial trajectory type produced by this optimizer.
    type Trajectory;

    /// Set up the optimization problem from the waypoints, the per segment
    /// durations, and the highest derivative order to optimize against.
    fn setup(&mut self, vertices: &[Vertex<T>], segment_times: &[T], max_derivative_order: usize);

    /// Run the optimization, returning whether it succeeded.
    fn solve(&mut self) -> bool;

    /// Extract the trajectory of the last successful [solve](Self::solve).
    fn trajectory(&self) -> Self::Trajectory;
}

/// Extension for optimizers that accept dynamic constraints, e.g. a nonlinear
/// back end refining segment times under velocity and acceleration bounds.
pub trait ConstrainedTrajectoryOptimizer<T>: TrajectoryOptimizer<T>
where
    T: Real,
{
    /// Bound the magnitude of the given derivative over the whole trajectory.
    fn add_maximum_magnitude_constraint(&mut self, derivative_order: usize, maximum_magnitude: T);
}
