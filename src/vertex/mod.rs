//! Waypoints with per-derivative constraints and the operations over them.
//!
//! A [Vertex] is one waypoint of a trajectory: a fixed spatial dimension plus
//! a sparse mapping from derivative order (0 = position, 1 = velocity, ...) to
//! the value that derivative must take at the waypoint. An ordered
//! `Vec<Vertex<T>>` describes a path; each consecutive pair spans one
//! trajectory segment.

mod builders;
mod segment_times;

pub use builders::{create_random_vertices, create_random_vertices_1d, create_square_vertices};
pub use segment_times::{
    compute_time_velocity_ramp, estimate_segment_times, estimate_segment_times_baca,
    estimate_segment_times_euclidean, estimate_segment_times_velocity_ramp,
};

use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Symbolic names for the small derivative orders used as constraint keys.
pub mod derivative_order {
    pub const POSITION: usize = 0;
    pub const VELOCITY: usize = 1;
    pub const ACCELERATION: usize = 2;
    pub const JERK: usize = 3;
    pub const SNAP: usize = 4;

    /// Human readable name for a derivative order, used when formatting a
    /// vertex.
    pub fn name(order: usize) -> String {
        match order {
            POSITION => "position".to_string(),
            VELOCITY => "velocity".to_string(),
            ACCELERATION => "acceleration".to_string(),
            JERK => "jerk".to_string(),
            SNAP => "snap".to_string(),
            _ => format!("derivative {}", order),
        }
    }
}

/// Sparse constraint store of a vertex: derivative order to constraint value.
///
/// A `BTreeMap` keeps iteration sorted by derivative order so that equality
/// checks and formatting are deterministic.
pub type Constraints<T> = BTreeMap<usize, Vec<T>>;

/// A single waypoint with constraints on its position and higher derivatives.
///
/// The spatial dimension is fixed at construction and every constraint value
/// stored must have exactly that length; pushing a value of any other length
/// is a programming error and panics.
///
/// # Examples
/// ```
/// use polytraj::vertex::{derivative_order, Vertex};
/// let mut v = Vertex::<f64>::new(3);
/// v.add_constraint(derivative_order::POSITION, &[1.0, 2.0, 3.0]);
/// assert!(v.has_constraint(derivative_order::POSITION));
/// assert_eq!(v.constraint(derivative_order::POSITION), Some(&[1.0, 2.0, 3.0][..]));
/// assert!(!v.has_constraint(derivative_order::VELOCITY));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T = f64> {
    dimension: usize,
    constraints: Constraints<T>,
}

impl<T> Vertex<T>
where
    T: Real,
{
    /// Create a new vertex with `dimension` spatial axes and no constraints.
    pub fn new(dimension: usize) -> Self {
        Vertex {
            dimension,
            constraints: Constraints::new(),
        }
    }

    /// Number of spatial axes of this vertex.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of constrained derivative orders.
    #[inline]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Add (or overwrite) the constraint for `order`.
    ///
    /// Panics if `value.len()` does not equal the vertex dimension.
    pub fn add_constraint(&mut self, order: usize, value: &[T]) {
        assert_eq!(
            value.len(),
            self.dimension,
            "constraint value length must equal vertex dimension"
        );
        self.constraints.insert(order, value.to_vec());
    }

    /// Remove the constraint for `order`, returning whether one was present.
    pub fn remove_constraint(&mut self, order: usize) -> bool {
        self.constraints.remove(&order).is_some()
    }

    /// Constrain the position to `position` and zero all derivatives from
    /// order 1 through `up_to_derivative` inclusive.
    ///
    /// This is the canonical representation of a path endpoint where the
    /// vehicle is at rest.
    pub fn make_start_or_end(&mut self, position: &[T], up_to_derivative: usize) {
        self.add_constraint(derivative_order::POSITION, position);
        for order in 1..=up_to_derivative {
            self.constraints.insert(order, vec![T::zero(); self.dimension]);
        }
    }

    /// The constraint value for `order` if one is set.
    pub fn constraint(&self, order: usize) -> Option<&[T]> {
        self.constraints.get(&order).map(Vec::as_slice)
    }

    /// Returns `true` if a constraint is set for `order`.
    pub fn has_constraint(&self, order: usize) -> bool {
        self.constraints.contains_key(&order)
    }

    /// Iterate all `(derivative order, value)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> {
        self.constraints.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// Fuzzy equality with an absolute per-component tolerance.
    ///
    /// Returns `true` if both vertices constrain the same set of derivative
    /// orders and every pair of constraint values differs by at most `eps` in
    /// every component. With `eps` of zero this is exact equality.
    pub fn fuzzy_eq_eps(&self, other: &Self, eps: T) -> bool {
        if self.constraints.len() != other.constraints.len() {
            return false;
        }

        for (order, value) in &self.constraints {
            let other_value = match other.constraints.get(order) {
                Some(v) => v,
                None => return false,
            };

            if value.len() != other_value.len() {
                return false;
            }

            let within_tol = value
                .iter()
                .zip(other_value)
                .all(|(&a, &b)| (a - b).abs() <= eps);
            if !within_tol {
                return false;
            }
        }

        true
    }

    /// Project this vertex onto a subset of its axes.
    ///
    /// The result has dimension `axes.len()` with axis `i` taken from this
    /// vertex's axis `axes[i]`; only constraints with order at most
    /// `max_derivative_order` are copied. Returns `None` if any requested
    /// axis index is out of range.
    ///
    /// Splitting a vertex per axis lets an N-dimensional problem be handed to
    /// an optimizer as independent 1-dimensional problems.
    ///
    /// # Examples
    /// ```
    /// use polytraj::vertex::{derivative_order, Vertex};
    /// let mut v = Vertex::new(3);
    /// v.add_constraint(derivative_order::POSITION, &[1.0, 2.0, 3.0]);
    /// let z = v.subdimension(&[2], 0).unwrap();
    /// assert_eq!(z.dimension(), 1);
    /// assert_eq!(z.constraint(derivative_order::POSITION), Some(&[3.0][..]));
    /// assert!(v.subdimension(&[3], 0).is_none());
    /// ```
    pub fn subdimension(&self, axes: &[usize], max_derivative_order: usize) -> Option<Vertex<T>> {
        if axes.iter().any(|&axis| axis >= self.dimension) {
            return None;
        }

        let mut subvertex = Vertex::new(axes.len());
        for (&order, value) in &self.constraints {
            if order > max_derivative_order {
                continue;
            }
            let projected: Vec<T> = axes.iter().map(|&axis| value[axis]).collect();
            subvertex.constraints.insert(order, projected);
        }

        Some(subvertex)
    }
}

impl<T> fmt::Display for Vertex<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "constraints:")?;
        for (order, value) in &self.constraints {
            write!(f, "  {}: [", derivative_order::name(*order))?;
            for (i, component) in value.iter().enumerate() {
                if i != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", component)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
