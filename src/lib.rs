//! Waypoint constraint modeling and segment time allocation for polynomial
//! trajectory generation.
//!
//! A trajectory through space is described by an ordered sequence of
//! [Vertex](crate::vertex::Vertex) values: waypoints carrying constraints on
//! position and any higher derivative (velocity, acceleration, jerk, ...).
//! Before a polynomial optimizer can turn such a sequence into a smooth
//! trajectory it needs a time duration for every segment between consecutive
//! waypoints; the [vertex](crate::vertex) module provides four independent
//! heuristics for allocating those durations from the vehicle's dynamic
//! limits, along with builders producing test and benchmark paths.
//!
//! The optimizers themselves are external collaborators, modeled only as
//! traits in the [optimizer](crate::optimizer) module.
//!
//! # Examples
//! ```
//! use polytraj::vertex::{create_square_vertices, estimate_segment_times_euclidean};
//!
//! // One lap around a 2 meter square, at rest at the first corner.
//! let vertices = create_square_vertices(4, &[0.0, 0.0, 1.0], 2.0, 1);
//! let times = estimate_segment_times_euclidean(&vertices, 2.0);
//! assert_eq!(times.len(), vertices.len() - 1);
//! assert!(times.iter().all(|&t| t > 0.0));
//! ```

pub mod core;
pub mod optimizer;
pub mod vertex;
