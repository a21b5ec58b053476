//! N-dimensional vector helpers over scalar slices.
//!
//! Waypoint positions and derivative constraints are stored as flat slices of
//! a [Real](crate::core::traits::Real) scalar, one element per spatial axis.
//! These free functions cover the small amount of vector algebra the builders
//! and time estimators need.

use crate::core::traits::Real;

/// Dot product of two equal length vectors.
pub fn dot<T>(a: &[T], b: &[T]) -> T
where
    T: Real,
{
    debug_assert_eq!(a.len(), b.len(), "vector dimensions must match");
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Euclidean norm (length) of a vector.
pub fn norm<T>(v: &[T]) -> T
where
    T: Real,
{
    dot(v, v).sqrt()
}

/// Euclidean distance between two equal length vectors.
pub fn dist<T>(a: &[T], b: &[T]) -> T
where
    T: Real,
{
    debug_assert_eq!(a.len(), b.len(), "vector dimensions must match");
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| {
            let d = x - y;
            acc + d * d
        })
        .sqrt()
}

/// Component-wise difference `a - b`.
pub fn sub<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Real,
{
    debug_assert_eq!(a.len(), b.len(), "vector dimensions must match");
    a.iter().zip(b).map(|(&x, &y)| x - y).collect()
}

/// Unit length copy of `v`.
///
/// `v` must have nonzero length, otherwise the result components are not
/// finite (mirrors dividing by a zero norm).
pub fn normalized<T>(v: &[T]) -> Vec<T>
where
    T: Real,
{
    let n = norm(v);
    v.iter().map(|&x| x / n).collect()
}
