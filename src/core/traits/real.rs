use super::FuzzyEq;
use num_traits::{Float, NumCast};
use std::fmt::{Debug, Display};

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy
/// compared, cast from `f64` literals used by the algorithms, and formatted.
///
/// This trait is implemented for `f32` and `f64`; all waypoint and time
/// allocation code in this crate is generic over it.
pub trait Real: Float + FuzzyEq<Self> + Default + Debug + Display {
    /// Cast an `f64` literal to this type, panics on failure (never fails for
    /// the provided `f32`/`f64` implementations).
    #[inline]
    fn from_f64(value: f64) -> Self {
        NumCast::from(value).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::from_f64(2.0)
    }

    #[inline]
    fn half() -> Self {
        Self::from_f64(0.5)
    }
}

impl Real for f32 {}
impl Real for f64 {}
