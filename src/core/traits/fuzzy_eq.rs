/// Fuzzy equality comparisons using an absolute epsilon.
pub trait FuzzyEq<T = Self>: Sized + Copy {
    /// Default epsilon used by [FuzzyEq::fuzzy_eq].
    fn fuzzy_epsilon() -> T;

    /// Returns `true` if `self` is approximately equal to `other` using the
    /// `eps` epsilon value given.
    fn fuzzy_eq_eps(&self, other: Self, eps: T) -> bool;

    /// Returns `true` if `self` is approximately equal to `other` using the
    /// default epsilon value.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> $ty {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: $ty, eps: $ty) -> bool {
                (*self - other).abs() < eps
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1e-5);
impl_fuzzy_eq!(f64, 1e-8);
