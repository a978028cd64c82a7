/// Approximate equality for floating point values.
///
/// Coordinates computed from sums and products rarely land on exact values, so scalar equality
/// checks go through this trait, with the type's default epsilon or an explicit one.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::traits::*;
/// let a = 0.1 + 0.2;
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq(0.3));
/// assert!(!1.0f64.fuzzy_eq_eps(1.1, 0.05));
/// assert!(1e-9f64.fuzzy_eq_zero());
/// assert!(!1e-5f32.fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon, 1e-8 for `f64` and 1e-6 for `f32`.
    fn fuzzy_epsilon() -> Self;

    /// `|self - other| < eps`.
    fn fuzzy_eq_eps(&self, other: Self, eps: Self) -> bool;

    /// `|self| < fuzzy_epsilon`.
    fn fuzzy_eq_zero(&self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }
}

macro_rules! float_fuzzy_eq {
    ($($ty:ty => $eps:expr),*) => {
        $(
            impl FuzzyEq for $ty {
                #[inline]
                fn fuzzy_epsilon() -> Self {
                    $eps
                }

                #[inline]
                fn fuzzy_eq_eps(&self, other: Self, eps: Self) -> bool {
                    (self - other).abs() < eps
                }

                #[inline]
                fn fuzzy_eq_zero(&self) -> bool {
                    self.abs() < $eps
                }
            }
        )*
    };
}

float_fuzzy_eq!(f32 => 1.0e-6, f64 => 1.0e-8);
