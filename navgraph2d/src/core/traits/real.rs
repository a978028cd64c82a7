use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared.
///
/// Besides the usual constants this trait carries the tolerance used for each class of geometric
/// predicate, so every algorithm in the crate agrees on what "close enough" means:
///
/// | predicate class | method | `f64` | `f32` |
/// |---|---|---|---|
/// | value equality | [FuzzyEq::fuzzy_epsilon](super::FuzzyEq::fuzzy_epsilon) | 1e-8 | 1e-6 |
/// | position equality | [Real::pos_equal_eps] | 1e-5 | 1e-4 |
/// | parametric containment | [Real::containment_eps] | 1e-7 | 1e-5 |
/// | boundary crossing nudge | [Real::nudge_dist] | 1e-4 | 1e-4 |
/// | intersection classification | [Real::classify_eps] | 1e-4 | 1e-4 |
///
/// Orientation predicates are exact and take no tolerance.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    /// Lossy conversion from an `f64` literal.
    fn from_literal(value: f64) -> Self;

    /// `false` for NaN and infinite values.
    fn is_finite(self) -> bool;

    #[inline]
    fn pi() -> Self {
        Self::from_literal(std::f64::consts::PI)
    }

    #[inline]
    fn tau() -> Self {
        Self::from_literal(std::f64::consts::TAU)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Largest finite value, used as the "unreachable" distance.
    #[inline]
    fn unbounded() -> Self {
        <Self as num_traits::Bounded>::max_value()
    }

    /// Two positions closer than this on both axes are treated as the same point.
    #[inline]
    fn pos_equal_eps() -> Self {
        Self::from_literal(1e-5)
    }

    /// Margin applied to segment parameters when testing containment.
    #[inline]
    fn containment_eps() -> Self {
        Self::from_literal(1e-7)
    }

    /// Distance sample points are moved away from shared endpoints before a crossing test.
    #[inline]
    fn nudge_dist() -> Self {
        Self::from_literal(1e-4)
    }

    /// Tolerance used when classifying segment/segment intersections.
    #[inline]
    fn classify_eps() -> Self {
        Self::from_literal(1e-4)
    }
}

impl Real for f32 {
    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn from_literal(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn pos_equal_eps() -> Self {
        1e-4
    }

    #[inline]
    fn containment_eps() -> Self {
        1e-5
    }
}

impl Real for f64 {
    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn from_literal(value: f64) -> Self {
        value
    }

    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }
}
