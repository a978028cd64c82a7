use crate::core::traits::Real;

/// Tolerances used by a [VisibilityGraph](super::VisibilityGraph).
#[derive(Debug, Clone)]
pub struct VisGraphOptions<T> {
    /// Distance the ends of a sight line are pulled in before testing it against polygon edges,
    /// so that lines ending on a corner or an edge are not reported as crossing it.
    pub nudge_dist: T,
    /// Fuzzy distance used to decide a path query's endpoints coincide.
    pub pos_equal_eps: T,
}

impl<T> VisGraphOptions<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            nudge_dist: T::nudge_dist(),
            pos_equal_eps: T::pos_equal_eps(),
        }
    }
}

impl<T> Default for VisGraphOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
