use super::{orientation, Line2, Orientation, Vector2};
use crate::core::traits::Real;
use std::cmp::Ordering;

/// Canonical point orderings, used both to normalize segment endpoints and as sweep comparators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointSortingMode {
    /// Ascending by x, ties by ascending y.
    IncreasingXY,
    /// Ascending by y, ties by ascending x.
    IncreasingYX,
    /// Descending by x, ties by descending y.
    DecreasingXY,
    /// Descending by y, ties by descending x.
    DecreasingYX,
}

/// Compare two points under a [PointSortingMode]. Coordinates are compared exactly.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// use std::cmp::Ordering;
/// let a = Vector2::new(0.0, 1.0);
/// let b = Vector2::new(0.0, 2.0);
/// let c = Vector2::new(1.0, 0.0);
/// assert_eq!(compare_points(a, b, PointSortingMode::IncreasingXY), Ordering::Less);
/// assert_eq!(compare_points(b, c, PointSortingMode::IncreasingXY), Ordering::Less);
/// assert_eq!(compare_points(b, c, PointSortingMode::IncreasingYX), Ordering::Greater);
/// assert_eq!(compare_points(a, b, PointSortingMode::DecreasingXY), Ordering::Greater);
/// ```
pub fn compare_points<T>(a: Vector2<T>, b: Vector2<T>, mode: PointSortingMode) -> Ordering
where
    T: Real,
{
    let cmp_x = a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal);
    let cmp_y = a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal);
    match mode {
        PointSortingMode::IncreasingXY => cmp_x.then(cmp_y),
        PointSortingMode::IncreasingYX => cmp_y.then(cmp_x),
        PointSortingMode::DecreasingXY => cmp_x.then(cmp_y).reverse(),
        PointSortingMode::DecreasingYX => cmp_y.then(cmp_x).reverse(),
    }
}

/// Line segment whose endpoints are stored in a canonical order.
///
/// `p1` always sorts before (or equal to) `p2` under the segment's [PointSortingMode], so two
/// segments built from the same unordered pair of points are equal regardless of the order the
/// points were given in.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// let a = Vector2::new(3.0, 1.0);
/// let b = Vector2::new(-1.0, 2.0);
/// let s1 = LineSegment::new(a, b, PointSortingMode::IncreasingXY);
/// let s2 = LineSegment::new(b, a, PointSortingMode::IncreasingXY);
/// assert_eq!(s1, s2);
/// assert_eq!(s1.p1, b);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment<T = f64> {
    pub p1: Vector2<T>,
    pub p2: Vector2<T>,
    pub sorting_mode: PointSortingMode,
}

impl<T> LineSegment<T>
where
    T: Real,
{
    pub fn new(p1: Vector2<T>, p2: Vector2<T>, sorting_mode: PointSortingMode) -> Self {
        if compare_points(p1, p2, sorting_mode) == Ordering::Greater {
            LineSegment {
                p1: p2,
                p2: p1,
                sorting_mode,
            }
        } else {
            LineSegment {
                p1,
                p2,
                sorting_mode,
            }
        }
    }

    /// Infinite line through the segment, `None` for a zero length segment.
    pub fn line(&self) -> Option<Line2<T>> {
        let line = Line2::join(self.p1, self.p2);
        if line.is_finite() {
            Some(line)
        } else {
            None
        }
    }

    /// Test if `target`, projected onto the segment's line, lies on the segment.
    ///
    /// Inclusive mode accepts the parametric range `[0, 1]`. Exclusive mode only accepts values
    /// strictly inside by [Real::containment_eps], which rejects points sitting on an endpoint.
    pub fn contains(&self, target: Vector2<T>, inclusive: bool) -> bool {
        self.contains_eps(target, inclusive, T::containment_eps())
    }

    pub fn contains_eps(&self, target: Vector2<T>, inclusive: bool, eps: T) -> bool {
        let Some(line) = self.line() else {
            return false;
        };

        let target = line.project(target);
        let v = self.p2 - self.p1;
        let t = v.dot(target - self.p1) / v.length_squared();
        if inclusive {
            t >= T::zero() && t <= T::one()
        } else {
            t > eps && t < T::one() - eps
        }
    }

    /// Returns `true` if the segments share an endpoint.
    pub fn shares_endpoint(&self, other: &Self) -> bool {
        self.p1.fuzzy_eq(other.p1)
            || self.p1.fuzzy_eq(other.p2)
            || self.p2.fuzzy_eq(other.p1)
            || self.p2.fuzzy_eq(other.p2)
    }

    /// Intersection point between two segments.
    ///
    /// Segments that share an endpoint never intersect under this test, and parallel or zero
    /// length segments return `None`. With `inclusive` false a point must lie strictly inside
    /// both segments (see [LineSegment::contains]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use navgraph2d::core::math::*;
    /// let mode = PointSortingMode::IncreasingXY;
    /// let s1 = LineSegment::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0), mode);
    /// let s2 = LineSegment::new(Vector2::new(0.0, 2.0), Vector2::new(2.0, 0.0), mode);
    /// let p = s1.try_intersect(&s2, false).unwrap();
    /// assert!(p.fuzzy_eq(Vector2::new(1.0, 1.0)));
    ///
    /// let s3 = LineSegment::new(Vector2::new(2.0, 2.0), Vector2::new(3.0, 0.0), mode);
    /// assert!(s1.try_intersect(&s3, true).is_none());
    /// ```
    pub fn try_intersect(&self, other: &Self, inclusive: bool) -> Option<Vector2<T>> {
        if self.shares_endpoint(other) {
            return None;
        }

        let point = self.line()?.meet(&other.line()?)?;
        if self.contains(point, inclusive) && other.contains(point, inclusive) {
            Some(point)
        } else {
            None
        }
    }

    /// Above/below order of two segments at the x position where the later of them starts.
    ///
    /// Intended for segments canonicalized with [PointSortingMode::IncreasingXY] that are
    /// simultaneously crossed by a vertical sweep line. A segment is [Ordering::Less] when it lies
    /// below (clockwise of) the other.
    pub fn sweep_cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        if self.p1.x < other.p1.x {
            return other.sweep_cmp(self).reverse();
        }

        if self.p1.x == other.p1.x {
            let start_cmp = compare_points(self.p1, other.p1, PointSortingMode::IncreasingXY);
            if start_cmp != Ordering::Equal {
                return start_cmp;
            }

            // same start point, decide by where the end point turns
            return match orientation(other.p1, other.p2, self.p2) {
                Orientation::Clockwise => Ordering::Less,
                Orientation::CounterClockwise => Ordering::Greater,
                Orientation::Collinear => {
                    compare_points(self.p2, other.p2, PointSortingMode::IncreasingXY)
                }
            };
        }

        match orientation(other.p1, other.p2, self.p1) {
            Orientation::Clockwise => Ordering::Less,
            Orientation::CounterClockwise => Ordering::Greater,
            Orientation::Collinear => Ordering::Less,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn canonical_order_for_every_mode() {
        let a = vec2(1.0, 5.0);
        let b = vec2(1.0, -2.0);
        let s = LineSegment::new(a, b, PointSortingMode::IncreasingXY);
        assert_eq!((s.p1, s.p2), (b, a));
        let s = LineSegment::new(b, a, PointSortingMode::DecreasingXY);
        assert_eq!((s.p1, s.p2), (a, b));
        let s = LineSegment::new(vec2(0.0, 1.0), vec2(4.0, 0.0), PointSortingMode::IncreasingYX);
        assert_eq!(s.p1, vec2(4.0, 0.0));
        let s = LineSegment::new(vec2(4.0, 0.0), vec2(0.0, 1.0), PointSortingMode::DecreasingYX);
        assert_eq!(s.p1, vec2(0.0, 1.0));
    }

    #[test]
    fn contains_inclusive_and_exclusive() {
        let s = LineSegment::new(vec2(0.0, 0.0), vec2(4.0, 0.0), PointSortingMode::IncreasingXY);
        assert!(s.contains(vec2(2.0, 0.0), true));
        assert!(s.contains(vec2(2.0, 0.0), false));
        assert!(s.contains(vec2(0.0, 0.0), true));
        assert!(!s.contains(vec2(0.0, 0.0), false));
        assert!(s.contains(vec2(4.0, 0.0), true));
        assert!(!s.contains(vec2(4.0, 0.0), false));
        assert!(!s.contains(vec2(5.0, 0.0), true));
        assert!(!s.contains(vec2(-0.5, 0.0), true));
    }

    #[test]
    fn zero_length_segment_contains_nothing() {
        let p = vec2(1.0, 1.0);
        let s = LineSegment::new(p, p, PointSortingMode::IncreasingXY);
        assert!(s.line().is_none());
        assert!(!s.contains(p, true));
    }

    #[test]
    fn strict_intersect_rejects_touching() {
        let mode = PointSortingMode::IncreasingXY;
        let s1 = LineSegment::new(vec2(0.0, 0.0), vec2(4.0, 0.0), mode);
        // t-junction on the interior of s1
        let s2 = LineSegment::new(vec2(2.0, 0.0), vec2(2.0, 3.0), mode);
        assert!(s1.try_intersect(&s2, true).is_some());
        assert!(s1.try_intersect(&s2, false).is_none());
        // parallel
        let s3 = LineSegment::new(vec2(0.0, 1.0), vec2(4.0, 1.0), mode);
        assert!(s1.try_intersect(&s3, true).is_none());
    }

    #[test]
    fn sweep_order_is_bottom_to_top() {
        let mode = PointSortingMode::IncreasingXY;
        let low = LineSegment::new(vec2(0.0, 0.0), vec2(4.0, 0.0), mode);
        let high = LineSegment::new(vec2(1.0, 2.0), vec2(3.0, 2.0), mode);
        assert_eq!(low.sweep_cmp(&high), Ordering::Less);
        assert_eq!(high.sweep_cmp(&low), Ordering::Greater);
        assert_eq!(low.sweep_cmp(&low), Ordering::Equal);

        // shared start point, decided by the end points
        let up = LineSegment::new(vec2(0.0, 0.0), vec2(1.0, 1.0), mode);
        let down = LineSegment::new(vec2(0.0, 0.0), vec2(1.0, -1.0), mode);
        assert_eq!(down.sweep_cmp(&up), Ordering::Less);
        assert_eq!(up.sweep_cmp(&down), Ordering::Greater);
    }
}
