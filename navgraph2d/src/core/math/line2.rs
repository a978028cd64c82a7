use super::Vector2;
use crate::core::traits::Real;

/// Infinite line in homogeneous form `a * x + b * y + c = 0`.
///
/// Working with homogeneous coefficients means vertical and horizontal lines need no special
/// cases, and the "line at infinity" (`a = b = 0`) is representable: it is what joining two
/// coincident points produces and is reported through [Line2::is_finite].
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// # use navgraph2d::core::traits::*;
/// let horizontal = Line2::join(Vector2::new(0.0, 1.0), Vector2::new(4.0, 1.0));
/// let vertical = Line2::join(Vector2::new(2.0, -3.0), Vector2::new(2.0, 5.0));
/// let p = horizontal.meet(&vertical).unwrap();
/// assert!(p.fuzzy_eq(Vector2::new(2.0, 1.0)));
///
/// let parallel = Line2::join(Vector2::new(0.0, 2.0), Vector2::new(1.0, 2.0));
/// assert!(horizontal.meet(&parallel).is_none());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line2<T = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> Line2<T>
where
    T: Real,
{
    pub fn new(a: T, b: T, c: T) -> Self {
        Line2 { a, b, c }
    }

    /// The line at infinity.
    pub fn horizon() -> Self {
        Line2::new(T::zero(), T::zero(), T::one())
    }

    /// Line passing through `p1` and `p2` (cross product of the homogeneous points).
    pub fn join(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        Line2::new(p1.y - p2.y, p2.x - p1.x, p1.x * p2.y - p2.x * p1.y)
    }

    /// Returns `false` for the line at infinity, e.g. the join of two coincident points.
    pub fn is_finite(&self) -> bool {
        !self.normal_length_squared().fuzzy_eq_zero()
    }

    /// Intersection point of two lines, `None` if they are parallel (or either is not finite).
    pub fn meet(&self, other: &Self) -> Option<Vector2<T>> {
        let w = self.a * other.b - other.a * self.b;
        if w.fuzzy_eq_zero() {
            return None;
        }

        let x = self.b * other.c - other.b * self.c;
        let y = self.c * other.a - other.c * self.a;
        Some(Vector2::new(x / w, y / w))
    }

    /// Signed value of the line equation at `point`, scaled to be the signed distance.
    pub fn signed_distance(&self, point: Vector2<T>) -> T {
        (self.a * point.x + self.b * point.y + self.c) / self.normal_length_squared().sqrt()
    }

    /// Returns `true` if `point` lies within `eps` of the line.
    pub fn contains_eps(&self, point: Vector2<T>, eps: T) -> bool {
        self.is_finite() && self.signed_distance(point).abs() < eps
    }

    pub fn contains(&self, point: Vector2<T>) -> bool {
        self.contains_eps(point, T::pos_equal_eps())
    }

    /// Closest point on the line to `point`. Returns `point` unchanged for a line that is not
    /// finite.
    pub fn project(&self, point: Vector2<T>) -> Vector2<T> {
        let n2 = self.normal_length_squared();
        if n2.fuzzy_eq_zero() {
            return point;
        }

        let d = (self.a * point.x + self.b * point.y + self.c) / n2;
        Vector2::new(point.x - self.a * d, point.y - self.b * d)
    }

    fn normal_length_squared(&self) -> T {
        self.a * self.a + self.b * self.b
    }
}
