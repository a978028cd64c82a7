use super::Vector2;
use crate::core::traits::Real;

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4` and `5PI` becomes
/// `PI`.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// # use navgraph2d::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// assert!(normalize_radians(PI).fuzzy_eq(PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Returns the smaller signed difference going from `angle1` to `angle2`, in `(-PI, PI]`.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// # use navgraph2d::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(delta_angle(0.25 * PI, 0.5 * PI).fuzzy_eq(0.25 * PI));
/// assert!(delta_angle(0.5 * PI, 0.25 * PI).fuzzy_eq(-0.25 * PI));
/// assert!(delta_angle(0.1, 2.0 * PI - 0.1).fuzzy_eq(-0.2));
/// ```
#[inline]
pub fn delta_angle<T>(angle1: T, angle2: T) -> T
where
    T: Real,
{
    let diff = normalize_radians(angle2 - angle1);
    if diff > T::pi() {
        diff - T::tau()
    } else {
        diff
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Polar angle of the direction from `p0` to `p1`, in `[-PI, PI]`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(p1.y - p0.y, p1.x - p0.x)
}

/// Angle of `point` around `pivot` measured clockwise from the positive x axis, in `[0, 2PI)`.
///
/// This is the event order of the rotational visibility sweep.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// # use navgraph2d::core::traits::*;
/// use std::f64::consts::PI;
/// let pivot = Vector2::new(0.0, 0.0);
/// assert!(clockwise_angle(pivot, Vector2::new(1.0, 0.0)).fuzzy_eq(0.0));
/// assert!(clockwise_angle(pivot, Vector2::new(0.0, -1.0)).fuzzy_eq(0.5 * PI));
/// assert!(clockwise_angle(pivot, Vector2::new(-1.0, 0.0)).fuzzy_eq(PI));
/// assert!(clockwise_angle(pivot, Vector2::new(0.0, 1.0)).fuzzy_eq(1.5 * PI));
/// ```
#[inline]
pub fn clockwise_angle<T>(pivot: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let a = T::atan2(pivot.y - point.y, point.x - pivot.x);
    if a < T::zero() {
        a + T::tau()
    } else {
        a
    }
}

/// Returns the point on the circle with `radius`, `center`, and polar `angle` in radians given.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = angle.sin_cos();
    Vector2::new(center.x + radius * c, center.y + radius * s)
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    p0 + v.scale(c1 / c2)
}

/// Euclidean distance from `point` to the line segment `p0` to `p1`.
#[inline]
pub fn line_seg_distance<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    line_seg_closest_point(p0, p1, point).distance_to(point)
}

/// Twice the signed area of the triangle `a`, `b`, `c`. Positive when the points wind counter
/// clockwise.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// let a = Vector2::new(0.0, 0.0);
/// let b = Vector2::new(1.0, 0.0);
/// let c = Vector2::new(0.0, 1.0);
/// assert_eq!(signed_triangle_area(a, b, c), 1.0);
/// assert_eq!(signed_triangle_area(a, c, b), -1.0);
/// ```
#[inline]
pub fn signed_triangle_area<T>(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> T
where
    T: Real,
{
    (b - a).perp_dot(c - a)
}

/// Turn direction of three points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the turn `p` -> `q` -> `r`.
///
/// The zero test is exact, callers needing a tolerance apply it to [signed_triangle_area]
/// themselves.
#[inline]
pub fn orientation<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> Orientation
where
    T: Real,
{
    let area = signed_triangle_area(p, q, r);
    if area > T::zero() {
        Orientation::CounterClockwise
    } else if area < T::zero() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns true if `point` is strictly left of the direction vector `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// let p0 = Vector2::new(1.0, 1.0);
/// let p1 = Vector2::new(2.0, 2.0);
/// assert!(is_left(p0, p1, Vector2::new(0.0, 1.0)));
/// assert!(!is_left(p0, p1, Vector2::new(1.0, 0.0)));
/// assert!(!is_left(p0, p1, Vector2::new(3.0, 3.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    signed_triangle_area(p0, p1, point) > T::zero()
}

/// Twice the signed area enclosed by a closed point loop (shoelace formula). Positive for counter
/// clockwise loops.
pub fn loop_signed_area<T>(points: &[Vector2<T>]) -> T
where
    T: Real,
{
    let n = points.len();
    if n < 3 {
        return T::zero();
    }

    let mut prev = points[n - 1];
    let mut sum = T::zero();
    for &p in points {
        sum = sum + prev.perp_dot(p);
        prev = p;
    }

    sum
}
