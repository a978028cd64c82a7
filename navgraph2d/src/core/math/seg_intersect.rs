use super::{signed_triangle_area, Vector2};
use crate::core::traits::Real;

/// Classification of how two line segments `p1 -> p2` and `q1 -> q2` meet.
///
/// The naming follows the shape the two segments form at the meeting point: an `X` is a proper
/// crossing, a `T` is an endpoint of one segment resting on the interior of the other, a `V` is
/// two segments starting at the same point. The overlap variants are the collinear counterparts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegmentIntersect<T>
where
    T: Real,
{
    NoIntersect,
    /// Proper crossing at `point`.
    X { point: Vector2<T> },
    /// `p1` lies on the interior of `q1 -> q2`.
    TFirst { point: Vector2<T> },
    /// `q1` lies on the interior of `p1 -> p2`.
    TSecond { point: Vector2<T> },
    /// The segments start at the same point.
    V { point: Vector2<T> },
    /// Collinear, each start point lies inside the other segment.
    XOverlap {
        p_start: Vector2<T>,
        q_start: Vector2<T>,
    },
    /// Collinear, only `p1` lies inside the second segment.
    TOverlapFirst { point: Vector2<T> },
    /// Collinear, only `q1` lies inside the first segment.
    TOverlapSecond { point: Vector2<T> },
    /// Collinear and starting at the same point.
    VOverlap { point: Vector2<T> },
}

/// Classify the intersection of segments `p1 -> p2` and `q1 -> q2` using
/// [Real::classify_eps].
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// # use navgraph2d::core::traits::*;
/// let r = segment_intersect(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 1.0),
///     Vector2::new(0.0, 1.0),
///     Vector2::new(1.0, 0.0),
/// );
/// if let SegmentIntersect::X { point } = r {
///     assert!(point.fuzzy_eq(Vector2::new(0.5, 0.5)));
/// } else {
///     unreachable!("expected crossing");
/// }
/// ```
pub fn segment_intersect<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    q1: Vector2<T>,
    q2: Vector2<T>,
) -> SegmentIntersect<T>
where
    T: Real,
{
    segment_intersect_eps(p1, p2, q1, q2, T::classify_eps())
}

pub fn segment_intersect_eps<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    q1: Vector2<T>,
    q2: Vector2<T>,
    eps: T,
) -> SegmentIntersect<T>
where
    T: Real,
{
    let r = p2 - p1;
    let s = q2 - q1;

    let p1q1q2 = signed_triangle_area(p1, q1, q2);
    let p2q1q2 = signed_triangle_area(p2, q1, q2);

    if p1q1q2.abs() < eps && p2q1q2.abs() < eps {
        // collinear
        let rr = r.length_squared();
        let ss = s.length_squared();
        if rr.fuzzy_eq_zero() || ss.fuzzy_eq_zero() {
            return SegmentIntersect::NoIntersect;
        }

        let t0 = (q1 - p1).dot(r) / rr;
        let t1 = (p1 - q1).dot(s) / ss;
        let zero = T::zero();
        let one = T::one();
        let inside = |t: T| t > zero && t < one;
        let outside = |t: T| t < zero || t >= one;

        return if t0.abs() < eps && t1.abs() < eps {
            SegmentIntersect::VOverlap { point: p1 }
        } else if inside(t0) && inside(t1) {
            SegmentIntersect::XOverlap {
                p_start: p1,
                q_start: q1,
            }
        } else if outside(t0) && inside(t1) {
            SegmentIntersect::TOverlapFirst { point: p1 }
        } else if outside(t1) && inside(t0) {
            SegmentIntersect::TOverlapSecond { point: q1 }
        } else {
            SegmentIntersect::NoIntersect
        };
    }

    let q1p1p2 = signed_triangle_area(q1, p1, p2);
    let q2p1p2 = signed_triangle_area(q2, p1, p2);

    let t_denom = p1q1q2 - p2q1q2;
    let u_denom = q1p1p2 - q2p1p2;
    if t_denom.fuzzy_eq_zero() || u_denom.fuzzy_eq_zero() {
        return SegmentIntersect::NoIntersect;
    }

    let t = p1q1q2 / t_denom;
    let u = q1p1p2 / u_denom;
    let zero = T::zero();
    let one = T::one();
    if t < zero || t > one || u < zero || u > one {
        return SegmentIntersect::NoIntersect;
    }

    // segments meeting end to end or at a far endpoint are not intersections
    if p2.fuzzy_eq_eps(q2, eps) || p2.fuzzy_eq_eps(q1, eps) || q2.fuzzy_eq_eps(p1, eps) {
        return SegmentIntersect::NoIntersect;
    }

    let point = q1.lerp(q2, u);
    if t.abs() < eps && u.abs() < eps {
        SegmentIntersect::V { point }
    } else if t.abs() < eps && u > zero && u < one {
        SegmentIntersect::TFirst { point }
    } else if u.abs() < eps && t > zero && t < one {
        SegmentIntersect::TSecond { point }
    } else {
        SegmentIntersect::X { point }
    }
}

/// Intersection of the ray `origin + t * dir` (`t >= 0`) with the segment `a -> b`.
///
/// Returns the ray parameter `t` of the hit, `None` if the ray misses or runs parallel to the
/// segment.
///
/// # Examples
///
/// ```
/// # use navgraph2d::core::math::*;
/// # use navgraph2d::core::traits::*;
/// let origin = Vector2::new(0.0, 0.0);
/// let dir = Vector2::new(1.0, 0.0);
/// let t = ray_seg_intr(origin, dir, Vector2::new(3.0, -1.0), Vector2::new(3.0, 1.0)).unwrap();
/// assert!(t.fuzzy_eq(3.0));
/// // behind the origin
/// assert!(ray_seg_intr(origin, dir, Vector2::new(-3.0, -1.0), Vector2::new(-3.0, 1.0)).is_none());
/// ```
pub fn ray_seg_intr<T>(origin: Vector2<T>, dir: Vector2<T>, a: Vector2<T>, b: Vector2<T>) -> Option<T>
where
    T: Real,
{
    let e = b - a;
    let denom = dir.perp_dot(e);
    if denom.fuzzy_eq_zero() {
        return None;
    }

    let w = a - origin;
    let t = w.perp_dot(e) / denom;
    let s = w.perp_dot(dir) / denom;
    if t >= T::zero() && s >= T::zero() && s <= T::one() {
        Some(t)
    } else {
        None
    }
}
