use crate::core::{
    math::{line_seg_distance, ray_seg_intr, Vector2},
    traits::Real,
};

/// Side of a [Polygon](super::Polygon) between two neighboring vertexes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge<T = f64> {
    pub(crate) v1: usize,
    pub(crate) v2: usize,
    pub(crate) p1: Vector2<T>,
    pub(crate) p2: Vector2<T>,
}

impl<T> Edge<T>
where
    T: Real,
{
    /// Vertex indexes of the two endpoints.
    #[inline]
    pub fn vertexes(&self) -> [usize; 2] {
        [self.v1, self.v2]
    }

    #[inline]
    pub fn p1(&self) -> Vector2<T> {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Vector2<T> {
        self.p2
    }

    #[inline]
    pub fn has_vertex(&self, index: usize) -> bool {
        self.v1 == index || self.v2 == index
    }

    /// Distance from `point` to the closest point on the edge.
    #[inline]
    pub fn distance_to(&self, point: Vector2<T>) -> T {
        line_seg_distance(self.p1, self.p2, point)
    }

    /// Ray parameter where `origin + t * dir` hits this edge, see [ray_seg_intr].
    #[inline]
    pub fn ray_intersect(&self, origin: Vector2<T>, dir: Vector2<T>) -> Option<T> {
        ray_seg_intr(origin, dir, self.p1, self.p2)
    }

    /// Test if the segment `o1 -> o2` properly crosses this edge.
    ///
    /// The edge endpoints must lie more than `eps` away from the line through `o1 -> o2` on
    /// opposite sides, and the crossing point must be more than `eps` away from both segment
    /// ends. Touching, collinear overlap and crossings at either segment end are not crossings.
    /// Swapping `o1` and `o2` gives the same answer.
    pub fn intersects_segment(&self, o1: Vector2<T>, o2: Vector2<T>, eps: T) -> bool {
        let d = o2 - o1;
        let len = d.length();
        if len <= eps {
            return false;
        }

        let dir = d.scale(T::one() / len);
        let (s1, t1) = sight_coords(o1, dir, self.p1);
        let (s2, t2) = sight_coords(o1, dir, self.p2);
        if s1.abs() <= eps || s2.abs() <= eps || (s1 > T::zero()) == (s2 > T::zero()) {
            return false;
        }

        let t = t1 + (t2 - t1) * (s1 / (s1 - s2));
        t > eps && t < len - eps
    }
}

/// Signed offset of `point` from the line through `origin` along the unit vector `dir` (positive
/// on the left), and its position along that line.
#[inline]
pub(crate) fn sight_coords<T>(origin: Vector2<T>, dir: Vector2<T>, point: Vector2<T>) -> (T, T)
where
    T: Real,
{
    let r = point - origin;
    (dir.perp_dot(r), dir.dot(r))
}
