use crate::core::{
    math::Vector2,
    traits::Real,
};

/// Corner of a [Polygon](super::Polygon).
///
/// A vertex caches the positions of its two neighbors along with the indexes of its incident
/// edges so visibility predicates can be answered without going back to the owning polygon.
/// Edge `i` of a polygon joins vertex `i - 1` and vertex `i`, so the vertex at index `i` has
/// incident edges `i` (towards `prev`) and `i + 1` (towards `next`), both modulo the count.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex<T = f64> {
    pub(crate) pos: Vector2<T>,
    pub(crate) index: usize,
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) prev_pos: Vector2<T>,
    pub(crate) next_pos: Vector2<T>,
    pub(crate) prev_edge: usize,
    pub(crate) next_edge: usize,
    pub(crate) inward_normal: Vector2<T>,
    pub(crate) is_convex: bool,
}

impl<T> Vertex<T>
where
    T: Real,
{
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        self.pos
    }

    /// Index of this vertex in its polygon.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn prev(&self) -> usize {
        self.prev
    }

    #[inline]
    pub fn next(&self) -> usize {
        self.next
    }

    /// Incident edge indexes, `[towards prev, towards next]`.
    #[inline]
    pub fn edges(&self) -> [usize; 2] {
        [self.prev_edge, self.next_edge]
    }

    /// Unit normal bisecting the corner, pointing into the polygon interior.
    #[inline]
    pub fn inward_normal(&self) -> Vector2<T> {
        self.inward_normal
    }

    /// `false` for reflex corners (interior angle over 180 degrees). Straight corners count as
    /// convex.
    #[inline]
    pub fn is_convex(&self) -> bool {
        self.is_convex
    }

    #[inline]
    pub fn is_neighbor_of(&self, index: usize) -> bool {
        self.prev == index || self.next == index
    }

    /// Test if the direction `dir` leaving this vertex points strictly into the polygon
    /// interior.
    ///
    /// Directions within `eps` (sine of the angle) of either incident edge run along the boundary
    /// and do not count. For a convex corner the interior is the wedge between the two incident
    /// edges, for a reflex corner it is everything except the outward facing gap between them.
    pub fn heads_inside(&self, dir: Vector2<T>, eps: T) -> bool {
        let (Some(a), Some(b), Some(dir)) = (
            (self.next_pos - self.pos).try_normalize(),
            (self.prev_pos - self.pos).try_normalize(),
            dir.try_normalize(),
        ) else {
            return false;
        };

        let turn = a.perp_dot(b);
        if turn.abs() <= eps {
            // straight corner, or a zero width spike with no interior
            return a.dot(b) < T::zero() && dir.dot(self.inward_normal) > eps;
        }

        let sign = if turn > T::zero() { T::one() } else { -T::one() };
        let from_a = a.perp_dot(dir) * sign;
        let to_b = dir.perp_dot(b) * sign;
        if self.is_convex {
            from_a > eps && to_b > eps
        } else {
            !(from_a >= -eps && to_b >= -eps)
        }
    }

    /// Test if the ray from this vertex towards `point` passes into the polygon interior rather
    /// than around the corner, see [Vertex::heads_inside].
    #[inline]
    pub fn is_going_between_neighbors(&self, point: Vector2<T>) -> bool {
        self.heads_inside(point - self.pos, T::fuzzy_epsilon())
    }

    /// Incident edges whose far endpoint lies clockwise of this vertex as seen from `reference`.
    ///
    /// During a clockwise sweep around `reference` these edges become active when the sweep
    /// reaches this vertex.
    pub fn cw_edges(&self, reference: Vector2<T>) -> impl Iterator<Item = usize> {
        let [prev_side, next_side] = self.side_values(reference);
        [
            (prev_side < T::zero()).then_some(self.prev_edge),
            (next_side < T::zero()).then_some(self.next_edge),
        ]
        .into_iter()
        .flatten()
    }

    /// Incident edges whose far endpoint lies counter clockwise of this vertex as seen from
    /// `reference`. These leave the active set of a clockwise sweep at this vertex.
    pub fn ccw_edges(&self, reference: Vector2<T>) -> impl Iterator<Item = usize> {
        let [prev_side, next_side] = self.side_values(reference);
        [
            (prev_side > T::zero()).then_some(self.prev_edge),
            (next_side > T::zero()).then_some(self.next_edge),
        ]
        .into_iter()
        .flatten()
    }

    fn side_values(&self, reference: Vector2<T>) -> [T; 2] {
        let to_self = self.pos - reference;
        [
            to_self.perp_dot(self.prev_pos - reference),
            to_self.perp_dot(self.next_pos - reference),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::core::math::vec2;
    use crate::polygon::Polygon;

    #[test]
    fn heads_inside_convex_corner() {
        let square = Polygon::new(&points![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
        let v = &square.vertexes()[0];
        let eps = 1e-8;
        assert!(v.heads_inside(vec2(1.0, 1.0), eps));
        assert!(v.heads_inside(vec2(1.0, 0.01), eps));
        // along either side
        assert!(!v.heads_inside(vec2(1.0, 0.0), eps));
        assert!(!v.heads_inside(vec2(0.0, 1.0), eps));
        assert!(!v.heads_inside(vec2(-1.0, -1.0), eps));
        assert!(!v.heads_inside(vec2(-1.0, 0.0), eps));
    }

    #[test]
    fn heads_inside_reflex_corner() {
        // L shape, corner 3 at (1, 1) is reflex
        let l_shape = points![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)];
        for pts in [l_shape.clone(), l_shape.iter().rev().copied().collect()] {
            let polygon = Polygon::new(&pts).unwrap();
            let v = polygon
                .vertexes()
                .iter()
                .find(|v| v.pos() == vec2(1.0, 1.0))
                .unwrap();
            assert!(!v.is_convex());
            let eps = 1e-8;
            assert!(v.heads_inside(vec2(-1.0, -1.0), eps));
            // continuing past the corner along either side goes through the interior
            assert!(v.heads_inside(vec2(-1.0, 0.0), eps));
            assert!(v.heads_inside(vec2(0.0, -1.0), eps));
            // along the sides and out through the notch
            assert!(!v.heads_inside(vec2(1.0, 0.0), eps));
            assert!(!v.heads_inside(vec2(0.0, 1.0), eps));
            assert!(!v.heads_inside(vec2(1.0, 1.0), eps));
        }
    }

    #[test]
    fn rays_towards_points() {
        // U shape, corner 4 at (2, 1) is the inner corner of the notch
        let u = Polygon::new(&points![
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0)
        ])
        .unwrap();
        let inner = &u.vertexes()[4];
        assert!(!inner.is_convex());
        // across the notch and up out of it
        assert!(!inner.is_going_between_neighbors(vec2(1.0, 3.0)));
        assert!(!inner.is_going_between_neighbors(vec2(2.0, 5.0)));
        // into the body below
        assert!(inner.is_going_between_neighbors(vec2(2.0, -1.0)));
        assert!(inner.is_going_between_neighbors(vec2(3.0, 0.5)));

        let outer = &u.vertexes()[0];
        assert!(outer.is_going_between_neighbors(vec2(3.0, 3.0)));
        assert!(!outer.is_going_between_neighbors(vec2(-1.0, 5.0)));
    }
}
