//! Immutable polygon model used as visibility obstacles, plus the point-loop preprocessing steps
//! (simplicity check and outline/offset) a caller runs before building one.
mod edge;
mod outline;
mod self_intersect;
mod vertex;

pub use edge::Edge;
pub use outline::{polygon_outline, OutlineOptions};
pub use self_intersect::has_self_intersects;
pub use vertex::Vertex;

use edge::sight_coords;

use crate::core::{
    math::{loop_signed_area, Orientation, Vector2},
    traits::Real,
};
use crate::error::NavError;
use static_aabb2d_index::AABB;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static NEXT_POLYGON_ID: AtomicU64 = AtomicU64::new(0);

/// Process unique identity of a constructed [Polygon]. Clones share the id of their source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonId(u64);

impl PolygonId {
    fn next() -> Self {
        PolygonId(NEXT_POLYGON_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polygon#{}", self.0)
    }
}

/// Simple closed polygon obstacle.
///
/// Built once from a point loop of either winding and never mutated afterwards. Edge `i` joins
/// vertex `i - 1` and vertex `i` (modulo the vertex count). The polygon is assumed simple, run
/// [has_self_intersects] on untrusted input first.
///
/// # Examples
///
/// ```
/// # use navgraph2d::points;
/// # use navgraph2d::polygon::*;
/// # use navgraph2d::core::math::*;
/// let square = Polygon::new(&points![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square.orientation(), Orientation::CounterClockwise);
/// assert!(square.vertexes().iter().all(|v| v.is_convex()));
/// assert!(square.contains_point(Vector2::new(1.0, 1.0)));
///
/// // a segment passing through the square is blocked by it
/// assert!(square.blocks_segment(Vector2::new(-1.0, 1.0), Vector2::new(3.0, 1.0)));
/// // so is a diagonal between two corners
/// assert!(square.blocks_segment(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0)));
/// // segments along a side or outside are not
/// assert!(!square.blocks_segment(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0)));
/// assert!(!square.blocks_segment(Vector2::new(-1.0, 3.0), Vector2::new(3.0, 3.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<T = f64> {
    id: PolygonId,
    vertexes: Vec<Vertex<T>>,
    edges: Vec<Edge<T>>,
    extents: AABB<T>,
    orientation: Orientation,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Build a polygon from a closed point loop (the last point connects back to the first).
    ///
    /// Consecutive points within [Real::pos_equal_eps] of each other are collapsed, including
    /// the last point repeating the first.
    pub fn new(points: &[Vector2<T>]) -> Result<Self, NavError> {
        if points.iter().any(|p| !p.is_finite()) {
            return Err(NavError::NonFiniteCoordinate);
        }

        let points = remove_repeat_pos(points, T::pos_equal_eps());
        let n = points.len();
        if n < 3 {
            return Err(NavError::InvalidPolygon { vertex_count: n });
        }

        let area2 = loop_signed_area(&points);
        if area2.fuzzy_eq_zero() {
            return Err(NavError::DegeneratePolygon);
        }

        let orientation = if area2 > T::zero() {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        };

        let edges: Vec<Edge<T>> = (0..n)
            .map(|i| {
                let prev = (i + n - 1) % n;
                Edge {
                    v1: prev,
                    v2: i,
                    p1: points[prev],
                    p2: points[i],
                }
            })
            .collect();

        let vertexes = (0..n)
            .map(|i| build_vertex(&points, i, orientation))
            .collect();

        Ok(Polygon {
            id: PolygonId::next(),
            vertexes,
            edges,
            extents: bounding_box(&points),
            orientation,
        })
    }

    #[inline]
    pub fn id(&self) -> PolygonId {
        self.id
    }

    #[inline]
    pub fn vertexes(&self) -> &[Vertex<T>] {
        &self.vertexes
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&Vertex<T>> {
        self.vertexes.get(index)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, index: usize) -> Option<&Edge<T>> {
        self.edges.get(index)
    }

    /// Iterate over the vertex positions in loop order.
    pub fn points(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.vertexes.iter().map(|v| v.pos)
    }

    /// Axis aligned bounding box of the polygon.
    #[inline]
    pub fn extents(&self) -> AABB<T> {
        self.extents
    }

    /// Winding direction of the input loop.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Unsigned enclosed area.
    pub fn area(&self) -> T {
        let pts: Vec<_> = self.points().collect();
        loop_signed_area(&pts).abs() / T::two()
    }

    /// Test if the segment `p -> q` passes through the polygon, using [Real::nudge_dist].
    pub fn blocks_segment(&self, p: Vector2<T>, q: Vector2<T>) -> bool {
        self.blocks_segment_eps(p, q, T::nudge_dist())
    }

    /// Test if the segment `p -> q` passes through the polygon interior.
    ///
    /// Points within `eps` of the segment's line count as lying on it. The segment is blocked
    /// when it properly crosses an edge ([Edge::intersects_segment]), when it runs through a
    /// vertex into the interior, or when one of its ends rests on the boundary (at a vertex or
    /// on an edge) and it leaves that end heading inside. Segments that only touch the boundary
    /// or run along it are not blocked, neither are segments lying fully inside without
    /// touching the boundary. The answer does not depend on the segment direction.
    pub fn blocks_segment_eps(&self, p: Vector2<T>, q: Vector2<T>, eps: T) -> bool {
        let d = q - p;
        let len = d.length();
        if len <= eps {
            return false;
        }

        if self.edges.iter().any(|e| e.intersects_segment(p, q, eps)) {
            return true;
        }

        let dir = d.scale(T::one() / len);
        let angle_eps = T::fuzzy_epsilon();
        // -1, 0 or 1 for right of, on, or left of the segment's line
        let side = |point: Vector2<T>| {
            let (s, _) = sight_coords(p, dir, point);
            if s > eps {
                1
            } else if s < -eps {
                -1
            } else {
                0
            }
        };

        let mut end_at_vertex = [false, false];
        for v in &self.vertexes {
            if v.pos.distance_to(p) <= eps {
                end_at_vertex[0] = true;
                if v.heads_inside(dir, angle_eps) {
                    return true;
                }
                continue;
            }
            if v.pos.distance_to(q) <= eps {
                end_at_vertex[1] = true;
                if v.heads_inside(-dir, angle_eps) {
                    return true;
                }
                continue;
            }

            let (s, t) = sight_coords(p, dir, v.pos);
            if s.abs() > eps || t <= eps || t >= len - eps {
                continue;
            }

            // the segment runs through this vertex
            let prev_side = side(v.prev_pos);
            let next_side = side(v.next_pos);
            if prev_side * next_side < 0 || (!v.is_convex && (prev_side != 0 || next_side != 0)) {
                return true;
            }
        }

        let sign = if self.orientation == Orientation::CounterClockwise {
            T::one()
        } else {
            -T::one()
        };
        for (i, (end, end_dir)) in [(p, dir), (q, -dir)].into_iter().enumerate() {
            if end_at_vertex[i] {
                continue;
            }
            for e in &self.edges {
                if e.distance_to(end) > eps {
                    continue;
                }
                // resting on the edge, interior is to the left for counter clockwise loops
                if let Some(along) = (e.p2 - e.p1).try_normalize() {
                    if along.perp_dot(end_dir) * sign > angle_eps {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Even-odd point in polygon test. Points exactly on the boundary may report either way.
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        let e = &self.extents;
        if point.x < e.min_x || point.x > e.max_x || point.y < e.min_y || point.y > e.max_y {
            return false;
        }

        let mut inside = false;
        for edge in &self.edges {
            let (a, b) = (edge.p1, edge.p2);
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }

        inside
    }
}

fn build_vertex<T>(points: &[Vector2<T>], i: usize, orientation: Orientation) -> Vertex<T>
where
    T: Real,
{
    let n = points.len();
    let prev = (i + n - 1) % n;
    let next = (i + 1) % n;
    let pos = points[i];
    let prev_pos = points[prev];
    let next_pos = points[next];

    let sign = if orientation == Orientation::CounterClockwise {
        T::one()
    } else {
        -T::one()
    };

    // duplicates are removed before this point so both directions have length
    let dir_in = (pos - prev_pos).normalize();
    let dir_out = (next_pos - pos).normalize();
    let turn = dir_in.perp_dot(dir_out);

    // left hand normals point inward for counter clockwise loops
    let inward_normal = (dir_in.perp() + dir_out.perp())
        .try_normalize()
        .unwrap_or_else(|| dir_in.perp())
        .scale(sign);

    Vertex {
        pos,
        index: i,
        prev,
        next,
        prev_pos,
        next_pos,
        prev_edge: i,
        next_edge: next,
        inward_normal,
        is_convex: turn * sign >= T::zero(),
    }
}

fn bounding_box<T>(points: &[Vector2<T>]) -> AABB<T>
where
    T: Real,
{
    let first = points[0];
    let mut result = AABB::new(first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        result.min_x = num_traits::real::Real::min(result.min_x, p.x);
        result.min_y = num_traits::real::Real::min(result.min_y, p.y);
        result.max_x = num_traits::real::Real::max(result.max_x, p.x);
        result.max_y = num_traits::real::Real::max(result.max_y, p.y);
    }

    result
}

/// Drop points that repeat their predecessor, treating the loop as closed.
fn remove_repeat_pos<T>(points: &[Vector2<T>], eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result: Vec<Vector2<T>> = Vec::with_capacity(points.len());
    for &p in points {
        if result.last().map_or(true, |last| !last.fuzzy_eq_eps(p, eps)) {
            result.push(p);
        }
    }

    while result.len() > 1 && result[0].fuzzy_eq_eps(result[result.len() - 1], eps) {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn ids_are_unique_and_shared_by_clones() {
        let pts = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)];
        let a = Polygon::new(&pts).unwrap();
        let b = Polygon::new(&pts).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn repeated_points_collapse() {
        let pts = [
            vec2(0.0, 0.0),
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, 1.0),
            vec2(0.0, 0.0),
        ];
        let p = Polygon::new(&pts).unwrap();
        assert_eq!(p.vertex_count(), 3);
    }

    #[test]
    fn edge_indexing() {
        let pts = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)];
        let p = Polygon::new(&pts).unwrap();
        // edge i joins vertex i - 1 and vertex i
        assert_eq!(p.edges()[0].vertexes(), [3, 0]);
        assert_eq!(p.edges()[2].vertexes(), [1, 2]);
        let v = &p.vertexes()[0];
        assert_eq!(v.edges(), [0, 1]);
        assert_eq!((v.prev(), v.next()), (3, 1));
        assert!(v.is_neighbor_of(3));
        assert!(v.is_neighbor_of(1));
        assert!(!v.is_neighbor_of(2));
    }
}
