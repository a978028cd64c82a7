//! Visibility graph over polygon obstacles and shortest path queries through it.
mod options;
mod path;
mod snapshot;
mod sweep;

pub use options::VisGraphOptions;
pub use snapshot::{GraphSnapshot, SnapshotVertex};

use crate::core::{math::Vector2, traits::Real};
use crate::error::NavError;
use crate::polygon::{Polygon, PolygonId};
use log::{debug, error};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies a vertex of a [VisibilityGraph].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VertexId {
    /// Corner `index` of a placed polygon.
    Corner { polygon: PolygonId, index: usize },
    /// Query point of a path search, only lives for the duration of one query.
    Transient(usize),
}

impl VertexId {
    #[inline]
    pub fn corner(polygon: PolygonId, index: usize) -> Self {
        VertexId::Corner { polygon, index }
    }

    /// Owning polygon, `None` for transient vertexes.
    #[inline]
    pub fn polygon(&self) -> Option<PolygonId> {
        match self {
            VertexId::Corner { polygon, .. } => Some(*polygon),
            VertexId::Transient(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
struct PolygonIndex<T>
where
    T: Real,
{
    index: StaticAABB2DIndex<T>,
    ids: Vec<PolygonId>,
}

/// Graph linking every pair of polygon corners with an unobstructed line of sight.
///
/// Polygons are added and removed incrementally. Only the vertexes affected by a change are
/// swept again: those of the changed polygon and the vertexes linked to them. Links are always
/// stored in both directions.
///
/// # Examples
///
/// ```
/// # use navgraph2d::points;
/// # use navgraph2d::polygon::*;
/// # use navgraph2d::visibility_graph::*;
/// # use navgraph2d::core::math::*;
/// let square = Polygon::new(&points![(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]).unwrap();
/// let mut graph = VisibilityGraph::new();
/// assert!(graph.add_polygon(&square));
/// // adding the same polygon again does nothing
/// assert!(!graph.add_polygon(&square));
///
/// // the path goes around the square through two of its corners
/// let path = graph.get_path(Vector2::new(-2.0, 0.0), Vector2::new(2.0, 0.0)).unwrap();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path[1].y.abs(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct VisibilityGraph<T = f64>
where
    T: Real,
{
    polygons: BTreeMap<PolygonId, Polygon<T>>,
    adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,
    polygon_index: Option<PolygonIndex<T>>,
    options: VisGraphOptions<T>,
}

impl<T> Default for VisibilityGraph<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VisibilityGraph<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self::with_options(VisGraphOptions::new())
    }

    pub fn with_options(options: VisGraphOptions<T>) -> Self {
        VisibilityGraph {
            polygons: BTreeMap::new(),
            adjacency: BTreeMap::new(),
            polygon_index: None,
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> &VisGraphOptions<T> {
        &self.options
    }

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Number of polygon corners in the graph.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of visibility links, each counted once.
    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    #[inline]
    pub fn contains_polygon(&self, id: PolygonId) -> bool {
        self.polygons.contains_key(&id)
    }

    #[inline]
    pub fn polygon(&self, id: PolygonId) -> Option<&Polygon<T>> {
        self.polygons.get(&id)
    }

    /// Placed polygons in [PolygonId] order.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon<T>> + '_ {
        self.polygons.values()
    }

    /// Position of a polygon corner, `None` for unknown or transient ids.
    pub fn vertex_position(&self, id: VertexId) -> Option<Vector2<T>> {
        match id {
            VertexId::Corner { .. } => self.position_of(id, &[]),
            VertexId::Transient(_) => None,
        }
    }

    /// Vertexes visible from `id` in [VertexId] order. Empty for unknown ids.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.get(&id).into_iter().flatten().copied()
    }

    /// Sorted copy of the adjacency lists, for inspection and comparison.
    pub fn adjacency_view(&self) -> BTreeMap<VertexId, Vec<VertexId>> {
        self.adjacency
            .iter()
            .map(|(id, n)| (*id, n.iter().copied().collect()))
            .collect()
    }

    /// Position based copy of the graph, see [GraphSnapshot].
    pub fn snapshot(&self) -> GraphSnapshot<T> {
        let polygons = self.polygons.values().map(|p| p.points().collect()).collect();
        let vertexes = self
            .adjacency
            .iter()
            .filter_map(|(id, n)| {
                Some(SnapshotVertex {
                    id: *id,
                    position: self.vertex_position(*id)?,
                    neighbors: n.iter().copied().collect(),
                })
            })
            .collect();

        GraphSnapshot { polygons, vertexes }
    }

    /// Test if `point` lies outside of every placed polygon. A polygon enclosing the walkable
    /// area, such as a baked bounds rectangle, counts like any other, so points inside it are not
    /// free.
    pub fn is_point_free(&self, point: Vector2<T>) -> bool {
        self.polygons_in(point.x, point.y, point.x, point.y)
            .iter()
            .all(|p| !p.contains_point(point))
    }

    /// Test if the segment `p -> q` is blocked by no placed polygon, see
    /// [Polygon::blocks_segment_eps]. Uses [VisGraphOptions::nudge_dist] as the tolerance.
    pub fn has_line_of_sight(&self, p: Vector2<T>, q: Vector2<T>) -> bool {
        let eps = self.options.nudge_dist;
        let (min_x, min_y, max_x, max_y) = segment_bounds(p, q, eps);
        self.polygons_in(min_x, min_y, max_x, max_y)
            .iter()
            .all(|poly| !poly.blocks_segment_eps(p, q, eps))
    }

    /// Place `polygon` as an obstacle. Returns `false` (and changes nothing) if a polygon with
    /// the same [PolygonId] is already placed.
    pub fn add_polygon(&mut self, polygon: &Polygon<T>) -> bool {
        let id = polygon.id();
        if self.polygons.contains_key(&id) {
            return false;
        }

        let corners: Vec<VertexId> = (0..polygon.vertex_count())
            .map(|i| VertexId::corner(id, i))
            .collect();
        self.polygons.insert(id, polygon.clone());
        for &v in &corners {
            self.adjacency.insert(v, BTreeSet::new());
        }
        self.rebuild_index();

        for &v in &corners {
            self.sweep_and_link(v);
        }

        // the new obstacle may hide vertexes that could see each other before
        let touching = self.touching_vertexes(id);
        self.resweep(&touching);

        // links between vertexes that see none of the new corners
        let cut = self.links_blocked_by(polygon);
        for &(a, b) in &cut {
            self.unlink(a, b);
        }

        debug!(
            "added {} with {} vertexes, {} touching vertexes swept again, {} more links cut",
            id,
            corners.len(),
            touching.len(),
            cut.len()
        );

        true
    }

    /// Remove a placed polygon. Returns `false` if it was not placed.
    #[inline]
    pub fn remove_polygon(&mut self, polygon: &Polygon<T>) -> bool {
        self.remove_polygon_by_id(polygon.id())
    }

    pub fn remove_polygon_by_id(&mut self, id: PolygonId) -> bool {
        let touching = self.touching_vertexes(id);
        let Some(removed) = self.polygons.remove(&id) else {
            return false;
        };

        for i in 0..removed.vertex_count() {
            let v = VertexId::corner(id, i);
            self.disconnect_all(v);
            self.adjacency.remove(&v);
        }
        self.rebuild_index();

        self.resweep(&touching);

        // vertexes the removed polygon hid from each other without either one seeing it
        let opened = self.pairs_freed_by(&removed);
        for &(a, b) in &opened {
            self.link(a, b);
        }

        debug!(
            "removed {}, {} touching vertexes swept again, {} more links opened",
            id,
            touching.len(),
            opened.len()
        );

        true
    }

    /// Shortest path from `src` to `dest` avoiding the placed polygons.
    ///
    /// The result starts with `src` and ends with `dest`, the points between are polygon
    /// corners. If the straight segment is clear (or nothing is placed) the result is just
    /// `[src, dest]`, which is also returned when the two points coincide. The graph is only
    /// read: the query points are linked in through a temporary overlay.
    pub fn get_path(&self, src: Vector2<T>, dest: Vector2<T>) -> Result<Vec<Vector2<T>>, NavError> {
        if !src.is_finite() || !dest.is_finite() {
            return Err(NavError::NonFiniteCoordinate);
        }

        if self.adjacency.is_empty()
            || src.fuzzy_eq_eps(dest, self.options.pos_equal_eps)
            || self.has_line_of_sight(src, dest)
        {
            debug!("direct path {:?} -> {:?}", src, dest);
            return Ok(vec![src, dest]);
        }

        let transients = [src, dest];
        let endpoints = [VertexId::Transient(0), VertexId::Transient(1)];
        let mut overlay: BTreeMap<VertexId, BTreeSet<VertexId>> = BTreeMap::new();
        for id in endpoints {
            for v in self.visible_from(id, &transients) {
                overlay.entry(id).or_default().insert(v);
                overlay.entry(v).or_default().insert(id);
            }
        }

        let nodes: Vec<VertexId> = self.adjacency.keys().copied().chain(endpoints).collect();
        let lookup: HashMap<VertexId, usize> =
            nodes.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let positions = nodes
            .iter()
            .map(|id| self.position_of(*id, &transients))
            .collect::<Option<Vec<_>>>()
            .ok_or(NavError::NoPathFound)?;
        let adjacency: Vec<Vec<usize>> = nodes
            .iter()
            .map(|id| {
                self.adjacency
                    .get(id)
                    .into_iter()
                    .chain(overlay.get(id))
                    .flatten()
                    .filter_map(|n| lookup.get(n).copied())
                    .collect()
            })
            .collect();

        let src_index = nodes.len() - 2;
        let dest_index = nodes.len() - 1;
        let route = path::shortest_path(&positions, &adjacency, src_index, dest_index)
            .ok_or(NavError::NoPathFound)?;

        debug!(
            "graph path {:?} -> {:?} through {} corners",
            src,
            dest,
            route.len().saturating_sub(2)
        );

        Ok(route.into_iter().map(|i| positions[i]).collect())
    }

    /// Placed polygons whose extents overlap the given box.
    pub(crate) fn polygons_in(&self, min_x: T, min_y: T, max_x: T, max_y: T) -> Vec<&Polygon<T>> {
        match &self.polygon_index {
            Some(pi) => pi
                .index
                .query(min_x, min_y, max_x, max_y)
                .into_iter()
                .filter_map(|i| pi.ids.get(i))
                .filter_map(|id| self.polygons.get(id))
                .collect(),
            None => self
                .polygons
                .values()
                .filter(|p| {
                    let e = p.extents();
                    e.min_x <= max_x && e.max_x >= min_x && e.min_y <= max_y && e.max_y >= min_y
                })
                .collect(),
        }
    }

    fn rebuild_index(&mut self) {
        self.polygon_index = None;
        if self.polygons.is_empty() {
            return;
        }

        let mut builder = StaticAABB2DIndexBuilder::new(self.polygons.len());
        let mut ids = Vec::with_capacity(self.polygons.len());
        for (id, polygon) in &self.polygons {
            let e = polygon.extents();
            builder.add(e.min_x, e.min_y, e.max_x, e.max_y);
            ids.push(*id);
        }

        match builder.build() {
            Ok(index) => self.polygon_index = Some(PolygonIndex { index, ids }),
            Err(e) => error!("failed to build polygon spatial index, using linear scan: {e}"),
        }
    }

    /// Vertexes of other polygons currently linked to a vertex of polygon `id`.
    fn touching_vertexes(&self, id: PolygonId) -> BTreeSet<VertexId> {
        self.adjacency
            .range(VertexId::corner(id, 0)..=VertexId::corner(id, usize::MAX))
            .flat_map(|(_, n)| n.iter().copied())
            .filter(|v| v.polygon() != Some(id))
            .collect()
    }

    fn resweep(&mut self, vertexes: &BTreeSet<VertexId>) {
        for &v in vertexes {
            self.disconnect_all(v);
        }
        for &v in vertexes {
            self.sweep_and_link(v);
        }
    }

    fn sweep_and_link(&mut self, pivot: VertexId) {
        for v in self.visible_from(pivot, &[]) {
            self.link(pivot, v);
        }
    }

    /// Test if two vertexes see each other: sides of a polygon always do, any other pair needs
    /// a clear line of sight.
    fn sees(&self, a: VertexId, b: VertexId) -> bool {
        if self.is_polygon_side(a, b) {
            return true;
        }
        match (self.vertex_position(a), self.vertex_position(b)) {
            (Some(pa), Some(pb)) => self.has_line_of_sight(pa, pb),
            _ => false,
        }
    }

    fn is_polygon_side(&self, a: VertexId, b: VertexId) -> bool {
        match (a, b) {
            (
                VertexId::Corner { polygon, index },
                VertexId::Corner {
                    polygon: other,
                    index: other_index,
                },
            ) if polygon == other => self
                .polygons
                .get(&polygon)
                .and_then(|p| p.vertex(index))
                .map_or(false, |v| v.is_neighbor_of(other_index)),
            _ => false,
        }
    }

    /// Current links, other than polygon sides, whose sight line `polygon` blocks.
    fn links_blocked_by(&self, polygon: &Polygon<T>) -> Vec<(VertexId, VertexId)> {
        let eps = self.options.nudge_dist;
        let extents = polygon.extents();
        let mut blocked = Vec::new();
        for (&a, neighbors) in &self.adjacency {
            let Some(pa) = self.vertex_position(a) else {
                continue;
            };
            for &b in neighbors.range((Bound::Excluded(a), Bound::Unbounded)) {
                if a.polygon() == Some(polygon.id()) || b.polygon() == Some(polygon.id()) {
                    continue;
                }
                let Some(pb) = self.vertex_position(b) else {
                    continue;
                };
                if bounds_overlap(segment_bounds(pa, pb, eps), &extents)
                    && !self.is_polygon_side(a, b)
                    && polygon.blocks_segment_eps(pa, pb, eps)
                {
                    blocked.push((a, b));
                }
            }
        }

        blocked
    }

    /// Unlinked vertex pairs whose sight line `removed` blocked and that now see each other.
    fn pairs_freed_by(&self, removed: &Polygon<T>) -> Vec<(VertexId, VertexId)> {
        let eps = self.options.nudge_dist;
        let extents = removed.extents();
        let vertexes: Vec<(VertexId, Vector2<T>)> = self
            .adjacency
            .keys()
            .filter_map(|&v| self.vertex_position(v).map(|p| (v, p)))
            .collect();

        let mut freed = Vec::new();
        for (i, &(a, pa)) in vertexes.iter().enumerate() {
            let linked = &self.adjacency[&a];
            for &(b, pb) in &vertexes[i + 1..] {
                if linked.contains(&b) || !bounds_overlap(segment_bounds(pa, pb, eps), &extents) {
                    continue;
                }
                if removed.blocks_segment_eps(pa, pb, eps) && self.sees(a, b) {
                    freed.push((a, b));
                }
            }
        }

        freed
    }

    fn link(&mut self, a: VertexId, b: VertexId) {
        if a == b {
            return;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    fn unlink(&mut self, a: VertexId, b: VertexId) {
        if let Some(list) = self.adjacency.get_mut(&a) {
            list.remove(&b);
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.remove(&a);
        }
    }

    /// Remove every link of `v` in both directions, keeping `v` itself.
    fn disconnect_all(&mut self, v: VertexId) {
        let Some(neighbors) = self.adjacency.get_mut(&v).map(std::mem::take) else {
            return;
        };
        for n in neighbors {
            if let Some(list) = self.adjacency.get_mut(&n) {
                list.remove(&v);
            }
        }
    }
}

/// Bounding box of the segment `p -> q` grown by `eps`, as `(min_x, min_y, max_x, max_y)`.
fn segment_bounds<T>(p: Vector2<T>, q: Vector2<T>, eps: T) -> (T, T, T, T)
where
    T: Real,
{
    (
        num_traits::real::Real::min(p.x, q.x) - eps,
        num_traits::real::Real::min(p.y, q.y) - eps,
        num_traits::real::Real::max(p.x, q.x) + eps,
        num_traits::real::Real::max(p.y, q.y) + eps,
    )
}

fn bounds_overlap<T>(bounds: (T, T, T, T), extents: &AABB<T>) -> bool
where
    T: Real,
{
    let (min_x, min_y, max_x, max_y) = bounds;
    min_x <= extents.max_x && max_x >= extents.min_x && min_y <= extents.max_y && max_y >= extents.min_y
}
