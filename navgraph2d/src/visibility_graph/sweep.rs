//! Rotational plane sweep computing the set of vertexes visible from one pivot point.
use super::{VertexId, VisibilityGraph};
use crate::avl_tree::AvlTree;
use crate::core::{
    math::{clockwise_angle, Vector2},
    traits::Real,
};
use crate::polygon::{Edge, Polygon, PolygonId, Vertex};
use log::trace;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Identifies one polygon edge for the duration of a sweep.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct EdgeId {
    pub(crate) polygon: PolygonId,
    pub(crate) index: usize,
}

#[derive(Debug, Copy, Clone)]
struct SweepEvent<T> {
    angle: T,
    dist: T,
    id: VertexId,
    pos: Vector2<T>,
}

impl<T> VisibilityGraph<T>
where
    T: Real,
{
    /// Position of a vertex, transient ids index into `transients`.
    pub(crate) fn position_of(&self, id: VertexId, transients: &[Vector2<T>]) -> Option<Vector2<T>> {
        match id {
            VertexId::Corner { polygon, index } => self
                .polygons
                .get(&polygon)
                .and_then(|p| p.vertex(index))
                .map(|v| v.pos()),
            VertexId::Transient(i) => transients.get(i).copied(),
        }
    }

    fn edge_of(&self, id: &EdgeId) -> Option<&Edge<T>> {
        self.polygons.get(&id.polygon).and_then(|p| p.edge(id.index))
    }

    /// Compute every vertex visible from `pivot` against all placed polygons.
    ///
    /// Vertexes are visited clockwise around the pivot starting from the +x direction, nearer
    /// vertexes first on equal angles. The edges crossed by the current sweep ray are kept in an
    /// [AvlTree] ordered by their distance to the pivot; a vertex is hidden when one of the
    /// active edges nearer than it crosses the sight line. Vertexes passing that test are
    /// confirmed with [VisibilityGraph::has_line_of_sight], which also catches sight lines
    /// through corners and lines starting or ending on a polygon boundary. Sides of the pivot's
    /// own polygon are always visible. `transients` are extra query points (without edges) that
    /// take part in the sweep as [VertexId::Transient] vertexes.
    pub(crate) fn visible_from(&self, pivot: VertexId, transients: &[Vector2<T>]) -> Vec<VertexId> {
        let Some(pivot_pos) = self.position_of(pivot, transients) else {
            return Vec::new();
        };

        let own: Option<(&Polygon<T>, &Vertex<T>)> = match pivot {
            VertexId::Corner { polygon, index } => self
                .polygons
                .get(&polygon)
                .and_then(|p| p.vertex(index).map(|v| (p, v))),
            VertexId::Transient(_) => None,
        };

        let mut events: Vec<SweepEvent<T>> = self
            .polygons
            .values()
            .flat_map(|p| {
                let polygon = p.id();
                p.vertexes().iter().map(move |v| {
                    (
                        VertexId::Corner {
                            polygon,
                            index: v.index(),
                        },
                        v.pos(),
                    )
                })
            })
            .chain(
                transients
                    .iter()
                    .enumerate()
                    .map(|(i, &pos)| (VertexId::Transient(i), pos)),
            )
            .filter(|(id, _)| *id != pivot)
            .map(|(id, pos)| SweepEvent {
                angle: clockwise_angle(pivot_pos, pos),
                dist: pivot_pos.distance_to(pos),
                id,
                pos,
            })
            .collect();

        events.sort_by(|a, b| {
            a.angle
                .partial_cmp(&b.angle)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.dist.partial_cmp(&b.dist).unwrap_or(Ordering::Equal))
                .then_with(|| a.id.cmp(&b.id))
        });

        // distances stay fixed for the whole sweep so the tree order never changes under it
        let dist: HashMap<EdgeId, T> = self
            .polygons
            .values()
            .flat_map(|p| {
                let polygon = p.id();
                p.edges().iter().enumerate().map(move |(index, e)| {
                    (EdgeId { polygon, index }, e.distance_to(pivot_pos))
                })
            })
            .collect();
        let key = |e: &EdgeId| dist.get(e).copied().unwrap_or_else(T::unbounded);

        let mut active = AvlTree::with_comparator(|a: &EdgeId, b: &EdgeId| {
            key(a)
                .partial_cmp(&key(b))
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cmp(b))
        });

        // seed with the edges crossing the initial ray towards +x
        for polygon in self.polygons_in(pivot_pos.x, pivot_pos.y, T::unbounded(), pivot_pos.y) {
            for (index, edge) in polygon.edges().iter().enumerate() {
                if let Some((own_polygon, own_vertex)) = own {
                    if own_polygon.id() == polygon.id() && edge.has_vertex(own_vertex.index()) {
                        continue;
                    }
                }
                if edge.ray_intersect(pivot_pos, Vector2::unit_x()).is_some() {
                    let id = EdgeId {
                        polygon: polygon.id(),
                        index,
                    };
                    if !active.contains(&id) {
                        active.insert(id);
                    }
                }
            }
        }

        let mut visible = Vec::new();
        for event in &events {
            if self.is_visible(pivot_pos, own, event, &active, &key) {
                visible.push(event.id);
            }

            let VertexId::Corner { polygon, index } = event.id else {
                continue;
            };
            let Some(vertex) = self.polygons.get(&polygon).and_then(|p| p.vertex(index)) else {
                continue;
            };

            // edges behind the sweep leave before the edges ahead of it enter
            for e in vertex.ccw_edges(pivot_pos) {
                active.remove(&EdgeId { polygon, index: e });
            }
            for e in vertex.cw_edges(pivot_pos) {
                let id = EdgeId { polygon, index: e };
                if !active.contains(&id) {
                    active.insert(id);
                }
            }
        }

        trace!(
            "swept {:?}: {} of {} vertexes visible",
            pivot,
            visible.len(),
            events.len()
        );

        visible
    }

    fn is_visible<C, K>(
        &self,
        pivot_pos: Vector2<T>,
        own: Option<(&Polygon<T>, &Vertex<T>)>,
        event: &SweepEvent<T>,
        active: &AvlTree<EdgeId, C>,
        key: &K,
    ) -> bool
    where
        C: Fn(&EdgeId, &EdgeId) -> Ordering,
        K: Fn(&EdgeId) -> T,
    {
        if let (Some((polygon, vertex)), VertexId::Corner { polygon: other, index }) = (own, event.id) {
            if other == polygon.id() && vertex.is_neighbor_of(index) {
                return true;
            }
        }

        // an edge crossing the sight line has to be nearer than its far end
        let eps = self.options.nudge_dist;
        for id in active.iter() {
            if key(id) >= event.dist {
                break;
            }
            if let Some(edge) = self.edge_of(id) {
                if edge.intersects_segment(pivot_pos, event.pos, eps) {
                    return false;
                }
            }
        }

        // sight lines grazing corners or resting on a boundary at either end
        self.has_line_of_sight(pivot_pos, event.pos)
    }
}
