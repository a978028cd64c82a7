use super::Shape;
use crate::core::{math::Vector2, traits::Real};
use crate::error::NavError;
use crate::polygon::{OutlineOptions, Polygon};
use crate::visibility_graph::{VisGraphOptions, VisibilityGraph};
use log::{debug, warn};
use static_aabb2d_index::AABB;

/// Options for [bake_visibility_graph].
#[derive(Debug, Clone)]
pub struct BakeOptions<T> {
    /// Clearance kept between the agent path and every obstacle.
    pub agent_radius: T,
    /// Rectangle placed as an extra obstacle around the area, if any.
    ///
    /// The rectangle is an ordinary polygon in the baked graph, so
    /// [VisibilityGraph::is_point_free](crate::visibility_graph::VisibilityGraph::is_point_free)
    /// reports every point inside the area as not free. Paths between points inside it are not
    /// affected, only legs leaving the area through its sides are blocked.
    pub bounds: Option<AABB<T>>,
    pub outline: OutlineOptions<T>,
    pub graph: VisGraphOptions<T>,
}

impl<T> BakeOptions<T>
where
    T: Real,
{
    pub fn new(agent_radius: T) -> Self {
        Self {
            agent_radius,
            bounds: None,
            outline: OutlineOptions::new(),
            graph: VisGraphOptions::new(),
        }
    }

    pub fn with_bounds(mut self, bounds: AABB<T>) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

impl<T> Default for BakeOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::zero())
    }
}

/// Result of [bake_visibility_graph].
#[derive(Debug, Clone)]
pub struct BakeResult<T = f64>
where
    T: Real,
{
    pub graph: VisibilityGraph<T>,
    /// Indexes of the input shapes left out of the graph.
    pub skipped: Vec<usize>,
}

/// Build the visibility graph an agent of [BakeOptions::agent_radius] navigates with.
///
/// Each shape is inflated by the agent radius and placed as an obstacle. Shapes that self
/// intersect or do not form a valid polygon are logged and skipped rather than failing the whole
/// bake. Returns [NavError::InvalidRadius] for a negative or non-finite radius, and any error
/// building the bounds rectangle.
///
/// # Examples
///
/// ```
/// # use navgraph2d::navigation::*;
/// # use navgraph2d::core::math::*;
/// let shapes = vec![
///     Shape::rect(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0)),
///     // bowtie, skipped
///     Shape::new(
///         Vector2::new(5.0, 0.0),
///         vec![
///             Vector2::new(0.0, 0.0),
///             Vector2::new(1.0, 1.0),
///             Vector2::new(1.0, 0.0),
///             Vector2::new(0.0, 1.0),
///         ],
///     ),
/// ];
/// let baked = bake_visibility_graph(&shapes, &BakeOptions::new(0.5)).unwrap();
/// assert_eq!(baked.graph.polygon_count(), 1);
/// assert_eq!(baked.skipped, vec![1]);
/// ```
pub fn bake_visibility_graph<T>(
    shapes: &[Shape<T>],
    options: &BakeOptions<T>,
) -> Result<BakeResult<T>, NavError>
where
    T: Real,
{
    let radius = options.agent_radius;
    if !radius.is_finite() || radius < T::zero() {
        return Err(NavError::InvalidRadius);
    }

    let mut graph = VisibilityGraph::with_options(options.graph.clone());
    let mut skipped = Vec::new();

    for (i, shape) in shapes.iter().enumerate() {
        match inflate(shape, radius, &options.outline) {
            Ok(polygon) => {
                graph.add_polygon(&polygon);
            }
            Err(e) => {
                warn!("skipping shape {i}: {e}");
                skipped.push(i);
            }
        }
    }

    if let Some(b) = &options.bounds {
        let rect = Polygon::new(&[
            Vector2::new(b.min_x, b.min_y),
            Vector2::new(b.max_x, b.min_y),
            Vector2::new(b.max_x, b.max_y),
            Vector2::new(b.min_x, b.max_y),
        ])?;
        graph.add_polygon(&rect);
    }

    debug!(
        "baked {} of {} shapes: {} vertexes, {} links",
        shapes.len() - skipped.len(),
        shapes.len(),
        graph.vertex_count(),
        graph.link_count()
    );

    Ok(BakeResult { graph, skipped })
}

fn inflate<T>(shape: &Shape<T>, radius: T, options: &OutlineOptions<T>) -> Result<Polygon<T>, NavError>
where
    T: Real,
{
    if shape.has_self_intersects() {
        return Err(NavError::SelfIntersectingPolygon);
    }

    shape.outline(radius, options)?.to_polygon()
}
