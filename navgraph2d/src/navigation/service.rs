use super::{bake_visibility_graph, BakeOptions, NavConfig, Shape};
use crate::core::{math::Vector2, traits::Real};
use crate::error::NavError;
use crate::visibility_graph::VisibilityGraph;
use log::debug;
use static_aabb2d_index::AABB;
use std::collections::{BTreeMap, BTreeSet};

/// Holds one baked [VisibilityGraph] per area and agent and answers path queries against them.
///
/// # Examples
///
/// ```
/// # use navgraph2d::navigation::*;
/// # use navgraph2d::core::math::*;
/// let config = NavConfig {
///     agents: vec![AgentConfig::new("walker", 0.5)],
///     areas: vec!["yard".to_string()],
/// };
/// let mut service = NavService::new(config).unwrap();
/// let crate_box = Shape::rect(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0));
/// service.bake_area("yard", &[crate_box], None).unwrap();
///
/// let path = service
///     .get_path(Vector2::new(-4.0, 0.0), Vector2::new(4.0, 0.0), "yard", "walker")
///     .unwrap();
/// assert!(path.len() > 2);
/// ```
#[derive(Debug, Clone)]
pub struct NavService<T = f64>
where
    T: Real,
{
    config: NavConfig<T>,
    graphs: BTreeMap<(String, String), VisibilityGraph<T>>,
}

impl<T> NavService<T>
where
    T: Real,
{
    /// Create an empty service, fails if `config` does not validate.
    pub fn new(config: NavConfig<T>) -> Result<Self, NavError> {
        config.validate()?;
        Ok(NavService {
            config,
            graphs: BTreeMap::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &NavConfig<T> {
        &self.config
    }

    /// Bake and store the graph of `area` for every configured agent, replacing graphs baked
    /// before. Returns the sorted indexes of the shapes skipped for at least one agent.
    pub fn bake_area(
        &mut self,
        area: &str,
        shapes: &[Shape<T>],
        bounds: Option<AABB<T>>,
    ) -> Result<Vec<usize>, NavError> {
        self.check_area(area)?;

        let mut skipped = BTreeSet::new();
        let mut baked = Vec::with_capacity(self.config.agents.len());
        for agent in &self.config.agents {
            let mut options = BakeOptions::new(agent.radius);
            options.bounds = bounds;
            let result = bake_visibility_graph(shapes, &options)?;
            skipped.extend(result.skipped);
            baked.push((agent.name.clone(), result.graph));
        }

        for (agent, graph) in baked {
            debug!("storing graph for area '{area}' agent '{agent}'");
            self.graphs.insert((area.to_string(), agent), graph);
        }

        Ok(skipped.into_iter().collect())
    }

    /// Store a graph built elsewhere, returning the graph it replaces.
    pub fn insert_graph(
        &mut self,
        area: &str,
        agent: &str,
        graph: VisibilityGraph<T>,
    ) -> Result<Option<VisibilityGraph<T>>, NavError> {
        self.check_area(area)?;
        self.check_agent(agent)?;
        Ok(self
            .graphs
            .insert((area.to_string(), agent.to_string()), graph))
    }

    pub fn graph(&self, area: &str, agent: &str) -> Option<&VisibilityGraph<T>> {
        self.graphs.get(&(area.to_string(), agent.to_string()))
    }

    /// Mutable access for placing or removing obstacles at runtime.
    pub fn graph_mut(&mut self, area: &str, agent: &str) -> Option<&mut VisibilityGraph<T>> {
        self.graphs.get_mut(&(area.to_string(), agent.to_string()))
    }

    /// Shortest path for `agent` in `area`, see [VisibilityGraph::get_path].
    pub fn get_path(
        &self,
        src: Vector2<T>,
        dest: Vector2<T>,
        area: &str,
        agent: &str,
    ) -> Result<Vec<Vector2<T>>, NavError> {
        self.check_area(area)?;
        self.check_agent(agent)?;
        let graph = self.graph(area, agent).ok_or_else(|| NavError::UnknownGraph {
            area: area.to_string(),
            agent: agent.to_string(),
        })?;

        graph.get_path(src, dest)
    }

    fn check_area(&self, area: &str) -> Result<(), NavError> {
        if self.config.has_area(area) {
            Ok(())
        } else {
            Err(NavError::UnknownArea(area.to_string()))
        }
    }

    fn check_agent(&self, agent: &str) -> Result<(), NavError> {
        if self.config.agent(agent).is_some() {
            Ok(())
        } else {
            Err(NavError::UnknownAgent(agent.to_string()))
        }
    }
}
