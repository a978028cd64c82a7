//! Turning obstacle shapes into baked visibility graphs and serving path queries per area and
//! agent.
mod bake;
mod config;
mod service;
mod shape;

pub use bake::{bake_visibility_graph, BakeOptions, BakeResult};
pub use config::{AgentConfig, NavConfig};
pub use service::NavService;
pub use shape::Shape;
