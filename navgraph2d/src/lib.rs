//! 2D visibility graph navigation around polygon obstacles.
//!
//! Obstacles are simple polygons ([polygon::Polygon]) placed into a
//! [visibility_graph::VisibilityGraph], which links every pair of corners that can see each
//! other and answers shortest path queries through those links. The [navigation] module wraps
//! this for agents of a given radius: obstacle shapes are inflated by the radius
//! ([polygon::polygon_outline]) before being placed, and one graph is kept per area and agent.
//!
//! All geometry is generic over [core::traits::Real] (`f32` and `f64`).
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod avl_tree;
pub mod core;
pub mod error;
pub mod navigation;
pub mod polygon;
pub mod visibility_graph;

pub use static_aabb2d_index::AABB;

pub use crate::error::NavError;
