//! Error type shared by the fallible operations of the crate.
use thiserror::Error;

/// Errors returned by polygon construction, path queries and the navigation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Fewer than three distinct points were given for a polygon.
    #[error("polygon needs at least 3 distinct points, got {vertex_count}")]
    InvalidPolygon { vertex_count: usize },

    /// The point loop encloses no area (all points collinear).
    #[error("polygon encloses zero area")]
    DegeneratePolygon,

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate in input")]
    NonFiniteCoordinate,

    /// The point loop has two edges crossing each other.
    #[error("polygon is self intersecting")]
    SelfIntersectingPolygon,

    /// Outline or agent radius was negative or not finite.
    #[error("radius must be finite and non-negative")]
    InvalidRadius,

    /// The destination is not reachable from the source through the visibility graph.
    #[error("no path found between source and destination")]
    NoPathFound,

    /// The navigation configuration does not list the area.
    #[error("area '{0}' is not configured")]
    UnknownArea(String),

    /// The navigation configuration does not list the agent.
    #[error("agent '{0}' is not configured")]
    UnknownAgent(String),

    /// No graph has been baked for the area and agent combination.
    #[error("no graph baked for area '{area}' and agent '{agent}'")]
    UnknownGraph { area: String, agent: String },

    /// The navigation configuration failed validation.
    #[error("invalid navigation config: {0}")]
    InvalidConfig(String),
}
