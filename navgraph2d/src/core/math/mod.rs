//! Points, lines, segments and the orientation/angle predicates the sweeps are built from.
mod base_math;
mod line2;
mod line_segment;
mod seg_intersect;
mod vector2;

pub use base_math::*;
pub use line2::Line2;
pub use line_segment::{compare_points, LineSegment, PointSortingMode};
pub use seg_intersect::{ray_seg_intr, segment_intersect, segment_intersect_eps, SegmentIntersect};
pub use vector2::{vec2, Vector2};
