use crate::core::{math::Vector2, traits::Real};
use crate::error::NavError;
use crate::polygon::{has_self_intersects, polygon_outline, OutlineOptions, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Obstacle outline placed in the world: a point loop relative to `center`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape<T = f64> {
    pub center: Vector2<T>,
    pub points: Vec<Vector2<T>>,
}

impl<T> Shape<T>
where
    T: Real,
{
    pub fn new(center: Vector2<T>, points: Vec<Vector2<T>>) -> Self {
        Shape { center, points }
    }

    /// Axis aligned box of `size` centered on `center`.
    pub fn rect(center: Vector2<T>, size: Vector2<T>) -> Self {
        let hx = size.x / T::two();
        let hy = size.y / T::two();
        Shape {
            center,
            points: vec![
                Vector2::new(-hx, -hy),
                Vector2::new(-hx, hy),
                Vector2::new(hx, hy),
                Vector2::new(hx, -hy),
            ],
        }
    }

    /// Points in world coordinates.
    pub fn global_points(&self) -> Vec<Vector2<T>> {
        self.points.iter().map(|p| *p + self.center).collect()
    }

    #[inline]
    pub fn has_self_intersects(&self) -> bool {
        has_self_intersects(&self.points)
    }

    /// Copy of this shape inflated by `radius`, see [polygon_outline].
    pub fn outline(&self, radius: T, options: &OutlineOptions<T>) -> Result<Shape<T>, NavError> {
        Ok(Shape {
            center: self.center,
            points: polygon_outline(&self.points, radius, options)?,
        })
    }

    /// Build the obstacle polygon in world coordinates.
    pub fn to_polygon(&self) -> Result<Polygon<T>, NavError> {
        Polygon::new(&self.global_points())
    }
}
