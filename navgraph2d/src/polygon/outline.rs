use crate::core::{
    math::{angle, delta_angle, loop_signed_area, point_on_circle, Vector2},
    traits::Real,
};
use crate::error::NavError;

/// Options for [polygon_outline].
#[derive(Debug, Clone)]
pub struct OutlineOptions<T> {
    /// Largest angle (in radians) a single step of a rounded corner may span. Defaults to
    /// `PI / 2`.
    pub max_arc_step: T,
    /// Fuzzy comparison epsilon used to skip repeated input points.
    pub pos_equal_eps: T,
}

impl<T> OutlineOptions<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            max_arc_step: T::pi() / T::two(),
            pos_equal_eps: T::pos_equal_eps(),
        }
    }
}

impl<T> Default for OutlineOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Inflate a closed point loop outward by `radius`.
///
/// Approximates the Minkowski sum of the loop with a disk: every convex corner is replaced by
/// an arc of points from one offset edge endpoint to the other (at most
/// [OutlineOptions::max_arc_step] per step, arc points pushed out to `radius / cos(step / 2)` so
/// the chords stay clear of the corner), and every reflex or straight corner by the single mitre
/// point where the two offset edges meet. The input may wind either way, output keeps the input
/// winding. Self intersections created by the inflation are not detected or repaired.
///
/// # Examples
///
/// ```
/// # use navgraph2d::points;
/// # use navgraph2d::polygon::*;
/// # use navgraph2d::core::math::*;
/// let square = points![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
/// let outline = polygon_outline(&square, 0.5, &OutlineOptions::new()).unwrap();
/// // each 90 degree corner becomes 2 offset edge endpoints plus 2 arc points
/// assert_eq!(outline.len(), 16);
/// assert!(outline.iter().all(|p| !Polygon::new(&square).unwrap().contains_point(*p)));
/// ```
pub fn polygon_outline<T>(
    points: &[Vector2<T>],
    radius: T,
    options: &OutlineOptions<T>,
) -> Result<Vec<Vector2<T>>, NavError>
where
    T: Real,
{
    if !radius.is_finite() || radius < T::zero() {
        return Err(NavError::InvalidRadius);
    }

    let mut pts: Vec<Vector2<T>> = Vec::with_capacity(points.len());
    for &p in points {
        if pts.last().map_or(true, |l| !l.fuzzy_eq_eps(p, options.pos_equal_eps)) {
            pts.push(p);
        }
    }
    while pts.len() > 1 && pts[0].fuzzy_eq_eps(pts[pts.len() - 1], options.pos_equal_eps) {
        pts.pop();
    }

    let n = pts.len();
    if n < 3 {
        return Err(NavError::InvalidPolygon { vertex_count: n });
    }

    if radius.fuzzy_eq_zero() {
        return Ok(pts);
    }

    let area2 = loop_signed_area(&pts);
    if area2.fuzzy_eq_zero() {
        return Err(NavError::DegeneratePolygon);
    }

    // outward is to the right of travel for counter clockwise loops
    let ccw = area2 > T::zero();
    let outward = |dir: Vector2<T>| {
        let n = dir.perp();
        if ccw {
            -n
        } else {
            n
        }
    };

    let max_step = if options.max_arc_step > T::zero() {
        options.max_arc_step
    } else {
        T::pi() / T::two()
    };

    let mut result = Vec::with_capacity(n * 3);
    for i in 0..n {
        let prev = pts[(i + n - 1) % n];
        let cur = pts[i];
        let next = pts[(i + 1) % n];

        let dir_in = (cur - prev).normalize();
        let dir_out = (next - cur).normalize();
        let n1 = outward(dir_in);
        let n2 = outward(dir_out);

        let turn = dir_in.perp_dot(dir_out);
        let is_convex = if ccw { turn > T::zero() } else { turn < T::zero() };

        if !is_convex {
            // mitre: both offset lines meet on the normal bisector
            let bisector = (n1 + n2).try_normalize().unwrap_or(n1);
            let cos_half = n1.dot(bisector);
            result.push(cur + bisector.scale(radius / cos_half));
            continue;
        }

        let a = cur + n1.scale(radius);
        let b = cur + n2.scale(radius);
        result.push(a);

        let start_angle = angle(cur, a);
        let sweep = delta_angle(start_angle, angle(cur, b));
        // fuzzy so a corner of exactly k * max_step does not lose a step to rounding
        let ratio = sweep.abs() / max_step + T::fuzzy_epsilon();
        let steps = ratio.floor().to_usize().unwrap_or(0) + 1;
        let step_angle = sweep / T::from_literal((steps + 1) as f64);
        let step_radius = radius / (step_angle / T::two()).cos();
        for k in 1..=steps {
            let a_k = start_angle + step_angle * T::from_literal(k as f64);
            result.push(point_on_circle(step_radius, cur, a_k));
        }

        result.push(b);
    }

    Ok(result)
}
