use navgraph2d::{
    core::math::{vec2, Vector2},
    polygon::Polygon,
    visibility_graph::{VertexId, VisibilityGraph},
};

pub fn path_length(path: &[Vector2<f64>]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// Axis aligned square centered on `center`.
pub fn square(center: (f64, f64), half_size: f64) -> Polygon<f64> {
    let (x, y) = center;
    let h = half_size;
    Polygon::new(&[
        vec2(x - h, y - h),
        vec2(x + h, y - h),
        vec2(x + h, y + h),
        vec2(x - h, y + h),
    ])
    .unwrap()
}

/// Square centered on `center` rotated by `angle` radians.
pub fn rotated_square(center: (f64, f64), half_size: f64, angle: f64) -> Polygon<f64> {
    let c = vec2(center.0, center.1);
    let h = half_size;
    let pts: Vec<_> = [(-h, -h), (h, -h), (h, h), (-h, h)]
        .iter()
        .map(|&(x, y)| vec2(x, y).rotate(angle) + c)
        .collect();
    Polygon::new(&pts).unwrap()
}

pub fn triangle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Polygon<f64> {
    Polygon::new(&[a.into(), b.into(), c.into()]).unwrap()
}

/// Panics if some link is only stored in one direction.
pub fn assert_symmetric(graph: &VisibilityGraph<f64>) {
    let view = graph.adjacency_view();
    for (id, neighbors) in &view {
        for n in neighbors {
            let back = view.get(n).unwrap_or_else(|| panic!("{n:?} linked but not in graph"));
            assert!(back.contains(id), "{n:?} is missing the link back to {id:?}");
        }
    }
}

/// Panics if two consecutive corners of a placed polygon are not linked.
pub fn assert_polygon_sides_linked(graph: &VisibilityGraph<f64>) {
    for polygon in graph.polygons() {
        let n = polygon.vertex_count();
        for i in 0..n {
            let a = VertexId::corner(polygon.id(), i);
            let b = VertexId::corner(polygon.id(), (i + 1) % n);
            assert!(
                graph.neighbors(a).any(|x| x == b),
                "side {a:?} -> {b:?} is not linked"
            );
        }
    }
}

/// Panics unless every point of `path` between the ends is a graph corner and every leg is clear.
pub fn assert_valid_path(graph: &VisibilityGraph<f64>, path: &[Vector2<f64>]) {
    assert!(path.len() >= 2);
    for leg in path.windows(2) {
        assert!(
            graph.has_line_of_sight(leg[0], leg[1]),
            "leg {:?} -> {:?} crosses an obstacle",
            leg[0],
            leg[1]
        );
    }
    assert_path_avoids_interiors(graph, path);
    for p in &path[1..path.len() - 1] {
        assert!(
            graph
                .adjacency_view()
                .keys()
                .any(|id| graph.vertex_position(*id) == Some(*p)),
            "{p:?} is not a graph corner"
        );
    }
}

/// Panics if a point sampled along `path` lies inside a placed polygon and off its boundary.
pub fn assert_path_avoids_interiors(graph: &VisibilityGraph<f64>, path: &[Vector2<f64>]) {
    const SAMPLES: usize = 16;
    for leg in path.windows(2) {
        for k in 1..SAMPLES {
            let t = k as f64 / SAMPLES as f64;
            let s = leg[0] + (leg[1] - leg[0]).scale(t);
            for polygon in graph.polygons() {
                if !polygon.contains_point(s) {
                    continue;
                }
                let depth = polygon
                    .edges()
                    .iter()
                    .map(|e| e.distance_to(s))
                    .fold(f64::INFINITY, f64::min);
                assert!(
                    depth < 1e-6,
                    "leg {:?} -> {:?} enters {} at {s:?}",
                    leg[0],
                    leg[1],
                    polygon.id()
                );
            }
        }
    }
}

/// Panics unless every side of every placed polygon has a clear line of sight both ways.
pub fn assert_sides_have_line_of_sight(graph: &VisibilityGraph<f64>) {
    for polygon in graph.polygons() {
        for e in polygon.edges() {
            assert!(
                graph.has_line_of_sight(e.p1(), e.p2()) && graph.has_line_of_sight(e.p2(), e.p1()),
                "side {:?} -> {:?} of {} reported blocked",
                e.p1(),
                e.p2(),
                polygon.id()
            );
        }
    }
}
