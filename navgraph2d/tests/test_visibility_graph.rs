mod test_utils;

use navgraph2d::{
    core::math::{vec2, Vector2},
    points,
    polygon::Polygon,
    visibility_graph::{VertexId, VisGraphOptions, VisibilityGraph},
    NavError,
};
use test_utils::{
    assert_path_avoids_interiors, assert_polygon_sides_linked, assert_sides_have_line_of_sight,
    assert_symmetric, assert_valid_path, path_length, rotated_square, square, triangle,
};

fn scene() -> (Polygon<f64>, Polygon<f64>, Polygon<f64>) {
    let a = triangle((-6.0, -1.0), (-4.0, -2.2), (-4.7, 1.3));
    let b = rotated_square((0.3, 0.2), 1.0, 0.37);
    let c = triangle((5.0, 0.5), (7.1, -1.3), (6.4, 2.2));
    (a, b, c)
}

#[test]
fn empty_graph_gives_direct_path() {
    let graph = VisibilityGraph::<f64>::new();
    let path = graph
        .get_path(vec2(0.0, 0.0), vec2(5.0, 5.0))
        .unwrap();
    assert_eq!(path, vec![vec2(0.0, 0.0), vec2(5.0, 5.0)]);
}

#[test]
fn clear_line_of_sight_gives_direct_path() {
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&square((0.0, 0.0), 1.0));
    let path = graph.get_path(vec2(-3.0, 2.0), vec2(3.0, 2.5)).unwrap();
    assert_eq!(path, vec![vec2(-3.0, 2.0), vec2(3.0, 2.5)]);
}

#[test]
fn square_obstacle_detour() {
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&square((0.0, 0.0), 1.0));

    let src = vec2(-2.0, 0.0);
    let dest = vec2(2.0, 0.0);
    let path = graph.get_path(src, dest).unwrap();

    assert_eq!(path.len(), 4);
    assert_eq!(path[0], src);
    assert_eq!(path[3], dest);
    // around two corners on the same side
    assert_eq!(path[1].y, path[2].y);
    assert_eq!(path[1].y.abs(), 1.0);
    let expected = 2.0 + 2.0 * 2.0f64.sqrt();
    assert!((path_length(&path) - expected).abs() < 1e-9);
    assert!(path_length(&path) > src.distance_to(dest));
    assert_valid_path(&graph, &path);
}

#[test]
fn path_through_scene() {
    let (a, b, c) = scene();
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&a);
    graph.add_polygon(&b);
    graph.add_polygon(&c);

    let src = vec2(-9.0, -0.4);
    let dest = vec2(9.0, 0.3);
    let path = graph.get_path(src, dest).unwrap();
    assert!(path.len() > 2);
    assert_valid_path(&graph, &path);

    // the reverse query has the same length
    let back = graph.get_path(dest, src).unwrap();
    assert!((path_length(&path) - path_length(&back)).abs() < 1e-9);
}

#[test]
fn links_are_symmetric_and_sides_linked() {
    let (a, b, c) = scene();
    let mut graph = VisibilityGraph::new();
    for p in [&a, &b, &c] {
        graph.add_polygon(p);
        assert_symmetric(&graph);
        assert_polygon_sides_linked(&graph);
    }
    graph.remove_polygon(&a);
    assert_symmetric(&graph);
    assert_polygon_sides_linked(&graph);
    assert_eq!(graph.vertex_count(), 7);
}

#[test]
fn path_queries_leave_graph_unchanged() {
    let (a, b, c) = scene();
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&a);
    graph.add_polygon(&b);
    graph.add_polygon(&c);

    let before = graph.adjacency_view();
    for (src, dest) in [
        ((-9.0, -0.4), (9.0, 0.3)),
        ((0.3, 4.0), (0.3, -4.0)),
        ((-5.0, 5.0), (6.0, -5.0)),
    ] {
        let _ = graph.get_path(src.into(), dest.into()).unwrap();
        assert_eq!(graph.adjacency_view(), before);
    }
    assert!(graph
        .adjacency_view()
        .keys()
        .all(|id| !matches!(id, VertexId::Transient(_))));
}

#[test]
fn adding_twice_is_a_no_op() {
    let (a, b, _) = scene();
    let mut graph = VisibilityGraph::new();
    assert!(graph.add_polygon(&a));
    assert!(graph.add_polygon(&b));
    let once = graph.adjacency_view();

    assert!(!graph.add_polygon(&b));
    // a clone is the same polygon
    assert!(!graph.add_polygon(&a.clone()));
    assert_eq!(graph.adjacency_view(), once);
    assert_eq!(graph.polygon_count(), 2);
}

#[test]
fn remove_restores_previous_graph() {
    let (a, b, c) = scene();
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&a);
    graph.add_polygon(&c);
    let before = graph.adjacency_view();

    graph.add_polygon(&b);
    assert_ne!(graph.adjacency_view(), before);
    assert!(graph.remove_polygon(&b));
    assert_eq!(graph.adjacency_view(), before);

    // removing again does nothing
    assert!(!graph.remove_polygon(&b));
    assert_eq!(graph.adjacency_view(), before);
}

#[test]
fn far_polygon_add_remove_keeps_aligned_links() {
    // (2, -1) -> (2, 1) runs through a square corner and along its side
    let sq = Polygon::new(&points![(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]).unwrap();
    let left = triangle((0.0, 1.0), (-1.0, 2.0), (-1.0, 0.0));
    let below = triangle((2.0, -1.0), (1.0, -2.0), (3.0, -2.0));
    let far = triangle((10.0, 10.0), (11.0, 10.0), (10.5, 11.0));

    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&sq);
    graph.add_polygon(&left);
    graph.add_polygon(&below);
    let before = graph.adjacency_view();
    let up = VertexId::corner(sq.id(), 2);
    let down = VertexId::corner(below.id(), 0);
    assert!(graph.neighbors(up).any(|n| n == down));

    graph.add_polygon(&far);
    assert!(graph.neighbors(up).any(|n| n == down));
    graph.remove_polygon(&far);
    assert_eq!(graph.adjacency_view(), before);
}

#[test]
fn insertion_order_gives_same_links() {
    let (a, b, c) = scene();
    let sq = square((0.3, 3.2), 0.8);
    let mut forward = VisibilityGraph::new();
    for p in [&a, &b, &c, &sq] {
        forward.add_polygon(p);
    }
    let mut backward = VisibilityGraph::new();
    for p in [&sq, &c, &b, &a] {
        backward.add_polygon(p);
    }
    assert_eq!(forward.adjacency_view(), backward.adjacency_view());

    // removing the middle obstacle matches never placing it
    forward.remove_polygon(&b);
    let mut without = VisibilityGraph::new();
    for p in [&a, &c, &sq] {
        without.add_polygon(p);
    }
    assert_eq!(forward.adjacency_view(), without.adjacency_view());
}

#[test]
fn path_from_polygon_corner_goes_around() {
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&square((0.0, 0.0), 1.0));

    let src = vec2(-1.0, -1.0);
    let dest = vec2(2.0, 1.5);
    assert!(!graph.has_line_of_sight(src, dest));
    let path = graph.get_path(src, dest).unwrap();
    assert_eq!(path, vec![src, vec2(1.0, -1.0), dest]);
    assert_path_avoids_interiors(&graph, &path);
    for leg in path.windows(2) {
        let mid = (leg[0] + leg[1]).scale(0.5);
        assert!(graph.is_point_free(mid) || leg[0].y == leg[1].y);
    }

    // and the other way around
    let back = graph.get_path(dest, src).unwrap();
    assert_eq!(back, vec![dest, vec2(1.0, -1.0), src]);
}

#[test]
fn path_from_polygon_side_goes_around() {
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&square((0.0, 0.0), 1.0));

    // resting on the bottom side, the destination is straight across the square
    let src = vec2(0.0, -1.0);
    let dest = vec2(0.0, 2.0);
    assert!(!graph.has_line_of_sight(src, dest));
    let path = graph.get_path(src, dest).unwrap();
    assert_eq!(path.len(), 4);
    let expected = 1.0 + 2.0 + 2.0f64.sqrt();
    assert!((path_length(&path) - expected).abs() < 1e-9);
    assert_path_avoids_interiors(&graph, &path);

    // leaving the side outwards is clear
    assert!(graph.has_line_of_sight(src, vec2(0.5, -3.0)));
}

#[test]
fn polygon_sides_have_line_of_sight() {
    let (a, b, c) = scene();
    let mut graph = VisibilityGraph::new();
    for p in [&a, &b, &c] {
        graph.add_polygon(p);
    }
    graph.add_polygon(&Polygon::new(&points![
        (0.0, 5.0),
        (3.0, 5.0),
        (3.0, 8.0),
        (2.0, 8.0),
        (2.0, 6.0),
        (1.0, 6.0),
        (1.0, 8.0),
        (0.0, 8.0)
    ])
    .unwrap());
    assert_sides_have_line_of_sight(&graph);
}

#[test]
fn removing_obstacle_reopens_direct_path() {
    let mut graph = VisibilityGraph::new();
    let sq = square((0.0, 0.0), 1.0);
    graph.add_polygon(&sq);
    assert_eq!(graph.get_path(vec2(-2.0, 0.0), vec2(2.0, 0.0)).unwrap().len(), 4);

    graph.remove_polygon_by_id(sq.id());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(
        graph.get_path(vec2(-2.0, 0.0), vec2(2.0, 0.0)).unwrap(),
        vec![vec2(-2.0, 0.0), vec2(2.0, 0.0)]
    );
}

#[test]
fn same_source_and_destination() {
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&square((0.0, 0.0), 1.0));
    let p = vec2(0.0, 0.0);
    assert_eq!(graph.get_path(p, p).unwrap(), vec![p, p]);
}

#[test]
fn non_finite_query() {
    let graph = VisibilityGraph::<f64>::new();
    assert_eq!(
        graph.get_path(vec2(f64::NAN, 0.0), vec2(1.0, 0.0)),
        Err(NavError::NonFiniteCoordinate)
    );
}

#[test]
fn concave_obstacle_detour() {
    // U shape opening upwards, going from inside the notch to below
    let u = Polygon::new(&points![
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (2.0, 3.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (0.0, 3.0)
    ])
    .unwrap();
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&u);

    let src = vec2(1.5, 2.0);
    let dest = vec2(1.5, -1.0);
    let path = graph.get_path(src, dest).unwrap();
    assert_valid_path(&graph, &path);
    // out through the top of the notch and around one side
    assert!(path.iter().any(|p| p.y == 3.0));
    assert!(path_length(&path) > 6.0);
}

#[test]
fn snapshot_matches_graph() {
    let (a, b, c) = scene();
    let mut graph = VisibilityGraph::with_options(VisGraphOptions::new());
    graph.add_polygon(&a);
    graph.add_polygon(&b);
    graph.add_polygon(&c);

    let snapshot = graph.snapshot();
    assert_eq!(snapshot.polygons.len(), 3);
    assert_eq!(snapshot.vertexes.len(), graph.vertex_count());
    assert_eq!(snapshot.segments().len(), graph.link_count());
    for v in &snapshot.vertexes {
        assert_eq!(graph.vertex_position(v.id), Some(v.position));
        assert_eq!(graph.neighbors(v.id).collect::<Vec<_>>(), v.neighbors);
    }
}

#[test]
fn f32_graph() {
    let mut graph = VisibilityGraph::<f32>::new();
    let sq = Polygon::new(&[
        vec2(-1.0f32, -1.0),
        vec2(1.0, -1.0),
        vec2(1.0, 1.0),
        vec2(-1.0, 1.0),
    ])
    .unwrap();
    graph.add_polygon(&sq);
    let path: Vec<Vector2<f32>> = graph.get_path(vec2(-2.0, 0.0), vec2(2.0, 0.0)).unwrap();
    assert_eq!(path.len(), 4);
}
