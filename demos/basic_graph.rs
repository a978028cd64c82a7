use log::info;
use navgraph2d::{
    core::math::{vec2, Vector2},
    points,
    polygon::Polygon,
    visibility_graph::{VertexId, VisibilityGraph},
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    direct_path();
    detour_and_removal();
    inspecting_the_graph();
}

fn path_length(path: &[Vector2<f64>]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

fn direct_path() {
    // Nothing placed, every query is a straight line
    let graph = VisibilityGraph::<f64>::new();
    let path = graph.get_path(vec2(0.0, 0.0), vec2(5.0, 5.0)).unwrap();
    assert_eq!(path, vec![vec2(0.0, 0.0), vec2(5.0, 5.0)]);
}

fn detour_and_removal() {
    let square = Polygon::new(&points![(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]).unwrap();
    let mut graph = VisibilityGraph::new();
    assert!(graph.add_polygon(&square));

    // The path walks around two corners of the square
    let path = graph.get_path(vec2(-2.0, 0.0), vec2(2.0, 0.0)).unwrap();
    info!("detour: {:?}, length {:.3}", path, path_length(&path));
    assert_eq!(path.len(), 4);

    // Removing the square opens the straight line again
    assert!(graph.remove_polygon(&square));
    let path = graph.get_path(vec2(-2.0, 0.0), vec2(2.0, 0.0)).unwrap();
    assert_eq!(path.len(), 2);
}

fn inspecting_the_graph() {
    let wall = Polygon::new(&points![(2.0, -3.0), (2.5, -3.0), (2.5, 3.0), (2.0, 3.0)]).unwrap();
    let block = Polygon::new(&points![(-2.0, -1.0), (0.0, -1.2), (-0.5, 1.0)]).unwrap();
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(&wall);
    graph.add_polygon(&block);

    info!(
        "{} polygons, {} vertexes, {} links",
        graph.polygon_count(),
        graph.vertex_count(),
        graph.link_count()
    );

    // Neighbors of the first corner of the wall, with their positions
    let corner = VertexId::corner(wall.id(), 0);
    for n in graph.neighbors(corner) {
        info!("{:?} sees {:?} at {:?}", corner, n, graph.vertex_position(n));
    }

    // Every link is stored both ways
    for (id, neighbors) in graph.adjacency_view() {
        for n in neighbors {
            assert!(graph.neighbors(n).any(|x| x == id));
        }
    }
}
