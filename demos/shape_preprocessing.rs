use log::{info, warn};
use navgraph2d::{
    core::math::vec2,
    navigation::Shape,
    points,
    polygon::{has_self_intersects, polygon_outline, OutlineOptions, Polygon},
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    self_intersection_check();
    outline();
    shapes();
}

fn self_intersection_check() {
    let square = points![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    assert!(!has_self_intersects(&square));

    // Same points in bowtie order
    let bowtie = points![(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
    assert!(has_self_intersects(&bowtie));
    if has_self_intersects(&bowtie) {
        warn!("bowtie is not a simple polygon, it should not be placed as an obstacle");
    }
}

fn outline() {
    // L shape: five convex corners get rounded, the reflex one gets a single mitre point
    let l_shape = points![(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (1.0, 1.0), (1.0, 3.0), (0.0, 3.0)];
    let inflated = polygon_outline(&l_shape, 0.25, &OutlineOptions::new()).unwrap();
    info!("outline of {} points has {} points", l_shape.len(), inflated.len());
    assert_eq!(inflated.len(), 5 * 4 + 1);

    // Finer arcs
    let options = OutlineOptions {
        max_arc_step: std::f64::consts::PI / 8.0,
        ..OutlineOptions::new()
    };
    let finer = polygon_outline(&l_shape, 0.25, &options).unwrap();
    assert!(finer.len() > inflated.len());

    let polygon = Polygon::new(&inflated).unwrap();
    info!("inflated area {:.3}", polygon.area());
}

fn shapes() {
    // Shapes hold local points around a center
    let crate_box = Shape::rect(vec2(10.0, 5.0), vec2(2.0, 1.0));
    let global = crate_box.global_points();
    info!("box corners {:?}", global);
    assert_eq!(global[0], vec2(9.0, 4.5));

    let inflated = crate_box.outline(0.5, &OutlineOptions::new()).unwrap();
    let obstacle = inflated.to_polygon().unwrap();
    assert!(obstacle.contains_point(vec2(10.0, 5.0)));
}
