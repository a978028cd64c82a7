use log::info;
use navgraph2d::{
    core::math::vec2,
    navigation::{NavConfig, NavService, Shape},
    AABB,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let config: NavConfig<f64> = serde_json::from_str(
        r#"{
            "agents": [
                { "name": "mouse", "radius": 0.1 },
                { "name": "cart", "radius": 1.0 }
            ],
            "areas": ["warehouse"]
        }"#,
    )
    .unwrap();

    let mut service = NavService::new(config).unwrap();

    let shelves = vec![
        Shape::rect(vec2(0.0, 0.0), vec2(8.0, 1.0)),
        Shape::rect(vec2(0.0, 4.0), vec2(8.0, 1.0)),
        Shape::rect(vec2(7.0, 2.0), vec2(1.0, 1.0)),
        // self intersecting, skipped with a warning
        Shape::new(
            vec2(-8.0, 2.0),
            vec![vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(1.0, 0.0), vec2(0.0, 1.0)],
        ),
    ];
    let skipped = service
        .bake_area("warehouse", &shelves, Some(AABB::new(-15.0, -10.0, 15.0, 10.0)))
        .unwrap();
    info!("skipped shapes {:?}", skipped);

    let (src, dest) = (vec2(-6.0, 2.0), vec2(10.0, 2.0));
    for agent in ["mouse", "cart"] {
        let path = service.get_path(src, dest, "warehouse", agent).unwrap();
        info!("{agent}: {} points {:?}", path.len(), path);
    }

    // Dump the small agent's graph for external tools
    let snapshot = service.graph("warehouse", "mouse").unwrap().snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot).unwrap());
}
