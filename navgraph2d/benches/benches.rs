use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use navgraph2d::{
    core::math::vec2,
    polygon::{has_self_intersects, polygon_outline, OutlineOptions, Polygon},
    visibility_graph::VisibilityGraph,
};
use test_scenes::*;

fn build_graph(polygons: &[Polygon<f64>]) -> VisibilityGraph<f64> {
    let mut graph = VisibilityGraph::new();
    for p in polygons {
        graph.add_polygon(p);
    }
    graph
}

fn bench_build(b: &mut Bencher, polygons: &[Polygon<f64>]) {
    b.iter(|| build_graph(polygons))
}

fn bench_get_path(b: &mut Bencher, graph: &VisibilityGraph<f64>, far: f64) {
    b.iter(|| graph.get_path(vec2(-3.0, -2.9), vec2(far, far + 0.1)))
}

fn visibility_graph_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_graph");
    group.sample_size(10);
    for &n in &[2usize, 4, 6] {
        let polygons = square_grid(n);
        group.bench_with_input(BenchmarkId::new("build_grid", n * n), &polygons, |b, p| {
            bench_build(b, p)
        });

        let graph = build_graph(&polygons);
        let far = n as f64 * 4.0;
        group.bench_with_input(BenchmarkId::new("get_path_grid", n * n), &graph, |b, g| {
            bench_get_path(b, g, far)
        });
    }

    group.finish();
}

fn polygon_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &spikes in &[8usize, 64, 512] {
        let pts = star(spikes);
        group.bench_with_input(BenchmarkId::new("self_intersects_star", spikes), &pts, |b, p| {
            b.iter(|| has_self_intersects(p))
        });
        group.bench_with_input(BenchmarkId::new("outline_star", spikes), &pts, |b, p| {
            b.iter(|| polygon_outline(p, 0.5, &OutlineOptions::new()))
        });
    }

    group.finish();
}

criterion_group!(benches, visibility_graph_group, polygon_group);
criterion_main!(benches);
