mod test_utils;

use navgraph2d::{points, polygon::has_self_intersects};
use test_utils::ModifiedLoopSet;

#[test]
fn convex_loops_are_simple() {
    let hexagon = points![
        (2.0, 0.0),
        (1.0, 1.7),
        (-1.0, 1.7),
        (-2.0, 0.0),
        (-1.0, -1.7),
        (1.0, -1.7)
    ];
    ModifiedLoopSet::new(&hexagon, true, true).accept_closure(&mut |pts, state| {
        assert!(!has_self_intersects(&pts), "{state:?}");
    });

    let triangle = points![(0.0, 0.0), (3.0, 0.2), (1.1, 2.5)];
    assert!(!has_self_intersects(&triangle));
}

#[test]
fn concave_loops_are_simple() {
    let comb = points![
        (0.0, 0.0),
        (5.0, 0.0),
        (5.0, 3.0),
        (4.0, 3.0),
        (4.0, 1.0),
        (3.0, 1.0),
        (3.0, 3.0),
        (2.0, 3.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (0.0, 3.0)
    ];
    ModifiedLoopSet::new(&comb, true, true).accept_closure(&mut |pts, state| {
        assert!(!has_self_intersects(&pts), "{state:?}");
    });
}

#[test]
fn bowtie_intersects() {
    let bowtie = points![(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
    ModifiedLoopSet::new(&bowtie, true, true).accept_closure(&mut |pts, state| {
        assert!(has_self_intersects(&pts), "{state:?}");
    });
}

#[test]
fn pentagram_intersects() {
    let pentagram = points![
        (0.0, 2.0),
        (1.2, -1.6),
        (-1.9, 0.6),
        (1.9, 0.6),
        (-1.2, -1.6)
    ];
    ModifiedLoopSet::new(&pentagram, true, true).accept_closure(&mut |pts, state| {
        assert!(has_self_intersects(&pts), "{state:?}");
    });
}

#[test]
fn crossing_far_from_sweep_start() {
    // only the last two edges cross, well after most of the sweep has passed
    let pts = points![
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 2.0),
        (8.0, 2.0),
        (9.5, 5.0),
        (9.0, -1.0)
    ];
    assert!(has_self_intersects(&pts));
}

#[test]
fn too_few_points() {
    assert!(!has_self_intersects::<f64>(&[]));
    assert!(!has_self_intersects(&points![(0.0, 0.0), (1.0, 1.0)]));
}
