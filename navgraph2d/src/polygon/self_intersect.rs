use crate::core::{
    math::{compare_points, LineSegment, PointSortingMode, Vector2},
    traits::Real,
};
use std::cmp::Ordering;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum EventKind {
    Start,
    End,
}

#[derive(Debug, Copy, Clone)]
struct Event {
    segment: usize,
    kind: EventKind,
}

/// Test if the closed point loop `points` has two edges that properly cross.
///
/// Runs a left to right plane sweep over the loop's edges. Edges touching at an endpoint (which
/// every pair of consecutive edges does) are not intersections. Loops with fewer than 3 points
/// never self intersect.
///
/// # Examples
///
/// ```
/// # use navgraph2d::points;
/// # use navgraph2d::polygon::has_self_intersects;
/// let square = points![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// assert!(!has_self_intersects(&square));
///
/// let bowtie = points![(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
/// assert!(has_self_intersects(&bowtie));
/// ```
pub fn has_self_intersects<T>(points: &[Vector2<T>]) -> bool
where
    T: Real,
{
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mode = PointSortingMode::IncreasingXY;
    let segments: Vec<LineSegment<T>> = (0..n)
        .map(|i| LineSegment::new(points[i], points[(i + 1) % n], mode))
        .collect();

    let event_point = |e: &Event| {
        let s = &segments[e.segment];
        match e.kind {
            EventKind::Start => s.p1,
            EventKind::End => s.p2,
        }
    };

    let mut events: Vec<Event> = (0..n)
        .flat_map(|segment| {
            [
                Event {
                    segment,
                    kind: EventKind::Start,
                },
                Event {
                    segment,
                    kind: EventKind::End,
                },
            ]
        })
        .collect();

    // x then y, starts before ends at the same point so touching edges are both active
    events.sort_by(|a, b| {
        compare_points(event_point(a), event_point(b), mode).then_with(|| {
            match (a.kind, b.kind) {
                (EventKind::Start, EventKind::End) => Ordering::Less,
                (EventKind::End, EventKind::Start) => Ordering::Greater,
                _ => a.segment.cmp(&b.segment),
            }
        })
    });

    let crosses = |a: usize, b: usize| segments[a].try_intersect(&segments[b], false).is_some();

    let mut active: Vec<usize> = Vec::with_capacity(n);
    for event in &events {
        let current = event.segment;
        match event.kind {
            EventKind::Start => {
                let seg = &segments[current];
                let i = active
                    .partition_point(|&s| segments[s].sweep_cmp(seg) != Ordering::Greater);
                active.insert(i, current);
                if i > 0 && crosses(current, active[i - 1]) {
                    return true;
                }
                if i + 1 < active.len() && crosses(current, active[i + 1]) {
                    return true;
                }
            }
            EventKind::End => {
                // located by identity, the order may be stale after crossings
                let Some(j) = active.iter().position(|&s| s == current) else {
                    continue;
                };
                if j > 0 && j + 1 < active.len() && crosses(active[j - 1], active[j + 1]) {
                    return true;
                }
                active.remove(j);
            }
        }
    }

    false
}
