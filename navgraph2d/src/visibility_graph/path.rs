use crate::core::{math::Vector2, traits::Real};

/// Dijkstra over a dense node array using the `O(V^2)` frontier scan.
///
/// `adjacency[i]` lists the neighbors of node `i`, edge weights are the Euclidean distances
/// between `positions`. The search stops as soon as `dest` is settled. Returns the node indexes
/// from `src` to `dest` inclusive, or `None` if `dest` cannot be reached.
pub(crate) fn shortest_path<T>(
    positions: &[Vector2<T>],
    adjacency: &[Vec<usize>],
    src: usize,
    dest: usize,
) -> Option<Vec<usize>>
where
    T: Real,
{
    let n = positions.len();
    if src >= n || dest >= n || adjacency.len() != n {
        return None;
    }

    let mut dist: Vec<Option<T>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    dist[src] = Some(T::zero());

    loop {
        let mut current: Option<(usize, T)> = None;
        for (i, d) in dist.iter().enumerate() {
            if settled[i] {
                continue;
            }
            if let Some(d) = *d {
                if current.map_or(true, |(_, best)| d < best) {
                    current = Some((i, d));
                }
            }
        }

        let (u, du) = current?;
        if u == dest {
            break;
        }
        settled[u] = true;

        for &v in &adjacency[u] {
            if v >= n || settled[v] {
                continue;
            }
            let candidate = du + positions[u].distance_to(positions[v]);
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
            }
        }
    }

    let mut path = vec![dest];
    let mut at = dest;
    while let Some(p) = prev[at] {
        path.push(p);
        at = p;
    }
    path.reverse();

    (path[0] == src).then_some(path)
}
