use crate::error::{CityNetError, Result};
use crate::graph::GraphProvider;

/// Depth-first visitation order from `start`.
///
/// Neighbours are scanned in ascending index order, so the lowest-index
/// unvisited neighbour is always entered first. Only the connected
/// component of `start` is covered. Recursion depth is bounded by the
/// vertex count.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn dfs_traverse(provider: &dyn GraphProvider, start: usize) -> Result<Vec<usize>> {
    let n = provider.vertex_count();
    if start >= n {
        return Err(CityNetError::not_found("city index", start));
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    visit(provider, start, &mut visited, &mut order);

    tracing::debug!(visited = order.len(), "depth-first traversal complete");
    Ok(order)
}

fn visit(
    provider: &dyn GraphProvider,
    current: usize,
    visited: &mut [bool],
    order: &mut Vec<usize>,
) {
    visited[current] = true;
    order.push(current);

    for next in 0..visited.len() {
        if !visited[next] && provider.road(current, next).is_finite() {
            visit(provider, next, visited, order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Limits, RoadSpec};
    use crate::graph::CityGraph;

    fn graph(names: &[&str], roads: &[(&str, &str, i64)]) -> CityGraph {
        let roads: Vec<RoadSpec> = roads
            .iter()
            .map(|(a, b, d)| RoadSpec::new(*a, *b, *d))
            .collect();
        CityGraph::build(names, &roads, &Limits::default()).unwrap()
    }

    #[test]
    fn test_dfs_prefers_lowest_index_neighbor() {
        // A-C and A-B added in that order; B (index 1) is still entered first
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "C", 1), ("A", "B", 1), ("B", "D", 1)],
        );
        assert_eq!(dfs_traverse(&g, 0).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_dfs_goes_deep_before_wide() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("A", "D", 1), ("B", "C", 1)],
        );
        assert_eq!(dfs_traverse(&g, 0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_dfs_isolated_start() {
        let g = graph(&["A", "B", "C"], &[("B", "C", 2)]);
        assert_eq!(dfs_traverse(&g, 0).unwrap(), vec![0]);
    }

    #[test]
    fn test_dfs_covers_component_only() {
        let g = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "B", 1), ("D", "E", 1), ("E", "C", 1)],
        );
        assert_eq!(dfs_traverse(&g, 2).unwrap(), vec![2, 4, 3]);
        assert_eq!(dfs_traverse(&g, 1).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_dfs_handles_cycles() {
        let g = graph(
            &["A", "B", "C"],
            &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)],
        );
        assert_eq!(dfs_traverse(&g, 2).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_dfs_zero_length_road_is_followed() {
        let g = graph(&["A", "B"], &[("A", "B", 0)]);
        assert_eq!(dfs_traverse(&g, 1).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_dfs_start_out_of_range() {
        let g = graph(&["A"], &[]);
        assert!(matches!(
            dfs_traverse(&g, 3),
            Err(CityNetError::NotFound { .. })
        ));
    }
}
