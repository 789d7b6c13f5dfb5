//! Name-level operations over a built graph

use super::algos::{dfs_traverse, dijkstra_distances};
use super::city_graph::CityGraph;
use super::types::{PathResult, TraversalResult};
use crate::error::Result;

/// Shortest route between two named cities.
///
/// An unreachable destination is a normal result with `found == false` and
/// an empty path.
pub fn shortest_path(graph: &CityGraph, from: &str, to: &str) -> Result<PathResult> {
    let source = graph.index_of(from)?;
    let target = graph.index_of(to)?;

    let paths = dijkstra_distances(graph, source)?;
    let distance = paths.distance_to(target).value();
    let path: Vec<String> = paths
        .path_to(target)
        .unwrap_or_default()
        .into_iter()
        .map(|index| city_name(graph, index))
        .collect();

    Ok(PathResult {
        from: from.to_string(),
        to: to.to_string(),
        found: distance.is_some(),
        distance,
        path_length: path.len().saturating_sub(1),
        path,
    })
}

/// Depth-first visitation order from a named city
pub fn depth_first_order(graph: &CityGraph, start: &str) -> Result<TraversalResult> {
    let index = graph.index_of(start)?;
    let order = dfs_traverse(graph, index)?
        .into_iter()
        .map(|i| city_name(graph, i))
        .collect();

    Ok(TraversalResult {
        start: start.to_string(),
        order,
    })
}

fn city_name(graph: &CityGraph, index: usize) -> String {
    graph
        .city(index)
        .map(|c| c.name.clone())
        .unwrap_or_default()
}
