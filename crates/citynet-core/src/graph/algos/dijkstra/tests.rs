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
fn test_dijkstra_chain() {
    let g = graph(&["A", "B", "C"], &[("A", "B", 5), ("B", "C", 3)]);
    let paths = dijkstra_distances(&g, 0).unwrap();
    assert_eq!(paths.distance_to(0), Distance::ZERO);
    assert_eq!(paths.distance_to(1), Distance::new(5));
    assert_eq!(paths.distance_to(2), Distance::new(8));
    assert_eq!(paths.predecessor(2), Some(1));
    assert_eq!(paths.predecessor(1), Some(0));
    assert_eq!(paths.predecessor(0), None);
}

#[test]
fn test_dijkstra_indirect_beats_direct() {
    let g = graph(
        &["A", "B", "C"],
        &[("A", "C", 10), ("A", "B", 2), ("B", "C", 3)],
    );
    let paths = dijkstra_distances(&g, 0).unwrap();
    assert_eq!(paths.distance_to(2), Distance::new(5));
    assert_eq!(paths.predecessor(2), Some(1));
}

#[test]
fn test_dijkstra_direct_edge_seeds_predecessor() {
    let g = graph(&["A", "B"], &[("A", "B", 4)]);
    let paths = dijkstra_distances(&g, 1).unwrap();
    assert_eq!(paths.source(), 1);
    assert_eq!(paths.predecessor(0), Some(1));
    assert_eq!(paths.distances(), &[Distance::new(4), Distance::ZERO]);
}

#[test]
fn test_dijkstra_unreachable() {
    let g = graph(&["A", "B", "C", "D"], &[("A", "B", 1), ("C", "D", 1)]);
    let paths = dijkstra_distances(&g, 0).unwrap();
    assert!(!paths.distance_to(2).is_finite());
    assert!(!paths.distance_to(3).is_finite());
    assert_eq!(paths.predecessor(3), None);
    assert_eq!(paths.predecessors(), &[None, Some(0), None, None]);
}

#[test]
fn test_dijkstra_equal_routes_keep_first_found() {
    // A-B-D and A-C-D both cost 2; B has the lower index and is settled first
    let g = graph(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)],
    );
    let paths = dijkstra_distances(&g, 0).unwrap();
    assert_eq!(paths.distance_to(3), Distance::new(2));
    assert_eq!(paths.predecessor(3), Some(1));
}

#[test]
fn test_dijkstra_zero_length_roads() {
    let g = graph(&["A", "B", "C"], &[("A", "B", 0), ("B", "C", 0)]);
    let paths = dijkstra_distances(&g, 0).unwrap();
    assert_eq!(paths.distance_to(2), Distance::ZERO);
    assert_eq!(paths.predecessor(2), Some(1));
}

#[test]
fn test_dijkstra_single_city() {
    let g = graph(&["A"], &[]);
    let paths = dijkstra_distances(&g, 0).unwrap();
    assert_eq!(paths.distances(), &[Distance::ZERO]);
}

#[test]
fn test_dijkstra_source_out_of_range() {
    let g = graph(&["A"], &[]);
    assert!(matches!(
        dijkstra_distances(&g, 1),
        Err(CityNetError::NotFound { .. })
    ));
}

#[test]
fn test_dijkstra_large_distances_do_not_overflow() {
    let max = i64::from(u32::MAX);
    let g = graph(&["A", "B", "C"], &[("A", "B", max), ("B", "C", max)]);
    let paths = dijkstra_distances(&g, 0).unwrap();
    assert_eq!(paths.distance_to(2).value(), Some(2 * u64::from(u32::MAX)));
}
