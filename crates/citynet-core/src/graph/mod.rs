//! City network graph and the algorithms that read it
//!
//! - `CityGraph`: vertex list with a distance matrix and adjacency lists
//! - Dijkstra shortest paths with predecessor-based path reconstruction
//! - Depth-first traversal in ascending index order
//! - `GraphProvider` seam the algorithms are written against

pub mod algos;
pub mod city_graph;
pub mod path;
pub mod query;
pub mod traversal;
pub mod types;

pub use algos::{dfs_traverse, dijkstra_distances, ShortestPaths};
pub use city_graph::CityGraph;
pub use query::{depth_first_order, shortest_path};
pub use traversal::GraphProvider;
pub use types::{City, Distance, Neighbor, PathResult, TraversalResult, MAX_ROAD_DISTANCE};
