//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest distances with predecessor links
//! - `dfs`: depth-first visitation order

pub mod dfs;
pub mod dijkstra;

pub use dfs::dfs_traverse;
pub use dijkstra::{dijkstra_distances, ShortestPaths};
