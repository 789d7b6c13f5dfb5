use super::city_graph::CityGraph;
use super::types::Distance;

/// Trait for providing vertex count and pairwise road lengths to the
/// graph algorithms
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;

    /// Direct road length between two vertices; `Distance::INFINITE` when
    /// there is no road, `Distance::ZERO` on the diagonal.
    fn road(&self, from: usize, to: usize) -> Distance;
}

impl GraphProvider for CityGraph {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn road(&self, from: usize, to: usize) -> Distance {
        self.distance(from, to)
    }
}
