use crate::error::{CityNetError, Result};
use crate::graph::types::Distance;
use crate::graph::GraphProvider;

/// Single-source shortest distances and predecessor links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    dist: Vec<Distance>,
    prev: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance from the source, `Distance::INFINITE` when unreachable
    pub fn distance_to(&self, target: usize) -> Distance {
        self.dist.get(target).copied().unwrap_or(Distance::INFINITE)
    }

    pub fn predecessor(&self, target: usize) -> Option<usize> {
        self.prev.get(target).copied().flatten()
    }

    pub fn distances(&self) -> &[Distance] {
        &self.dist
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.prev
    }
}

/// State tracked during the selection rounds
struct DijkstraState {
    dist: Vec<Distance>,
    prev: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl DijkstraState {
    /// Seed every vertex with its direct road from the source
    fn seeded(provider: &dyn GraphProvider, source: usize) -> Self {
        let n = provider.vertex_count();
        let mut dist = Vec::with_capacity(n);
        let mut prev = Vec::with_capacity(n);
        for v in 0..n {
            let direct = provider.road(source, v);
            dist.push(direct);
            prev.push((v != source && direct.is_finite()).then_some(source));
        }
        dist[source] = Distance::ZERO;
        prev[source] = None;

        let mut visited = vec![false; n];
        visited[source] = true;

        Self {
            dist,
            prev,
            visited,
        }
    }

    /// Unvisited vertex with the smallest finite distance; ties go to the
    /// lowest index.
    fn closest_unvisited(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (v, d) in self.dist.iter().enumerate() {
            if self.visited[v] || !d.is_finite() {
                continue;
            }
            if best.is_none_or(|b| *d < self.dist[b]) {
                best = Some(v);
            }
        }
        best
    }

    fn relax_from(&mut self, provider: &dyn GraphProvider, u: usize) {
        for v in 0..self.dist.len() {
            if self.visited[v] {
                continue;
            }
            let road = provider.road(u, v);
            if !road.is_finite() {
                continue;
            }
            let candidate = self.dist[u] + road;
            if candidate < self.dist[v] {
                self.dist[v] = candidate;
                self.prev[v] = Some(u);
            }
        }
    }
}

/// Dijkstra over the provider's road matrix, linear-scan selection.
///
/// O(V²), which is fine for the bounded city counts this runs on. Stops
/// early once every remaining vertex is unreachable.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn dijkstra_distances(provider: &dyn GraphProvider, source: usize) -> Result<ShortestPaths> {
    let n = provider.vertex_count();
    if source >= n {
        return Err(CityNetError::not_found("city index", source));
    }

    let mut state = DijkstraState::seeded(provider, source);

    for _ in 1..n {
        let Some(u) = state.closest_unvisited() else {
            tracing::trace!("remaining cities unreachable");
            break;
        };
        state.visited[u] = true;
        state.relax_from(provider, u);
    }

    let reachable = state.dist.iter().filter(|d| d.is_finite()).count();
    tracing::debug!(reachable, "shortest paths computed");

    Ok(ShortestPaths {
        source,
        dist: state.dist,
        prev: state.prev,
    })
}

#[cfg(test)]
mod tests;
