//! The city network: vertex list plus two synchronized edge representations
//!
//! Every road is stored twice. The dense matrix answers "how long is the
//! road from i to j" in constant time and drives the algorithms; the
//! adjacency lists keep the per-city view in insertion order (newest first)
//! for display. Both are updated together or not at all.

use std::collections::HashSet;

use serde::Serialize;

use super::types::{City, Distance, Neighbor};
use crate::bail_edge;
use crate::config::{Limits, NetworkFile, RoadSpec};
use crate::error::{CityNetError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct CityGraph {
    cities: Vec<City>,
    matrix: Vec<Vec<Distance>>,
    adjacency: Vec<Vec<Neighbor>>,
    #[serde(skip)]
    capacity: usize,
}

impl CityGraph {
    /// Create an empty graph holding at most `capacity` cities
    pub fn new(capacity: usize) -> Self {
        Self {
            cities: Vec::with_capacity(capacity),
            matrix: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a graph from city names and named roads.
    ///
    /// More than `limits.max_cities` names are clamped with a warning; a road
    /// whose missing endpoints were all clamped away is skipped with a
    /// warning. A road naming a city that was never declared is `NotFound`.
    #[tracing::instrument(skip_all, fields(cities = city_names.len(), roads = roads.len()))]
    pub fn build<S: AsRef<str>>(
        city_names: &[S],
        roads: &[RoadSpec],
        limits: &Limits,
    ) -> Result<Self> {
        let kept = city_names.len().min(limits.max_cities);
        if kept < city_names.len() {
            tracing::warn!(
                requested = city_names.len(),
                limit = limits.max_cities,
                "city count exceeds limit, keeping the first {}",
                limits.max_cities
            );
        }

        let mut graph = CityGraph::new(limits.max_cities);
        for name in &city_names[..kept] {
            graph.add_city(name.as_ref())?;
        }

        let dropped: HashSet<&str> = city_names[kept..]
            .iter()
            .map(|name| name.as_ref().trim())
            .collect();

        for road in roads {
            let (a, b) = match (graph.index_of(&road.from), graph.index_of(&road.to)) {
                (Ok(a), Ok(b)) => (a, b),
                (from, to) => {
                    // a missing endpoint that was never declared wins over a clamped one
                    let undeclared = [(&road.from, from), (&road.to, to)]
                        .into_iter()
                        .find_map(|(name, found)| {
                            found.err().filter(|_| !dropped.contains(name.trim()))
                        });
                    if let Some(e) = undeclared {
                        return Err(e);
                    }
                    tracing::warn!(
                        from = %road.from,
                        to = %road.to,
                        "skipping road to a city beyond the capacity limit"
                    );
                    continue;
                }
            };
            graph.add_edge(a, b, road.distance)?;
        }

        tracing::debug!(cities = graph.len(), "graph built");
        Ok(graph)
    }

    /// Build a graph from a loaded network file
    pub fn from_network(network: &NetworkFile, limits: &Limits) -> Result<Self> {
        Self::build(&network.cities, &network.roads, limits)
    }

    /// Append a city with the next free index
    pub fn add_city(&mut self, name: &str) -> Result<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CityNetError::invalid_value("city name", "(empty)"));
        }
        if self.cities.iter().any(|c| c.name == name) {
            return Err(CityNetError::DuplicateName {
                name: name.to_string(),
            });
        }
        if self.cities.len() >= self.capacity {
            return Err(CityNetError::capacity_exceeded(
                "cities",
                self.capacity,
                self.cities.len() + 1,
            ));
        }

        let index = self.cities.len();
        self.cities.push(City {
            name: name.to_string(),
            index,
        });

        for row in &mut self.matrix {
            row.push(Distance::INFINITE);
        }
        let mut row = vec![Distance::INFINITE; index + 1];
        row[index] = Distance::ZERO;
        self.matrix.push(row);
        self.adjacency.push(Vec::new());

        tracing::trace!(%name, index, "city added");
        Ok(index)
    }

    /// Insert or update the undirected road between `a` and `b`.
    ///
    /// Re-adding a road overwrites its length in both representations; the
    /// adjacency entry keeps its position.
    pub fn add_edge(&mut self, a: usize, b: usize, distance: i64) -> Result<()> {
        for index in [a, b] {
            if index >= self.cities.len() {
                return Err(CityNetError::not_found("city index", index));
            }
        }
        if a == b {
            bail_edge!("self-loop on {}", self.cities[a].name);
        }
        if distance < 0 {
            bail_edge!(
                "negative distance {} between {} and {}",
                distance,
                self.cities[a].name,
                self.cities[b].name
            );
        }
        let km = u32::try_from(distance).map_err(|_| {
            CityNetError::invalid_edge(format!("distance {} out of range", distance))
        })?;

        self.matrix[a][b] = Distance::new(km);
        self.matrix[b][a] = Distance::new(km);
        upsert_neighbor(&mut self.adjacency[a], b, km);
        upsert_neighbor(&mut self.adjacency[b], a, km);

        tracing::trace!(a, b, km, "road added");
        Ok(())
    }

    /// Look up a city index by name, ignoring surrounding whitespace as
    /// `add_city` does
    pub fn index_of(&self, name: &str) -> Result<usize> {
        let name = name.trim();
        self.cities
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| CityNetError::not_found("city", name))
    }

    pub fn city(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Direct road length, `Distance::INFINITE` if absent or out of range
    pub fn distance(&self, a: usize, b: usize) -> Distance {
        self.matrix
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(Distance::INFINITE)
    }

    pub fn matrix_row(&self, index: usize) -> &[Distance] {
        self.matrix.get(index).map_or(&[], Vec::as_slice)
    }

    /// Roads leaving `index`, most recently added first
    pub fn neighbors(&self, index: usize) -> &[Neighbor] {
        self.adjacency.get(index).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct roads
    pub fn road_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

fn upsert_neighbor(list: &mut Vec<Neighbor>, city: usize, distance: u32) {
    match list.iter_mut().find(|n| n.city == city) {
        Some(existing) => existing.distance = distance,
        None => list.insert(0, Neighbor { city, distance }),
    }
}
