use serde::{Serialize, Serializer};

/// Largest road length accepted by edge insertion
pub const MAX_ROAD_DISTANCE: i64 = u32::MAX as i64;

/// Length of a road or of an accumulated route.
///
/// `Distance::INFINITE` marks "no direct road" in the matrix and
/// "unreachable" in shortest-path results. It compares greater than every
/// finite distance and absorbs addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const INFINITE: Distance = Distance(u64::MAX);

    pub fn new(km: u32) -> Self {
        Distance(u64::from(km))
    }

    pub fn is_finite(&self) -> bool {
        *self != Self::INFINITE
    }

    /// Kilometres, or `None` when infinite
    pub fn value(&self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if !self.is_finite() || !other.is_finite() {
            return Self::INFINITE;
        }
        self.0.checked_add(other.0).map_or(Self::INFINITE, Distance)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(km) => write!(f, "{}", km),
            None => write!(f, "INF"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// A city (graph vertex)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub name: String,
    /// Assigned in creation order, never reused
    pub index: usize,
}

/// Adjacency list entry: a road to `city` of length `distance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub city: usize,
    pub distance: u32,
}

/// Shortest route between two named cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    /// Total length, `None` when unreachable
    pub distance: Option<u64>,
    /// City names from `from` to `to`; empty when unreachable
    pub path: Vec<String>,
    pub path_length: usize,
}

/// Depth-first visitation from a named city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub start: String,
    pub order: Vec<String>,
}
