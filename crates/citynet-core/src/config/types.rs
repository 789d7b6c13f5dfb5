//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default upper bound on cities in one network
pub const DEFAULT_MAX_CITIES: usize = 20;

/// Default upper bound on (symbol, weight) entries fed to the merge tree
pub const DEFAULT_MAX_FREQUENCY_ENTRIES: usize = 20;

/// Default upper bound on keys inserted into the order tree
pub const DEFAULT_MAX_ORDER_KEYS: usize = 30;

/// Fixed size bounds for graphs and trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_cities")]
    pub max_cities: usize,

    #[serde(default = "default_max_frequency_entries")]
    pub max_frequency_entries: usize,

    #[serde(default = "default_max_order_keys")]
    pub max_order_keys: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_cities: DEFAULT_MAX_CITIES,
            max_frequency_entries: DEFAULT_MAX_FREQUENCY_ENTRIES,
            max_order_keys: DEFAULT_MAX_ORDER_KEYS,
        }
    }
}

fn default_max_cities() -> usize {
    DEFAULT_MAX_CITIES
}

fn default_max_frequency_entries() -> usize {
    DEFAULT_MAX_FREQUENCY_ENTRIES
}

fn default_max_order_keys() -> usize {
    DEFAULT_MAX_ORDER_KEYS
}

/// A road between two named cities, as written in a network file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadSpec {
    pub from: String,
    pub to: String,
    /// Road length; signed so that negative input reaches edge validation
    pub distance: i64,
}

impl RoadSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// Network description file
///
/// ```toml
/// cities = ["A", "B", "C"]
///
/// [[roads]]
/// from = "A"
/// to = "B"
/// distance = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default)]
    pub cities: Vec<String>,

    #[serde(default)]
    pub roads: Vec<RoadSpec>,

    /// Overrides the global limits for this network only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<Limits>,
}
