//! Configuration for citynet
//!
//! Two sources feed a run: the optional global config (`[limits]` only) and
//! the network file describing cities and roads, which may carry its own
//! `[limits]` override.

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use global::GlobalConfig;
pub use types::{
    Limits, NetworkFile, RoadSpec, DEFAULT_MAX_CITIES, DEFAULT_MAX_FREQUENCY_ENTRIES,
    DEFAULT_MAX_ORDER_KEYS,
};

impl NetworkFile {
    /// Load a network description. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let network: NetworkFile = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            cities = network.cities.len(),
            roads = network.roads.len(),
            "loaded network file"
        );

        Ok(network)
    }

    /// Limits in effect for this network: the file's own `[limits]` win over
    /// the global config.
    pub fn effective_limits(&self, global: &GlobalConfig) -> Limits {
        self.limits.unwrap_or(global.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_toml_network() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("net.toml");
        fs::write(
            &path,
            r#"
cities = ["A", "B", "C"]

[[roads]]
from = "A"
to = "B"
distance = 5

[[roads]]
from = "B"
to = "C"
distance = 3
"#,
        )
        .unwrap();

        let network = NetworkFile::load(&path).unwrap();
        assert_eq!(network.cities, vec!["A", "B", "C"]);
        assert_eq!(network.roads.len(), 2);
        assert_eq!(network.roads[1], RoadSpec::new("B", "C", 3));
        assert!(network.limits.is_none());
    }

    #[test]
    fn test_load_json_network() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("net.json");
        fs::write(
            &path,
            r#"{"cities": ["X", "Y"], "roads": [{"from": "X", "to": "Y", "distance": 7}]}"#,
        )
        .unwrap();

        let network = NetworkFile::load(&path).unwrap();
        assert_eq!(network.cities, vec!["X", "Y"]);
        assert_eq!(network.roads[0].distance, 7);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = NetworkFile::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, crate::error::CityNetError::Io(_)));
    }

    #[test]
    fn test_load_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "cities = [\"A\"\n").unwrap();
        let err = NetworkFile::load(&path).unwrap_err();
        assert!(matches!(err, crate::error::CityNetError::Toml(_)));
    }

    #[test]
    fn test_effective_limits_prefers_network() {
        let global = GlobalConfig {
            limits: Limits {
                max_cities: 5,
                ..Limits::default()
            },
        };
        let mut network = NetworkFile::default();
        assert_eq!(network.effective_limits(&global).max_cities, 5);

        network.limits = Some(Limits {
            max_cities: 3,
            ..Limits::default()
        });
        assert_eq!(network.effective_limits(&global).max_cities, 3);
    }
}
