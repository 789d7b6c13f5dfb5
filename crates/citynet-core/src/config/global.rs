//! Global configuration for citynet (stored in ~/.config/citynet/config.toml)

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::types::Limits;
use crate::error::{CityNetError, Result};

const CONFIG_DIR: &str = "citynet";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CITYNET_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub limits: Limits,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    CityNetError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no global config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            CityNetError::Other(format!(
                "failed to read global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            CityNetError::Other(format!(
                "failed to parse global config from {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_limits() {
        let config: GlobalConfig = toml::from_str("[limits]\nmax_cities = 8\n").unwrap();
        assert_eq!(config.limits.max_cities, 8);
        assert_eq!(config.limits.max_order_keys, 30);
    }

    #[test]
    fn test_parse_empty() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }
}
