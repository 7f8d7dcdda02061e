//! # Config Module
//!
//! World configuration consumed at startup: the world seed and the biome
//! profile. Grid dimensions live in [`crate::voxel_data`] as compile-time
//! constants; everything here is the runtime-tunable remainder, loadable
//! from a JSON file or falling back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::terrain::biome::BiomeAttributes;

/// The runtime configuration of one world.
///
/// All world state is regenerated from `seed` + `biome`; nothing is ever
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// The seed shared by every noise field of the world.
    pub seed: u32,
    /// The terrain profile.
    #[serde(default)]
    pub biome: BiomeAttributes,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            seed: 1337,
            biome: BiomeAttributes::default(),
        }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents were not valid configuration JSON.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl WorldConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - The configuration file to read
    ///
    /// # Returns
    /// The parsed configuration, or a [`ConfigError`] naming what failed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = WorldConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: WorldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_biome_falls_back_to_the_default() {
        let parsed: WorldConfig = serde_json::from_str(r#"{ "seed": 99 }"#).unwrap();
        assert_eq!(parsed.seed, 99);
        assert_eq!(parsed.biome, BiomeAttributes::default());
    }

    #[test]
    fn file_loading_reports_io_and_parse_errors() {
        let missing = WorldConfig::from_json_file("/definitely/not/a/file.json");
        assert!(matches!(missing, Err(ConfigError::Io(_))));

        let dir = std::env::temp_dir().join("voxel-terrain-config-test.json");
        fs::write(&dir, "{ not json").unwrap();
        let broken = WorldConfig::from_json_file(&dir);
        assert!(matches!(broken, Err(ConfigError::Parse(_))));

        fs::write(&dir, serde_json::to_string(&WorldConfig::default()).unwrap()).unwrap();
        let loaded = WorldConfig::from_json_file(&dir).unwrap();
        assert_eq!(loaded, WorldConfig::default());
        let _ = fs::remove_file(&dir);
    }
}
