//! Configuration loading and typed config structures for the ranch.
//!
//! The canonical configuration lives in `ranch-config.yaml` at the
//! project root. Every field has a default, so a missing file or a
//! partial document still produces a working configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One in-game day in milliseconds (24000 world ticks at 20 per second).
const DAY_INTERVAL_MS: u64 = 1_200_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level ranch configuration.
///
/// Mirrors the structure of `ranch-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RanchConfig {
    /// World names and the degradation seed.
    #[serde(default)]
    pub world: WorldConfig,

    /// Timer intervals.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// State file locations.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Structure file locations.
    #[serde(default)]
    pub structures: StructuresConfig,
}

impl RanchConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// World names and the degradation seed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorldConfig {
    /// World farm islands are placed in.
    #[serde(default = "default_farm_world")]
    pub farm_world: String,

    /// World the market structure lives in.
    #[serde(default = "default_market_world")]
    pub market_world: String,

    /// Seed for deterministic weed growth.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            farm_world: default_farm_world(),
            market_world: default_market_world(),
            seed: default_seed(),
        }
    }
}

/// Timer intervals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Milliseconds between daily degradation passes.
    #[serde(default = "default_day_interval_ms")]
    pub day_interval_ms: u64,

    /// Milliseconds between scoreboard refreshes.
    #[serde(default = "default_display_refresh_ms")]
    pub display_refresh_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            day_interval_ms: default_day_interval_ms(),
            display_refresh_ms: default_display_refresh_ms(),
        }
    }
}

/// State file locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageConfig {
    /// Directory state documents are written to.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Economy document file name.
    #[serde(default = "default_economy_file")]
    pub economy_file: String,

    /// Farms document file name.
    #[serde(default = "default_farms_file")]
    pub farms_file: String,

    /// Professions document file name.
    #[serde(default = "default_professions_file")]
    pub professions_file: String,
}

impl StorageConfig {
    /// Full path to the economy document.
    pub fn economy_path(&self) -> PathBuf {
        self.data_dir.join(&self.economy_file)
    }

    /// Full path to the farms document.
    pub fn farms_path(&self) -> PathBuf {
        self.data_dir.join(&self.farms_file)
    }

    /// Full path to the professions document.
    pub fn professions_path(&self) -> PathBuf {
        self.data_dir.join(&self.professions_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            economy_file: default_economy_file(),
            farms_file: default_farms_file(),
            professions_file: default_professions_file(),
        }
    }
}

/// Structure file locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructuresConfig {
    /// Directory schematic files live in.
    #[serde(default = "default_schematics_dir")]
    pub schematics_dir: PathBuf,

    /// Farm island schematic file name.
    #[serde(default = "default_farm_schematic")]
    pub farm_schematic: String,

    /// Market schematic file name.
    #[serde(default = "default_market_schematic")]
    pub market_schematic: String,
}

impl StructuresConfig {
    /// Full path to the farm island schematic.
    pub fn farm_schematic_path(&self) -> PathBuf {
        self.schematics_dir.join(&self.farm_schematic)
    }

    /// Full path to the market schematic.
    pub fn market_schematic_path(&self) -> PathBuf {
        self.schematics_dir.join(&self.market_schematic)
    }
}

impl Default for StructuresConfig {
    fn default() -> Self {
        Self {
            schematics_dir: default_schematics_dir(),
            farm_schematic: default_farm_schematic(),
            market_schematic: default_market_schematic(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_farm_world() -> String {
    String::from("ranch_farms")
}

fn default_market_world() -> String {
    String::from("ranch_market")
}

const fn default_seed() -> u64 {
    0
}

const fn default_day_interval_ms() -> u64 {
    DAY_INTERVAL_MS
}

const fn default_display_refresh_ms() -> u64 {
    1000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_economy_file() -> String {
    String::from("economy.yaml")
}

fn default_farms_file() -> String {
    String::from("farms.yaml")
}

fn default_professions_file() -> String {
    String::from("professions.yaml")
}

fn default_schematics_dir() -> PathBuf {
    PathBuf::from("schematics")
}

fn default_farm_schematic() -> String {
    String::from("farm_island.schem")
}

fn default_market_schematic() -> String {
    String::from("market.schem")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = RanchConfig::parse("{}").unwrap();
        assert_eq!(config, RanchConfig::default());
        assert_eq!(config.world.farm_world, "ranch_farms");
        assert_eq!(config.simulation.day_interval_ms, 1_200_000);
        assert_eq!(config.simulation.display_refresh_ms, 1000);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let yaml = "world:\n  farm_world: pasture\n  seed: 42\nsimulation:\n  day_interval_ms: 5000\n";
        let config = RanchConfig::parse(yaml).unwrap();
        assert_eq!(config.world.farm_world, "pasture");
        assert_eq!(config.world.market_world, "ranch_market");
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.simulation.day_interval_ms, 5000);
        assert_eq!(config.simulation.display_refresh_ms, 1000);
    }

    #[test]
    fn storage_paths_join_the_data_dir() {
        let config = RanchConfig::default();
        assert_eq!(config.storage.economy_path(), PathBuf::from("data/economy.yaml"));
        assert_eq!(config.storage.farms_path(), PathBuf::from("data/farms.yaml"));
        assert_eq!(
            config.storage.professions_path(),
            PathBuf::from("data/professions.yaml")
        );
    }

    #[test]
    fn structure_paths_join_the_schematics_dir() {
        let config = RanchConfig::default();
        assert_eq!(
            config.structures.farm_schematic_path(),
            PathBuf::from("schematics/farm_island.schem")
        );
        assert_eq!(
            config.structures.market_schematic_path(),
            PathBuf::from("schematics/market.schem")
        );
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(RanchConfig::parse("world: [not a map").is_err());
    }
}
