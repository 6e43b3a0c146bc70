//! Configuration for the `strata` driver, read from `strata.json5`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strata_core::pipeline::{SettingsError, StackSettings, ZoomSettings};
use strata_utils::range::InclusiveRange;
use thiserror::Error;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "strata.json5";

/// An error that can occur while loading the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The config file is not valid JSON5 for this schema.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: serde_json5::Error,
    },
    /// The pipeline knobs are out of range.
    #[error("Invalid pipeline settings: {0}")]
    Settings(#[from] SettingsError),
}

/// The region to sample, in zone coordinates.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Region {
    /// Columns to sample.
    pub x: InclusiveRange,
    /// Rows to sample.
    pub z: InclusiveRange,
}

/// The driver configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    /// World seed. Empty picks a random one; non-numeric text is hashed.
    pub seed: String,
    /// Cache ceiling of leaf layers.
    pub leaf_cache: usize,
    /// Zoom counts of the zone and river chains.
    pub zoom: ZoomSettings,
    /// Region to sample.
    pub region: Region,
    /// Worker threads, 0 for one per core.
    pub threads: usize,
}

impl Default for StrataConfig {
    fn default() -> Self {
        let stack = StackSettings::default();
        Self {
            seed: String::new(),
            leaf_cache: stack.leaf_cache,
            zoom: stack.zoom,
            region: Region::default(),
            threads: 0,
        }
    }
}

impl StrataConfig {
    /// Loads the config at `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its
    /// pipeline settings are out of range.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = match fs::read_to_string(path) {
            Ok(text) => serde_json5::from_str::<Self>(&text).map_err(|source| {
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        config.stack_settings().validate()?;
        Ok(config)
    }

    /// The pipeline knobs of this config.
    #[must_use]
    pub const fn stack_settings(&self) -> StackSettings {
        StackSettings {
            leaf_cache: self.leaf_cache,
            zoom: self.zoom,
        }
    }

    /// The world seed this config selects.
    ///
    /// An empty seed draws a random one, so repeated calls differ.
    #[must_use]
    pub fn world_seed(&self) -> i64 {
        if self.seed.is_empty() {
            rand::random()
        } else {
            parse_seed(&self.seed)
        }
    }
}

/// Parses a numeric seed, or hashes any other text with the 31-multiplier
/// string hash.
#[must_use]
pub fn parse_seed(seed: &str) -> i64 {
    seed.parse().unwrap_or_else(|_| {
        seed.bytes()
            .fold(0i64, |hash, byte| hash.wrapping_mul(31).wrapping_add(i64::from(byte)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seeds_parse() {
        assert_eq!(parse_seed("12345"), 12345);
        assert_eq!(parse_seed("-7"), -7);
    }

    #[test]
    fn text_seeds_hash() {
        assert_eq!(parse_seed("a"), 97);
        assert_eq!(parse_seed("ab"), 97 * 31 + 98);
        assert_ne!(parse_seed("strata"), parse_seed("atarts"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: StrataConfig =
            serde_json5::from_str("{ seed: 'abc', zoom: { river_size: 2 } }").expect("valid json5");
        assert_eq!(config.seed, "abc");
        assert_eq!(config.leaf_cache, 25);
        assert_eq!(config.zoom.biome_size, 4);
        assert_eq!(config.zoom.river_size, 2);
        assert_eq!(config.region.x, InclusiveRange::new(-64, 63));
    }

    #[test]
    fn region_ranges_parse() {
        let config: StrataConfig =
            serde_json5::from_str("{ region: { x: { min: 0, max: 15 }, z: { min: 8, max: 4 } } }")
                .expect("valid json5");
        assert_eq!(config.region.x.resolve(), 0..=15);
        // Empty ranges are accepted and degrade on use.
        assert_eq!(config.region.z.resolve(), 8..=8);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = StrataConfig::load(Path::new("does/not/exist.json5")).expect("defaults");
        assert_eq!(config.threads, 0);
        assert!(config.seed.is_empty());
    }

    #[test]
    fn out_of_range_settings_are_reported() {
        let mut config = StrataConfig::default();
        config.zoom.biome_size = 0;
        assert!(matches!(
            config.stack_settings().validate().map_err(ConfigError::from),
            Err(ConfigError::Settings(SettingsError::BiomeSize(0)))
        ));
    }
}
