use std::path::Path;

use tracing::warn;

use crate::ai::SamplingStrategy;
use crate::error::ConfigError;
use crate::game::MIN_SIDE;

/// Largest side length accepted from configuration or the command line.
pub const MAX_SIDE: usize = 99;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub opponent: OpponentConfig,
}

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, cols: 6 }
    }
}

/// Random opponent settings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub strategy: SamplingStrategy,
    /// Fixed RNG seed; the opponent is seeded from the OS when unset.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_SIDE}, {MAX_SIDE}]"
            )));
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in [{MIN_SIDE}, {MAX_SIDE}]"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
