//! TOML-based application configuration.
//!
//! Stored at `~/.config/urgenda/config.toml`. Every field has a serde
//! default so a partial or absent file loads cleanly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::scheduler::RecomputeScheduler;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Recompute period in seconds for the watch loop.
    #[serde(default = "default_recompute_secs")]
    pub recompute_secs: u64,
}

fn default_recompute_secs() -> u64 {
    RecomputeScheduler::DEFAULT_PERIOD_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recompute_secs: default_recompute_secs(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::ParseFailed {
            path: PathBuf::from("~/.config/urgenda"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing out the default when no file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed, or if the
    /// default cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.recompute_secs, 10);
    }

    #[test]
    fn explicit_value_survives_round_trip() {
        let cfg = Config { recompute_secs: 60 };
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.recompute_secs, 60);
    }
}
