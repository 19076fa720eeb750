//! Evaluation settings, optionally loaded from a TOML file.
//!
//! ```toml
//! max_depth = 500
//! check_cycles = true
//! ```

use std::path::Path;

use postgrid_engine::engine::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use serde::Deserialize;

use crate::error::{PostgridError, Result};

const MAX_CONFIG_FILE_BYTES: u64 = 65_536;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Deepest chain of cell references followed before a cell fails.
    pub max_depth: usize,
    /// Report reference cycles before evaluating.
    pub check_cycles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            check_cycles: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let open_err = |source| PostgridError::Open {
            path: path.to_path_buf(),
            source,
        };
        let meta = std::fs::metadata(path).map_err(open_err)?;
        if meta.len() > MAX_CONFIG_FILE_BYTES {
            return Err(PostgridError::Config {
                path: path.to_path_buf(),
                message: format!(
                    "file too large ({} bytes, max {})",
                    meta.len(),
                    MAX_CONFIG_FILE_BYTES
                ),
            });
        }
        let content = std::fs::read_to_string(path).map_err(open_err)?;
        Config::parse(&content).map_err(|message| PostgridError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse TOML text. Missing keys keep their defaults.
    pub fn parse(content: &str) -> std::result::Result<Config, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that TOML typing alone cannot express.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(1..=MAX_DEPTH_LIMIT).contains(&self.max_depth) {
            return Err(format!(
                "max_depth must be between 1 and {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            ));
        }
        Ok(())
    }
}
