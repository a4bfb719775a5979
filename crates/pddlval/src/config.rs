// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validator configuration loaded from TOML or JSON files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::MarkerTable;
use crate::env;
use crate::error::{Result, ValidationError};
use crate::platform::default_binaries_dir;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory containing `windows/`, `linux/` and `macos/` tool folders
    /// (default: `binaries` next to the crate manifest)
    #[serde(default)]
    pub binaries_dir: Option<PathBuf>,

    /// Where literal content is materialized (default: OS temp dir)
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,

    /// Output markers for the installed VAL release
    #[serde(default)]
    pub markers: MarkerTable,
}

impl Config {
    /// Load a config file. `.json` files are parsed as JSON, anything else
    /// as TOML. Relative directories are resolved against the file's parent.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        let parsed: std::result::Result<Config, String> =
            if path.extension().is_some_and(|e| e == "json") {
                serde_json::from_str(&content).map_err(|e| e.to_string())
            } else {
                toml::from_str(&content).map_err(|e| e.to_string())
            };
        let mut config = parsed.map_err(|e| {
            ValidationError::Config(format!("invalid {}: {e}", path.display()))
        })?;
        config.markers.validate()?;

        let base = path.parent().unwrap_or(Path::new("."));
        config.binaries_dir = config.binaries_dir.map(|dir| base.join(dir));
        config.temp_dir = config.temp_dir.map(|dir| base.join(dir));
        Ok(config)
    }

    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| ValidationError::Config(e.to_string()))?;
        config.markers.validate()?;
        Ok(config)
    }

    /// Config from `PDDLVAL_CONFIG` (or defaults), with
    /// `PDDLVAL_BINARIES_DIR` applied on top.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::config_path() {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        if let Some(dir) = env::binaries_dir() {
            config.binaries_dir = Some(dir);
        }
        Ok(config)
    }

    /// Configured binaries directory, or the packaged default.
    pub fn resolved_binaries_dir(&self) -> PathBuf {
        self.binaries_dir.clone().unwrap_or_else(default_binaries_dir)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
