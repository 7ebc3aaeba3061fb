//! Store configuration via `installit.toml`
//!
//! Names the JSON file behind each collection. On first open a default
//! `installit.toml` is created in the data directory; edit it to relocate
//! collections. Relative paths resolve against the data directory.

use installit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "installit.toml";

fn default_driver_groups() -> String {
    "driver_groups.json".to_string()
}

fn default_match_rules() -> String {
    "match_rules.json".to_string()
}

fn default_app_setting() -> String {
    "app_setting.json".to_string()
}

/// Collection file locations loaded from `installit.toml`.
///
/// # Example
///
/// ```toml
/// driver_groups = "driver_groups.json"
/// match_rules = "match_rules.json"
/// app_setting = "/etc/installit/app_setting.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// File holding the driver-group collection
    #[serde(default = "default_driver_groups")]
    pub driver_groups: String,
    /// File holding the match-rule collection
    #[serde(default = "default_match_rules")]
    pub match_rules: String,
    /// File holding the application setting
    #[serde(default = "default_app_setting")]
    pub app_setting: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            driver_groups: default_driver_groups(),
            match_rules: default_match_rules(),
            app_setting: default_app_setting(),
        }
    }
}

/// Absolute file paths for each collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Driver-group collection file
    pub driver_groups: PathBuf,
    /// Match-rule collection file
    pub match_rules: PathBuf,
    /// Application setting file
    pub app_setting: PathBuf,
}

impl StoreConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# install-it store configuration
#
# File behind each collection. Relative paths resolve against the
# directory containing this file.
driver_groups = "driver_groups.json"
match_rules = "match_rules.json"
app_setting = "app_setting.json"
"#
    }

    /// Reject empty file names
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("driver_groups", &self.driver_groups),
            ("match_rules", &self.match_rules),
            ("app_setting", &self.app_setting),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("'{}' must not be empty", key)));
            }
        }
        Ok(())
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve each file against `dir`. Absolute entries are kept as is.
    pub fn resolve(&self, dir: &Path) -> ResolvedPaths {
        ResolvedPaths {
            driver_groups: dir.join(&self.driver_groups),
            match_rules: dir.join(&self.match_rules),
            app_setting: dir.join(&self.app_setting),
        }
    }
}
